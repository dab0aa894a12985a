//! Spotify Stats Relay Library
//!
//! This library implements a small backend relay in front of the Spotify Web
//! API. A browser client never sees the OAuth client secret: it asks this
//! service for a login URL, posts the authorization code back, and from then
//! on calls the stats endpoints with the bearer token it obtained. Every
//! route forwards exactly one request upstream and relays the JSON reply.
//!
//! # Modules
//!
//! - `api` - HTTP handlers and the bearer-token extractor
//! - `config` - Configuration management and environment variables
//! - `error` - The relay error taxonomy and its HTTP mapping
//! - `server` - Router assembly and server startup
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```rust,ignore
//! use spotirelay::{config::Config, server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env();
//!     server::start(config).await;
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;
pub mod types;
