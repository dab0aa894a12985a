//! # API Module
//!
//! HTTP handlers for the relay's public surface. Each handler validates
//! its inputs, performs at most one upstream call through the
//! [`crate::spotify`] layer, and returns either the relayed JSON or a
//! [`crate::error::RelayError`] rendered as an error envelope.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - Returns the Spotify authorization URL the client should
//!   visit.
//! - [`callback`] - Exchanges the authorization code posted by the client
//!   for an access token.
//!
//! ### Stats
//!
//! - [`user`], [`top_tracks`], [`top_artists`], [`recently_played`] -
//!   Bearer-gated 1:1 forwards to the Spotify Web API.
//!
//! ### Monitoring
//!
//! - [`health`] - Liveness endpoint, independent of upstream and
//!   configuration state.
//!
//! The bearer gate is the [`BearerToken`] extractor: stats handlers take it
//! as a typed parameter, so a missing or malformed Authorization header is
//! rejected with 401 before any upstream call.

mod auth;
mod bearer;
mod health;
mod stats;

pub use auth::{callback, login};
pub use bearer::BearerToken;
pub use health::health;
pub use stats::{recently_played, top_artists, top_tracks, user};
