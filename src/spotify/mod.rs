//! # Spotify Integration Module
//!
//! This module is the integration layer between the relay's HTTP surface
//! and the Spotify Web API. It owns every outbound request: the OAuth
//! authorization-code exchange against the accounts service and the
//! read-only stats queries against the Web API.
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers (api)
//!        ↓
//! Spotify Integration Layer
//!     ├── Authorization (login URL, code-for-token exchange)
//!     └── Stats queries (profile, top items, recently played)
//!        ↓
//! HTTP Layer (reqwest, JSON)
//!        ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! [`auth`] - Implements the OAuth 2.0 authorization-code flow pieces the
//! relay needs: building the authorization URL the client is sent to, and
//! exchanging the returned code for an access token using the confidential
//! client credentials.
//!
//! [`stats`] - One function per upstream resource. Each issues a single
//! bearer-authenticated GET and hands the JSON body back untouched; there
//! is no caching, no retry, and no fan-out.
//!
//! ## Error Handling
//!
//! Upstream failures never leak their response bodies to the caller. The
//! body is written to the server log and the caller receives a generic
//! message, with the upstream status forwarded where the route contract
//! allows it.
//!
//! ## API Coverage
//!
//! - `GET /me` - profile of the authenticated user
//! - `GET /me/top/tracks` - top tracks over a time range
//! - `GET /me/top/artists` - top artists over a time range
//! - `GET /me/player/recently-played` - listening history
//! - `POST /api/token` - authorization-code exchange (accounts service)

pub mod auth;
pub mod stats;
