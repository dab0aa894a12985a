//! Configuration management for the Spotify stats relay.
//!
//! This module loads the process-wide configuration from environment
//! variables once at startup. The resulting [`Config`] is immutable and is
//! shared with every request handler through the application state; nothing
//! in the relay mutates configuration after boot.
//!
//! Spotify credentials are optional at load time: the operations that need
//! them (login-URL building, token exchange) fail with a configuration
//! error when they are missing, which keeps the stats routes and the health
//! check usable without credentials.

use std::env;

use crate::error::RelayError;

/// Process-wide configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth client ID issued by the Spotify developer dashboard.
    pub client_id: Option<String>,
    /// OAuth client secret paired with `client_id`.
    pub client_secret: Option<String>,
    /// Redirect URI registered in the Spotify application settings.
    pub redirect_uri: Option<String>,
    /// Origin allowed by CORS, i.e. where the web client is served from.
    pub frontend_url: String,
    /// TCP port the relay listens on.
    pub port: u16,
    /// Spotify authorization endpoint.
    pub auth_url: String,
    /// Spotify token-exchange endpoint.
    pub token_url: String,
    /// Spotify Web API base URL.
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            redirect_uri: None,
            frontend_url: "http://localhost:3000".to_string(),
            port: 3001,
            auth_url: "https://accounts.spotify.com/authorize".to_string(),
            token_url: "https://accounts.spotify.com/api/token".to_string(),
            api_url: "https://api.spotify.com/v1".to_string(),
        }
    }
}

impl Config {
    /// Builds the configuration from environment variables.
    ///
    /// Unset variables fall back to the defaults of [`Config::default`];
    /// none of them aborts startup. A `PORT` value that does not parse as a
    /// port number is treated as unset.
    ///
    /// # Environment Variables
    ///
    /// - `SPOTIFY_CLIENT_ID` - OAuth client ID
    /// - `SPOTIFY_CLIENT_SECRET` - OAuth client secret
    /// - `SPOTIFY_REDIRECT_URI` - registered OAuth redirect URI
    /// - `FRONTEND_URL` - CORS allow-origin (default `http://localhost:3000`)
    /// - `PORT` - listen port (default 3001)
    /// - `SPOTIFY_AUTH_URL`, `SPOTIFY_TOKEN_URL`, `SPOTIFY_API_URL` -
    ///   upstream endpoint overrides, defaulting to the public Spotify
    ///   endpoints
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let config = Config::from_env();
    /// println!("listening on port {}", config.port);
    /// ```
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            client_id: env::var("SPOTIFY_CLIENT_ID").ok(),
            client_secret: env::var("SPOTIFY_CLIENT_SECRET").ok(),
            redirect_uri: env::var("SPOTIFY_REDIRECT_URI").ok(),
            frontend_url: env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(defaults.port),
            auth_url: env::var("SPOTIFY_AUTH_URL").unwrap_or(defaults.auth_url),
            token_url: env::var("SPOTIFY_TOKEN_URL").unwrap_or(defaults.token_url),
            api_url: env::var("SPOTIFY_API_URL").unwrap_or(defaults.api_url),
        }
    }

    /// Returns the client ID or a configuration error when it is unset.
    pub fn require_client_id(&self) -> Result<&str, RelayError> {
        self.client_id.as_deref().ok_or(RelayError::Configuration(
            "SPOTIFY_CLIENT_ID environment variable is required",
        ))
    }

    /// Returns the client secret or a configuration error when it is unset.
    pub fn require_client_secret(&self) -> Result<&str, RelayError> {
        self.client_secret.as_deref().ok_or(RelayError::Configuration(
            "SPOTIFY_CLIENT_SECRET environment variable is required",
        ))
    }

    /// Returns the redirect URI or a configuration error when it is unset.
    pub fn require_redirect_uri(&self) -> Result<&str, RelayError> {
        self.redirect_uri.as_deref().ok_or(RelayError::Configuration(
            "SPOTIFY_REDIRECT_URI environment variable is required",
        ))
    }
}
