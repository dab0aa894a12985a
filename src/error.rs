//! Relay error taxonomy and its HTTP mapping.
//!
//! Every failure a handler can produce is one of the variants below, and
//! each renders as `{"error": "<message>"}` with the matching status code.
//! Upstream error bodies are logged server-side and never echoed to the
//! caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    /// A required environment value is unset (500).
    #[error("{0}")]
    Configuration(&'static str),

    /// A required request input is missing (400).
    #[error("{0}")]
    Validation(&'static str),

    /// The Authorization header is missing or malformed (401).
    #[error("{0}")]
    Authentication(&'static str),

    /// Spotify answered with a non-2xx status. The status is forwarded to
    /// the caller when known; the caller only ever sees `context`.
    #[error("{context}")]
    Upstream {
        status: Option<StatusCode>,
        context: &'static str,
    },

    /// The upstream request itself failed (connect, decode), mapped to 500.
    #[error("Upstream request failed")]
    Transport(#[from] reqwest::Error),
}

impl RelayError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Authentication(_) => StatusCode::UNAUTHORIZED,
            Self::Upstream { status, .. } => {
                status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        if let Self::Transport(ref err) = self {
            tracing::error!("upstream transport error: {}", err);
        }

        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
