use std::fmt;

use serde::{Deserialize, Serialize};

/// Token payload as Spotify's token endpoint returns it. `scope` and
/// `refresh_token` are absent from some grant responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub scope: Option<String>,
    pub expires_in: u64,
    pub refresh_token: Option<String>,
}

/// Reply of the callback route: the subset of the token payload the web
/// client needs to talk to the stats routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenReply {
    pub access_token: String,
    pub expires_in: u64,
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginUrlResponse {
    #[serde(rename = "authUrl")]
    pub auth_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackRequest {
    pub code: Option<String>,
}

/// Aggregation window understood by Spotify's top-items endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    ShortTerm,
    #[default]
    MediumTerm,
    LongTerm,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Default page size for every stats query.
pub const DEFAULT_LIMIT: u32 = 20;

/// Query parameters of the top-tracks and top-artists routes. The time
/// range is relayed upstream as received; Spotify rejects values it does
/// not know.
#[derive(Debug, Clone, Deserialize)]
pub struct TopItemsQuery {
    pub time_range: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentlyPlayedQuery {
    pub limit: Option<u32>,
}
