use reqwest::Client;
use serde_json::Value;

use crate::{config::Config, error::RelayError};

/// Issues one bearer-authenticated GET and relays the JSON body.
///
/// On a non-2xx answer the upstream body is logged server-side and the
/// caller receives the upstream status plus the generic `context` message.
/// No retries, no timeout override beyond the transport default.
async fn get_json(
    client: &Client,
    url: &str,
    token: &str,
    context: &'static str,
) -> Result<Value, RelayError> {
    let response = client.get(url).bearer_auth(token).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::error!("Spotify API error: {} {}", status, body);
        return Err(RelayError::Upstream {
            status: Some(status),
            context,
        });
    }

    Ok(response.json::<Value>().await?)
}

/// Fetches the profile of the user the token belongs to.
pub async fn current_user(
    client: &Client,
    config: &Config,
    token: &str,
) -> Result<Value, RelayError> {
    let url = format!("{uri}/me", uri = config.api_url);
    get_json(client, &url, token, "Failed to fetch user data").await
}

/// Fetches the user's top tracks over the given time range.
pub async fn top_tracks(
    client: &Client,
    config: &Config,
    token: &str,
    time_range: &str,
    limit: u32,
) -> Result<Value, RelayError> {
    let url = format!(
        "{uri}/me/top/tracks?time_range={time_range}&limit={limit}",
        uri = config.api_url,
    );
    get_json(client, &url, token, "Failed to fetch top tracks").await
}

/// Fetches the user's top artists over the given time range.
pub async fn top_artists(
    client: &Client,
    config: &Config,
    token: &str,
    time_range: &str,
    limit: u32,
) -> Result<Value, RelayError> {
    let url = format!(
        "{uri}/me/top/artists?time_range={time_range}&limit={limit}",
        uri = config.api_url,
    );
    get_json(client, &url, token, "Failed to fetch top artists").await
}

/// Fetches the user's recently played tracks.
pub async fn recently_played(
    client: &Client,
    config: &Config,
    token: &str,
    limit: u32,
) -> Result<Value, RelayError> {
    let url = format!(
        "{uri}/me/player/recently-played?limit={limit}",
        uri = config.api_url,
    );
    get_json(client, &url, token, "Failed to fetch recently played tracks").await
}
