use base64::{Engine, engine::general_purpose::STANDARD};
use rand::{Rng, distr::Alphanumeric};
use reqwest::{Client, header::AUTHORIZATION};

use crate::{config::Config, error::RelayError, types::TokenResponse};

/// Scopes requested during authorization. They cover exactly what the
/// stats routes read: profile, email, top items, and listening history.
const SCOPES: [&str; 4] = [
    "user-read-private",
    "user-read-email",
    "user-top-read",
    "user-read-recently-played",
];

/// Generates the opaque anti-forgery `state` value embedded in the
/// authorization URL.
///
/// The callback route never receives the `state` back from the client, so
/// nothing validates it today. It is kept in the URL regardless; dropping
/// it would silently loosen the contract with Spotify's authorize endpoint.
pub fn generate_state_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

/// Constructs the Spotify authorization URL the web client is redirected to.
///
/// The URL carries the code response type, the configured client ID, the
/// fixed scope set, the URL-encoded redirect URI, and a freshly generated
/// `state` token.
///
/// # Errors
///
/// Returns a configuration error when the client ID or the redirect URI is
/// not configured; no URL is produced in that case.
///
/// # Example
///
/// ```rust,ignore
/// let url = build_authorize_url(&config)?;
/// // https://accounts.spotify.com/authorize?response_type=code&client_id=...
/// ```
pub fn build_authorize_url(config: &Config) -> Result<String, RelayError> {
    let client_id = config.require_client_id()?;
    let redirect_uri = config.require_redirect_uri()?;

    Ok(format!(
        "{auth_url}?response_type=code&client_id={client_id}&scope={scope}&redirect_uri={redirect_uri}&state={state}",
        auth_url = config.auth_url,
        client_id = client_id,
        scope = SCOPES.join("%20"),
        redirect_uri = urlencoding::encode(redirect_uri),
        state = generate_state_token(),
    ))
}

/// Exchanges an authorization code for an access token.
///
/// Performs the single POST of the authorization-code grant against the
/// token endpoint. The confidential client credentials travel in an HTTP
/// Basic credential header; the form body carries the grant type, the code,
/// and the redirect URI that was used to obtain it.
///
/// # Errors
///
/// - Configuration error when client ID, client secret, or redirect URI is
///   unset (checked before any network traffic)
/// - Upstream error on a non-2xx token response; the upstream body is
///   logged and the caller gets a generic message
/// - Transport error when the request itself fails
pub async fn exchange_code(
    client: &Client,
    config: &Config,
    code: &str,
) -> Result<TokenResponse, RelayError> {
    let client_id = config.require_client_id()?;
    let client_secret = config.require_client_secret()?;
    let redirect_uri = config.require_redirect_uri()?;

    let credentials = STANDARD.encode(format!("{client_id}:{client_secret}"));

    let response = client
        .post(&config.token_url)
        .header(AUTHORIZATION, format!("Basic {credentials}"))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::error!("token exchange failed: {} {}", status, body);
        return Err(RelayError::Upstream {
            status: None,
            context: "Failed to exchange code for token",
        });
    }

    Ok(response.json::<TokenResponse>().await?)
}
