use axum::{Json, extract::State};

use crate::{
    error::RelayError,
    server::AppState,
    spotify,
    types::{CallbackRequest, LoginUrlResponse, TokenReply},
};

/// `GET /auth/login` - hands the client the authorization URL to visit.
pub async fn login(State(state): State<AppState>) -> Result<Json<LoginUrlResponse>, RelayError> {
    let auth_url = spotify::auth::build_authorize_url(&state.config)?;
    Ok(Json(LoginUrlResponse { auth_url }))
}

/// `POST /auth/callback` - exchanges the posted authorization code for an
/// access token and reshapes the reply to what the web client stores.
pub async fn callback(
    State(state): State<AppState>,
    Json(request): Json<CallbackRequest>,
) -> Result<Json<TokenReply>, RelayError> {
    let code = request
        .code
        .as_deref()
        .filter(|code| !code.is_empty())
        .ok_or(RelayError::Validation("Authorization code is required"))?;

    let token = spotify::auth::exchange_code(&state.http, &state.config, code).await?;

    Ok(Json(TokenReply {
        access_token: token.access_token,
        expires_in: token.expires_in,
        token_type: token.token_type,
    }))
}
