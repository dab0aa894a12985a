use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::error::RelayError;

/// Bearer access token taken from the `Authorization` header.
///
/// Stats handlers receive the token as this typed extractor instead of
/// reading the header themselves. A missing header, a non-Bearer scheme,
/// or an empty token rejects the request with 401 before the handler body
/// runs. The token is treated as opaque; whether it is valid is for the
/// upstream API to decide.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = RelayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .filter(|token| !token.is_empty())
            .map(|token| BearerToken(token.to_string()))
            .ok_or(RelayError::Authentication("Access token is required"))
    }
}
