use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::Value;

use crate::{
    api::BearerToken,
    error::RelayError,
    server::AppState,
    spotify,
    types::{DEFAULT_LIMIT, RecentlyPlayedQuery, TimeRange, TopItemsQuery},
};

/// `GET /stats/user` - profile of the token's owner.
pub async fn user(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<Value>, RelayError> {
    let user = spotify::stats::current_user(&state.http, &state.config, &token).await?;
    Ok(Json(user))
}

/// `GET /stats/top-tracks?time_range=&limit=`
pub async fn top_tracks(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Query(query): Query<TopItemsQuery>,
) -> Result<Json<Value>, RelayError> {
    let time_range = query
        .time_range
        .as_deref()
        .unwrap_or(TimeRange::default().as_str());
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let tracks =
        spotify::stats::top_tracks(&state.http, &state.config, &token, time_range, limit).await?;
    Ok(Json(tracks))
}

/// `GET /stats/top-artists?time_range=&limit=`
pub async fn top_artists(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Query(query): Query<TopItemsQuery>,
) -> Result<Json<Value>, RelayError> {
    let time_range = query
        .time_range
        .as_deref()
        .unwrap_or(TimeRange::default().as_str());
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let artists =
        spotify::stats::top_artists(&state.http, &state.config, &token, time_range, limit).await?;
    Ok(Json(artists))
}

/// `GET /stats/recently-played?limit=`
pub async fn recently_played(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Query(query): Query<RecentlyPlayedQuery>,
) -> Result<Json<Value>, RelayError> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let recent =
        spotify::stats::recently_played(&state.http, &state.config, &token, limit).await?;
    Ok(Json(recent))
}
