use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    http::{HeaderValue, Method, StatusCode, header},
    routing::{get, post},
};
use reqwest::Client;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::{api, config::Config};

/// State shared with every handler: the immutable configuration and one
/// reusable upstream HTTP client.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: Client,
}

/// Assembles the relay's router. Split out of [`start`] so tests can drive
/// the full surface without binding a socket.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(
            state
                .config
                .frontend_url
                .parse::<HeaderValue>()
                .expect("FRONTEND_URL is not a valid origin"),
        )
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    Router::new()
        .route("/auth/login", get(api::login))
        .route("/auth/callback", post(api::callback))
        .route("/stats/user", get(api::user))
        .route("/stats/top-tracks", get(api::top_tracks))
        .route("/stats/top-artists", get(api::top_artists))
        .route("/stats/recently-played", get(api::recently_played))
        .route("/health", get(api::health))
        .fallback(route_not_found)
        .layer(cors)
        .with_state(state)
}

async fn route_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found" })),
    )
}

pub async fn start(config: Config) {
    let port = config.port;
    let state = AppState {
        config: Arc::new(config),
        http: Client::new(),
    };

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await.unwrap();
    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app).await.unwrap();
}
