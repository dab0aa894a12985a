use axum::response::Json;
use serde_json::{Value, json};

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Spotify stats relay is running"
    }))
}
