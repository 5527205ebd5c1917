use axum::Json;
use serde_json::{Value, json};

pub async fn health() -> Json<Value> {
    tracing::debug!("service is live");
    Json(json!({ "status": "ok" }))
}
