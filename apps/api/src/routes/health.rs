use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Always succeeds; makes no model call.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
