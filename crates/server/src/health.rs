//! Liveness endpoint
use api_types::health::Health;
use axum::Json;

pub async fn get() -> Json<Health> {
    Json(Health::ok())
}
