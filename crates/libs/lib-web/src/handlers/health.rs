use axum::Json;
use shared::HealthResponse;

pub async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Programming Club API running".to_string(),
        status: "OK".to_string(),
    })
}

pub async fn health() -> &'static str {
    "OK"
}
