use axum::response::{IntoResponse, Json};
use time::OffsetDateTime;
use crate::HealthResponse;

/// Liveness probe. Always JSON, never negotiated.
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "OK",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: OffsetDateTime::now_utc().to_string(),
    })
}
