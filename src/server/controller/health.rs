use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::model::api::HealthDto;

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness check. Does not touch the database.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "API is running", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "OK".to_string(),
            message: "Trackify API is running".to_string(),
            timestamp: Utc::now(),
        }),
    )
}
