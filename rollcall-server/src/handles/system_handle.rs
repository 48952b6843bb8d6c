use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use rollcall_api::models::HealthResponse;
use serde_json::json;
use time::OffsetDateTime;
use utoipa::OpenApi;

use crate::docs::ApiDoc;

#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: OffsetDateTime::now_utc(),
    })
}

pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

pub async fn not_found() -> impl IntoResponse {
    error_envelope(StatusCode::NOT_FOUND, "Route not found")
}

pub async fn method_not_allowed() -> impl IntoResponse {
    error_envelope(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

fn error_envelope(status: StatusCode, message: &str) -> impl IntoResponse {
    (
        status,
        Json(json!({
            "error": {
                "code": status.as_u16(),
                "message": message
            }
        })),
    )
}
