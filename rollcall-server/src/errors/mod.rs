pub mod api;
pub mod group;
pub mod validation;

pub use api::ApiError;
pub use group::GroupError;
pub use validation::{FieldViolation, ValidationError};

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use uuid::Uuid;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Extract status code and error message from the specific error type
        let (status, error_message, error_id, details) = match self {
            ApiError::GroupError(e) => (e.status_code(), e.to_string(), None, None),
            ApiError::ValidationError(e) => {
                tracing::debug!(violations = ?e.violations(), "rejected invalid payload");
                (e.status_code(), e.to_string(), None, Some(e.into_violations()))
            }
            ApiError::DatabaseError(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(error_id.to_string()),
                    None,
                )
            }
            ApiError::InternalError(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Internal error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(error_id.to_string()),
                    None,
                )
            }
        };

        // Create a consistent JSON error response
        let mut error_obj = json!({
            "code": status.as_u16(),
            "message": error_message
        });

        // Add error_id if available (for internal errors)
        if let Some(error_id) = error_id {
            error_obj["error_id"] = json!(error_id);
        }

        if let Some(details) = details {
            error_obj["details"] = json!(details);
        }

        let body = Json(json!({
            "error": error_obj
        }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}
