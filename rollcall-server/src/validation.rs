use async_trait::async_trait;
use axum::Json;
use axum::extract::{FromRequest, Request};
use rollcall_api::format::parse_calendar_date;
use rollcall_api::models::{CreateGroupRequest, SubmitResponseRequest};
use serde::de::DeserializeOwned;

use crate::errors::{ApiError, ValidationError};
use crate::models::{NewGroup, NewResponse};

/// Upper bound, in characters, for group and participant names.
pub const MAX_NAME_LENGTH: usize = 255;

/// Turns a decoded request into the value the stores accept.
pub trait Validate {
    type Output;

    fn validate(self) -> Result<Self::Output, ValidationError>;
}

fn check_name(errors: &mut ValidationError, field: &str, value: &str) {
    let length = value.chars().count();

    if length == 0 {
        errors.push(field, "must contain at least 1 character");
    } else if length > MAX_NAME_LENGTH {
        errors.push(field, format!("must contain at most {MAX_NAME_LENGTH} characters"));
    }
}

impl Validate for CreateGroupRequest {
    type Output = NewGroup;

    fn validate(self) -> Result<NewGroup, ValidationError> {
        let mut errors = ValidationError::default();

        check_name(&mut errors, "name", &self.name);

        let Some(date) = parse_calendar_date(&self.date) else {
            errors.push("date", "Invalid date format");
            return Err(errors);
        };

        errors.into_result(NewGroup {
            name: self.name,
            description: self.description,
            date,
        })
    }
}

impl Validate for SubmitResponseRequest {
    type Output = NewResponse;

    fn validate(self) -> Result<NewResponse, ValidationError> {
        let mut errors = ValidationError::default();

        check_name(&mut errors, "userName", &self.user_name);

        errors.into_result(NewResponse {
            user_name: self.user_name,
            is_available: self.is_available,
            message: self.message,
        })
    }
}

/// JSON body extractor whose failures (bad syntax, missing fields, wrong
/// types) surface as validation errors naming the offending field.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::single("body", rejection.body_text()))?;

        let payload = serde_path_to_error::deserialize(value).map_err(|err| {
            let message = err.inner().to_string();
            let field = match err.path().to_string() {
                path if path == "." => missing_field(&message).unwrap_or("body").to_string(),
                path => path,
            };

            ValidationError::single(field, message)
        })?;

        Ok(Self(payload))
    }
}

fn missing_field(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")?
        .split('`')
        .next()
}
