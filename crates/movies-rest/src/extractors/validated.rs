//! Validated JSON extractor for automatic request validation.
//!
//! Deserializes JSON and validates it with the `validator` crate. Malformed
//! JSON is a 400; validation failures are a 422 with field-level details.

use crate::responses::ApiResponse;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use movies_core::{field_errors, ErrorResponse, FieldError};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// JSON extractor that validates the deserialized value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection type for validated JSON extraction.
pub enum ValidatedJsonRejection {
    /// JSON parsing/deserialization error.
    JsonError(JsonRejection),
    /// Validation error with field-level details.
    ValidationError(ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::JsonError(rejection) => {
                let error_response = ErrorResponse {
                    code: "INVALID_JSON".to_string(),
                    message: format!("Invalid JSON: {}", rejection.body_text()),
                    details: None,
                };
                (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::<()>::error(error_response)),
                )
                    .into_response()
            }
            Self::ValidationError(errors) => {
                let error_response = ErrorResponse {
                    code: "VALIDATION_ERROR".to_string(),
                    message: "Request validation failed".to_string(),
                    details: Some(wire_field_errors(&errors)),
                };
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ApiResponse::<()>::error(error_response)),
                )
                    .into_response()
            }
        }
    }
}

/// Field errors named as clients spell the fields (`imdb_id` becomes `imdbId`).
fn wire_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    field_errors(errors)
        .into_iter()
        .map(|error| FieldError {
            field: camel_case(&error.field),
            ..error
        })
        .collect()
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("imdb_id"), "imdbId");
        assert_eq!(camel_case("title"), "title");
        assert_eq!(camel_case("poster_url_large"), "posterUrlLarge");
    }

    #[test]
    fn test_wire_field_errors_use_camel_case_names() {
        let mut errors = ValidationErrors::new();
        errors.add("imdb_id", ValidationError::new("imdb_id_prefix"));

        let details = wire_field_errors(&errors);

        assert_eq!(details.len(), 1);
        assert_eq!(details[0].field, "imdbId");
        assert_eq!(details[0].code, "imdb_id_prefix");
    }
}
