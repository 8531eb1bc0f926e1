//! The error type shared by every crate in the workspace.
//!
//! Each variant knows the HTTP status and the `error.code` string it is
//! reported with, so the REST layer never has to match on variants itself.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Anything that can go wrong while serving a movies request.
///
/// Only `NotFound`, `Validation`, `Conflict` and the auth variants are
/// expected in normal operation. Store and cache failures are not retried
/// and surface as a 500.
#[derive(Error, Debug)]
pub enum MoviesError {
    /// A movie or user extra is in neither the cache nor the store.
    #[error("{resource_type} with id {id} not found")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    /// Creating a movie whose `imdbId` is already taken.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated, but without the role the route needs.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    TokenExpired,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Redis failure, or a cached entry that no longer deserializes.
    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MoviesError {
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Unauthorized(_) | Self::InvalidToken(_) | Self::TokenExpired => 401,
            Self::Forbidden(_) => 403,
            Self::Database(_)
            | Self::Configuration(_)
            | Self::Cache(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// The `error.code` field of the response envelope.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::InvalidToken(_) => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// `resource_type` is the cache group name, e.g. `"Movie"`.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for MoviesError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            // 1062 / 23000: duplicate key
            sqlx::Error::Database(db_err)
                if db_err.code().is_some_and(|code| code == "1062" || code == "23000") =>
            {
                Self::Conflict(db_err.message().to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

/// Cached entries are JSON; a payload that fails to (de)serialize is a
/// cache problem, not a client one.
impl From<serde_json::Error> for MoviesError {
    fn from(err: serde_json::Error) -> Self {
        Self::Cache(format!("Cached value is not valid JSON: {}", err))
    }
}

/// The `error` object of a failed response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    /// Per-field failures, present only for 422 responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn from_error(error: &MoviesError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_code_per_variant() {
        let cases = [
            (MoviesError::not_found("Movie", "tt0133093"), 404, "NOT_FOUND"),
            (MoviesError::Validation("too many comments".into()), 400, "VALIDATION_ERROR"),
            (MoviesError::Conflict("tt0133093".into()), 409, "CONFLICT"),
            (MoviesError::Unauthorized("no token".into()), 401, "UNAUTHORIZED"),
            (MoviesError::InvalidToken("bad signature".into()), 401, "INVALID_TOKEN"),
            (MoviesError::TokenExpired, 401, "TOKEN_EXPIRED"),
            (MoviesError::Forbidden("movies-manager".into()), 403, "FORBIDDEN"),
            (MoviesError::Database("gone".into()), 500, "DATABASE_ERROR"),
            (MoviesError::Cache("redis down".into()), 500, "CACHE_ERROR"),
            (MoviesError::Configuration("port".into()), 500, "CONFIGURATION_ERROR"),
            (MoviesError::Internal("oops".into()), 500, "INTERNAL_ERROR"),
        ];

        for (err, status, code) in cases {
            assert_eq!(err.status_code(), status, "{err}");
            assert_eq!(err.error_code(), code, "{err}");
        }
    }

    #[test]
    fn test_not_found_message_names_the_movie() {
        let err = MoviesError::not_found("Movie", "tt0133093");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Movie with id tt0133093 not found");
    }

    #[test]
    fn test_anyhow_errors_are_internal() {
        let err: MoviesError = anyhow::anyhow!("unexpected").into();
        assert!(!err.is_not_found());
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
        assert_eq!(err.to_string(), "unexpected");
    }

    #[test]
    fn test_corrupt_cache_payload_is_cache_error() {
        let err: MoviesError = serde_json::from_str::<u32>("{").unwrap_err().into();
        assert!(matches!(err, MoviesError::Cache(_)));
    }

    #[test]
    fn test_error_response_omits_empty_details() {
        let response = ErrorResponse::from_error(&MoviesError::not_found("UserExtra", "alice"));
        assert_eq!(response.code, "NOT_FOUND");

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("details").is_none());
        assert!(json["message"].as_str().is_some_and(|m| m.contains("alice")));
    }
}
