//! JWT claims extractor.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use movies_core::MoviesError;
use movies_security::{Claims, ClaimsExt};

/// Extractor for authenticated caller claims.
///
/// Claims are placed in the request extensions by the auth middleware when
/// the bearer token validates.
pub struct AuthenticatedUser(pub Claims);

impl AuthenticatedUser {
    /// Fails with `Forbidden` unless the caller holds `role`.
    pub fn require_role(&self, role: &str) -> Result<(), AppError> {
        self.0.require_role(role).map_err(AppError)
    }
}

impl std::ops::Deref for AuthenticatedUser {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                AppError(MoviesError::Unauthorized(
                    "Missing authorization header".to_string(),
                ))
            })?;

        if !auth_header.starts_with("Bearer ") {
            return Err(AppError(MoviesError::Unauthorized(
                "Invalid authorization format".to_string(),
            )));
        }

        let claims = parts.extensions.get::<Claims>().cloned().ok_or_else(|| {
            AppError(MoviesError::Unauthorized(
                "Invalid or expired token".to_string(),
            ))
        })?;

        Ok(AuthenticatedUser(claims))
    }
}
