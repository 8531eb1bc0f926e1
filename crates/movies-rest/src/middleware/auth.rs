//! Authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use movies_security::TokenProvider;
use std::sync::Arc;
use tracing::debug;

/// Authentication middleware state.
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub token_provider: Arc<TokenProvider>,
}

impl AuthMiddlewareState {
    /// Creates the middleware state.
    #[must_use]
    pub fn new(token_provider: Arc<TokenProvider>) -> Self {
        Self { token_provider }
    }
}

/// Validates a bearer token if one is present.
///
/// Valid claims are added to the request extensions. Requests without a
/// valid token still pass through; handlers that need a caller reject them.
pub async fn auth_middleware(
    State(state): State<AuthMiddlewareState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    if let Some(token) = token {
        match state.token_provider.validate_token(token) {
            Ok(claims) => {
                debug!("Authenticated user: {}", claims.username());
                request.extensions_mut().insert(claims);
            }
            Err(e) => {
                debug!("Token validation failed: {}", e);
            }
        }
    }

    next.run(request).await
}
