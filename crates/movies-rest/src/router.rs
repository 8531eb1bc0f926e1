//! Main application router.

use crate::{
    controllers::{health_controller, movie_controller, user_extra_controller},
    middleware::{auth_middleware, logging_middleware, AuthMiddlewareState},
    state::AppState,
};
use axum::{http::HeaderValue, middleware, routing::get, Router};
use movies_config::ServerConfig;
use movies_security::TokenProvider;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Creates the main application router.
///
/// Every `/api` request passes through the auth middleware, which attaches
/// validated claims; handlers decide whether a caller is required.
pub fn create_router(
    state: AppState,
    token_provider: Arc<TokenProvider>,
    server_config: &ServerConfig,
) -> Router {
    let cors = create_cors_layer(server_config);
    let auth_state = AuthMiddlewareState::new(token_provider);

    let api_router = Router::new()
        .nest("/movies", movie_controller::router())
        .nest("/userextras", user_extra_controller::router())
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    let router = Router::new()
        .merge(health_controller::router())
        .nest("/api", api_router)
        .route("/", get(root))
        .with_state(state)
        .layer(TimeoutLayer::new(server_config.request_timeout()))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    info!("Router created with movie, user extra and health endpoints");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }

    if server_config.cors_origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Movies API"
}
