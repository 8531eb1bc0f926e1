//! Application state for Axum handlers.

use movies_repository::DatabasePoolInterface;
use movies_service::{MovieMapper, MovieService, UserExtraService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub movie_service: Arc<dyn MovieService>,
    pub user_extra_service: Arc<dyn UserExtraService>,
    pub mapper: MovieMapper,
    /// Database checked by `/ready`; `None` when running without one.
    pub database: Option<Arc<dyn DatabasePoolInterface>>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// The mapper resolves comment avatars through `user_extra_service`.
    pub fn new(
        movie_service: Arc<dyn MovieService>,
        user_extra_service: Arc<dyn UserExtraService>,
    ) -> Self {
        let mapper = MovieMapper::new(user_extra_service.clone());
        Self {
            movie_service,
            user_extra_service,
            mapper,
            database: None,
        }
    }

    /// Attaches the database checked by the readiness endpoint.
    #[must_use]
    pub fn with_database(mut self, database: Arc<dyn DatabasePoolInterface>) -> Self {
        self.database = Some(database);
        self
    }
}
