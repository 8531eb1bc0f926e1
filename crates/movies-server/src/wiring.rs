//! Component wiring.
//!
//! Builds the object graph by hand: database pool, repositories, cache,
//! services, token provider and the REST state that ties them together.

use deadpool_redis::{Pool, Runtime};
use movies_config::{AppConfig, RedisConfig};
use movies_core::{MoviesError, MoviesResult};
use movies_repository::{
    create_pool, DatabasePoolInterface, MovieRepository, MySqlMovieRepository,
    MySqlUserExtraRepository, UserExtraRepository,
};
use movies_rest::AppState;
use movies_security::TokenProvider;
use movies_service::{
    CacheInterface, MemoryCacheService, MovieService, MovieServiceImpl, RedisCacheService,
    UserExtraService, UserExtraServiceImpl,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Everything the server needs to start serving.
pub struct Components {
    pub state: AppState,
    pub token_provider: Arc<TokenProvider>,
    pub database: Arc<dyn DatabasePoolInterface>,
    pub cache_backend: &'static str,
}

/// Connects to the database, runs migrations if enabled and wires all services.
pub async fn build_components(config: &AppConfig) -> MoviesResult<Components> {
    let pool = create_pool(&config.database).await?;
    let database: Arc<dyn DatabasePoolInterface> = pool;

    if config.database.run_migrations {
        database.run_migrations().await?;
    } else {
        info!("Skipping database migrations");
    }

    let cache = build_cache(&config.redis)?;
    let cache_backend = cache.backend();
    let state = build_state(database.clone(), cache).with_database(database.clone());
    let token_provider = Arc::new(TokenProvider::new(Arc::new(config.security.clone())));

    Ok(Components {
        state,
        token_provider,
        database,
        cache_backend,
    })
}

/// Builds the MySQL-backed services on top of `cache`.
pub fn build_state(
    database: Arc<dyn DatabasePoolInterface>,
    cache: Arc<dyn CacheInterface>,
) -> AppState {
    let movie_repository: Arc<dyn MovieRepository> =
        Arc::new(MySqlMovieRepository::new(database.clone()));
    let user_extra_repository: Arc<dyn UserExtraRepository> =
        Arc::new(MySqlUserExtraRepository::new(database));

    let movie_service: Arc<dyn MovieService> =
        Arc::new(MovieServiceImpl::new(movie_repository, cache.clone()));
    let user_extra_service: Arc<dyn UserExtraService> =
        Arc::new(UserExtraServiceImpl::new(user_extra_repository, cache));

    AppState::new(movie_service, user_extra_service)
}

/// Picks the cache backend: Redis when enabled, otherwise in-process maps.
pub fn build_cache(config: &RedisConfig) -> MoviesResult<Arc<dyn CacheInterface>> {
    if !config.enabled {
        warn!("Redis disabled, using in-memory cache");
        return Ok(Arc::new(MemoryCacheService::new()));
    }

    let pool = create_redis_pool(config)?;
    info!("Redis cache configured (group TTL: {:?})", config.group_ttl());
    Ok(Arc::new(RedisCacheService::with_group_ttl(
        pool,
        config.group_ttl(),
    )))
}

/// Creates a Redis connection pool. Connections are opened on first use.
pub fn create_redis_pool(config: &RedisConfig) -> MoviesResult<Arc<Pool>> {
    let mut redis_cfg = deadpool_redis::Config::from_url(&config.url);
    redis_cfg.pool = Some(deadpool_redis::PoolConfig::new(config.pool_size));

    let pool = redis_cfg
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| MoviesError::Cache(format!("Failed to create Redis pool: {}", e)))?;

    Ok(Arc::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_redis_uses_memory_cache() {
        let config = RedisConfig {
            enabled: false,
            ..RedisConfig::default()
        };

        let cache = build_cache(&config).unwrap();
        assert_eq!(cache.backend(), "memory");
    }

    #[tokio::test]
    async fn test_enabled_redis_builds_lazily() {
        let config = RedisConfig {
            enabled: true,
            url: "redis://127.0.0.1:6399".to_string(),
            ..RedisConfig::default()
        };

        let cache = build_cache(&config).unwrap();
        assert_eq!(cache.backend(), "redis");
    }

    #[test]
    fn test_invalid_redis_url_is_rejected() {
        let config = RedisConfig {
            enabled: true,
            url: "not-a-url".to_string(),
            ..RedisConfig::default()
        };

        let err = create_redis_pool(&config).unwrap_err();
        assert!(matches!(err, MoviesError::Cache(_)));
    }
}
