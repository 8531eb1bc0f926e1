//! Redis-based cache implementation.
//!
//! Each group is a Redis hash: `HEXISTS`, `HGET`, `HSET` and `HDEL` against
//! the group name with the record key as field.

use super::CacheInterface;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use movies_core::{MoviesError, MoviesResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Redis-based cache service.
pub struct RedisCacheService {
    /// Redis connection pool.
    pool: Arc<Pool>,
    /// Expiry reset on the whole group after each put.
    group_ttl: Option<Duration>,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self {
            pool,
            group_ttl: None,
        }
    }

    /// Create a cache service that expires a group after `ttl` without puts.
    #[must_use]
    pub fn with_group_ttl(pool: Arc<Pool>, ttl: Option<Duration>) -> Self {
        Self {
            pool,
            group_ttl: ttl,
        }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> MoviesResult<deadpool_redis::Connection> {
        self.pool
            .get()
            .await
            .map_err(|e| MoviesError::Cache(format!("Failed to get Redis connection: {}", e)))
    }
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    async fn exists(&self, group: &str, key: &str) -> MoviesResult<bool> {
        let mut conn = self.get_conn().await?;
        let exists: bool = conn.hexists(group, key).await.map_err(|e| {
            MoviesError::Cache(format!("Failed to check key '{}' in '{}': {}", key, group, e))
        })?;

        Ok(exists)
    }

    async fn get_raw(&self, group: &str, key: &str) -> MoviesResult<Option<String>> {
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn.hget(group, key).await.map_err(|e| {
            MoviesError::Cache(format!("Failed to get key '{}' in '{}': {}", key, group, e))
        })?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}' in '{}'", key, group),
            None => debug!("Cache miss for key '{}' in '{}'", key, group),
        }

        Ok(value)
    }

    async fn put_raw(&self, group: &str, key: &str, value: &str) -> MoviesResult<()> {
        let mut conn = self.get_conn().await?;

        conn.hset::<_, _, _, ()>(group, key, value)
            .await
            .map_err(|e| {
                MoviesError::Cache(format!("Failed to set key '{}' in '{}': {}", key, group, e))
            })?;

        if let Some(ttl) = self.group_ttl {
            let secs = i64::try_from(ttl.as_secs().max(1)).unwrap_or(i64::MAX);
            conn.expire::<_, ()>(group, secs).await.map_err(|e| {
                MoviesError::Cache(format!("Failed to set expiry on '{}': {}", group, e))
            })?;
        }

        debug!("Cached key '{}' in '{}'", key, group);
        Ok(())
    }

    async fn delete(&self, group: &str, key: &str) -> MoviesResult<bool> {
        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn.hdel(group, key).await.map_err(|e| {
            MoviesError::Cache(format!("Failed to delete key '{}' in '{}': {}", key, group, e))
        })?;

        debug!("Deleted key '{}' in '{}': {}", key, group, deleted > 0);
        Ok(deleted > 0)
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheService")
            .field("group_ttl", &self.group_ttl)
            .finish_non_exhaustive()
    }
}
