//! Integration tests for the Redis cache and the cached movie service.
//!
//! These tests run against a real Redis server using testcontainers.
//! Requires Docker to be available on the system.

use movies_core::{Movie, Repository};
use movies_repository::{InMemoryMovieRepository, MovieRepository};
use movies_service::{
    cache_keys, CacheExt, CacheInterface, MovieService, MovieServiceImpl, RedisCacheService,
};
use std::sync::Arc;
use std::time::Duration;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::redis::Redis;

async fn start_redis() -> (ContainerAsync<Redis>, Arc<deadpool_redis::Pool>) {
    let container = Redis::default()
        .start()
        .await
        .expect("Failed to start Redis container");
    let port = container
        .get_host_port_ipv4(6379)
        .await
        .expect("Failed to get Redis port");

    let pool = deadpool_redis::Config::from_url(format!("redis://127.0.0.1:{}", port))
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    (container, Arc::new(pool))
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_hash_operations() {
    let (_container, pool) = start_redis().await;
    let cache = RedisCacheService::new(pool);

    assert!(!cache.exists("Movie", "movie_tt1").await.unwrap());

    cache.put("Movie", "movie_tt1", &"value").await.unwrap();
    assert!(cache.exists("Movie", "movie_tt1").await.unwrap());
    assert_eq!(
        cache.get::<String>("Movie", "movie_tt1").await.unwrap().as_deref(),
        Some("value")
    );
    assert!(!cache.exists("UserExtra", "movie_tt1").await.unwrap());

    assert!(cache.delete("Movie", "movie_tt1").await.unwrap());
    assert!(!cache.delete("Movie", "movie_tt1").await.unwrap());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_group_ttl_expires_group() {
    let (_container, pool) = start_redis().await;
    let cache = RedisCacheService::with_group_ttl(pool, Some(Duration::from_secs(1)));

    cache.put_raw("Movie", "movie_tt1", "{}").await.unwrap();
    tokio::time::sleep(Duration::from_millis(2100)).await;

    assert!(!cache.exists("Movie", "movie_tt1").await.unwrap());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_movie_service_against_redis() {
    let (_container, pool) = start_redis().await;
    let cache: Arc<dyn CacheInterface> = Arc::new(RedisCacheService::new(pool));
    let repo = Arc::new(InMemoryMovieRepository::new());
    let dyn_repo: Arc<dyn MovieRepository> = repo.clone();
    let service = MovieServiceImpl::new(dyn_repo, cache.clone());

    let movie = Movie::new("tt0133093", "The Matrix", "Lana Wachowski", 1999, None);
    service.create_movie(movie.clone()).await.unwrap();

    let key = cache_keys::MOVIE.hash_key("tt0133093");
    assert!(!cache.exists("Movie", &key).await.unwrap());

    assert_eq!(service.get_movie("tt0133093").await.unwrap(), movie);
    assert!(cache.exists("Movie", &key).await.unwrap());

    // A store-only change stays invisible until the entry is invalidated.
    let mut changed = movie.clone();
    changed.title = "Changed".to_string();
    repo.save(&changed).await.unwrap();
    assert_eq!(service.get_movie("tt0133093").await.unwrap().title, "The Matrix");

    service.add_comment("tt0133093", "alice", "hi").await.unwrap();
    let reloaded = service.get_movie("tt0133093").await.unwrap();
    assert_eq!(reloaded.comments.len(), 1);
}
