//! Cache-aside lookup over a repository.
//!
//! Reads go to the cache first and populate it from the store on a miss.
//! Writes and deletes drop the cache entry before touching the store; a
//! cached value is never updated in place.

use crate::cache::{CacheExt, CacheGroup, CacheInterface};
use movies_core::{Entity, MoviesError, MoviesResult, Repository};
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info};

/// Read-through, write-invalidate access to one entity type.
pub struct CachedLookup<T, R: ?Sized> {
    repository: Arc<R>,
    cache: Arc<dyn CacheInterface>,
    group: CacheGroup,
    _entity: PhantomData<fn() -> T>,
}

impl<T, R> CachedLookup<T, R>
where
    T: Entity + Serialize + DeserializeOwned + Send + Sync,
    R: Repository<T> + ?Sized,
{
    /// Creates a lookup storing entries under `group`.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheInterface>, group: CacheGroup) -> Self {
        Self {
            repository,
            cache,
            group,
            _entity: PhantomData,
        }
    }

    /// Gets an entity, serving it from the cache when present.
    ///
    /// # Errors
    /// `NotFound` when neither the cache nor the store holds `id`.
    pub async fn get(&self, id: &str) -> MoviesResult<T> {
        let key = self.group.hash_key(id);

        if let Some(cached) = self.cache.get::<T>(self.group.name, &key).await? {
            debug!("{} {} served from cache", T::TYPE_NAME, id);
            return Ok(cached);
        }

        let entity = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| MoviesError::not_found(T::TYPE_NAME, id))?;

        self.cache.put(self.group.name, &key, &entity).await?;
        debug!("{} {} loaded from store and cached", T::TYPE_NAME, id);

        Ok(entity)
    }

    /// Persists an entity after invalidating its cache entry.
    pub async fn save(&self, entity: &T) -> MoviesResult<T> {
        self.invalidate(entity.id()).await?;
        let saved = self.repository.save(entity).await?;
        info!("{} {} saved", T::TYPE_NAME, entity.id());
        Ok(saved)
    }

    /// Deletes an entity after invalidating its cache entry.
    pub async fn delete(&self, entity: &T) -> MoviesResult<()> {
        self.invalidate(entity.id()).await?;
        self.repository.delete(entity.id()).await?;
        info!("{} {} deleted", T::TYPE_NAME, entity.id());
        Ok(())
    }

    /// Reads from the store only, bypassing the cache.
    pub async fn find(&self, id: &str) -> MoviesResult<Option<T>> {
        self.repository.find_by_id(id).await
    }

    /// Lists every stored entity, bypassing the cache.
    pub async fn list(&self) -> MoviesResult<Vec<T>> {
        self.repository.find_all().await
    }

    async fn invalidate(&self, id: &str) -> MoviesResult<()> {
        let key = self.group.hash_key(id);
        if self.cache.exists(self.group.name, &key).await? {
            self.cache.delete(self.group.name, &key).await?;
            debug!("Invalidated cache entry {} in {}", key, self.group.name);
        }
        Ok(())
    }
}

impl<T, R: ?Sized> std::fmt::Debug for CachedLookup<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedLookup")
            .field("group", &self.group)
            .field("backend", &self.cache.backend())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{cache_keys, MemoryCacheService, MockCacheInterface};
    use async_trait::async_trait;
    use mockall::mock;
    use movies_core::Movie;

    mock! {
        pub MovieRepo {}

        #[async_trait]
        impl Repository<Movie> for MovieRepo {
            async fn find_by_id(&self, id: &str) -> MoviesResult<Option<Movie>>;
            async fn find_all(&self) -> MoviesResult<Vec<Movie>>;
            async fn save(&self, entity: &Movie) -> MoviesResult<Movie>;
            async fn delete(&self, id: &str) -> MoviesResult<bool>;
        }
    }

    fn matrix() -> Movie {
        Movie::new("tt0133093", "The Matrix", "Lana Wachowski", 1999, None)
    }

    fn lookup(
        repo: MockMovieRepo,
        cache: Arc<MemoryCacheService>,
    ) -> CachedLookup<Movie, MockMovieRepo> {
        CachedLookup::new(Arc::new(repo), cache, cache_keys::MOVIE)
    }

    #[tokio::test]
    async fn test_get_missing_id_is_not_found() {
        let mut repo = MockMovieRepo::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));
        let cache = Arc::new(MemoryCacheService::new());

        let err = lookup(repo, cache.clone()).get("tt404").await.unwrap_err();

        assert!(matches!(
            err,
            MoviesError::NotFound { resource_type: "Movie", ref id } if id == "tt404"
        ));
        assert_eq!(cache.group_len("Movie"), 0);
    }

    #[tokio::test]
    async fn test_get_populates_cache_then_serves_from_it() {
        let mut repo = MockMovieRepo::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(matrix())));
        let cache = Arc::new(MemoryCacheService::new());
        let lookup = lookup(repo, cache.clone());

        let first = lookup.get("tt0133093").await.unwrap();
        let second = lookup.get("tt0133093").await.unwrap();

        assert_eq!(first, matrix());
        assert_eq!(second, first);
        assert!(cache.exists("Movie", "movie_tt0133093").await.unwrap());
    }

    #[tokio::test]
    async fn test_cached_value_wins_over_store_until_invalidated() {
        let mut stale = matrix();
        stale.title = "Stale Title".to_string();

        let mut repo = MockMovieRepo::new();
        repo.expect_find_by_id().never();
        let cache = Arc::new(MemoryCacheService::new());
        cache.put("Movie", "movie_tt0133093", &stale).await.unwrap();

        let got = lookup(repo, cache).get("tt0133093").await.unwrap();
        assert_eq!(got.title, "Stale Title");
    }

    #[tokio::test]
    async fn test_save_invalidates_before_writing() {
        let mut stale = matrix();
        stale.title = "Stale Title".to_string();
        let mut updated = matrix();
        updated.title = "Updated Title".to_string();

        let stored = updated.clone();
        let mut repo = MockMovieRepo::new();
        repo.expect_save().times(1).returning(|m| Ok(m.clone()));
        repo.expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        let cache = Arc::new(MemoryCacheService::new());
        cache.put("Movie", "movie_tt0133093", &stale).await.unwrap();
        let lookup = lookup(repo, cache.clone());

        let saved = lookup.save(&updated).await.unwrap();
        assert!(!cache.exists("Movie", "movie_tt0133093").await.unwrap());

        let got = lookup.get("tt0133093").await.unwrap();
        assert_eq!(got, saved);
    }

    #[tokio::test]
    async fn test_save_without_cached_entry_skips_delete() {
        let mut repo = MockMovieRepo::new();
        repo.expect_save().times(1).returning(|m| Ok(m.clone()));

        let mut cache = MockCacheInterface::new();
        cache.expect_exists().times(1).returning(|_, _| Ok(false));
        cache.expect_delete().never();
        cache.expect_put_raw().never();

        let lookup: CachedLookup<Movie, MockMovieRepo> =
            CachedLookup::new(Arc::new(repo), Arc::new(cache), cache_keys::MOVIE);

        lookup.save(&matrix()).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_removes_cache_and_store_entries() {
        let mut repo = MockMovieRepo::new();
        repo.expect_delete().times(1).returning(|_| Ok(true));
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let cache = Arc::new(MemoryCacheService::new());
        cache.put("Movie", "movie_tt0133093", &matrix()).await.unwrap();
        let lookup = lookup(repo, cache.clone());

        lookup.delete(&matrix()).await.unwrap();

        assert_eq!(cache.group_len("Movie"), 0);
        assert!(lookup.get("tt0133093").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_find_and_list_bypass_cache() {
        let mut repo = MockMovieRepo::new();
        repo.expect_find_by_id()
            .times(2)
            .returning(|_| Ok(Some(matrix())));
        repo.expect_find_all()
            .times(1)
            .returning(|| Ok(vec![matrix()]));
        let cache = Arc::new(MemoryCacheService::new());
        let lookup = lookup(repo, cache.clone());

        assert!(lookup.find("tt0133093").await.unwrap().is_some());
        assert!(lookup.find("tt0133093").await.unwrap().is_some());
        assert_eq!(lookup.list().await.unwrap().len(), 1);
        assert_eq!(cache.group_len("Movie"), 0);
    }

    #[tokio::test]
    async fn test_cache_errors_propagate() {
        let mut repo = MockMovieRepo::new();
        repo.expect_find_by_id().never();

        let mut cache = MockCacheInterface::new();
        cache
            .expect_get_raw()
            .returning(|_, _| Err(MoviesError::Cache("connection refused".to_string())));

        let lookup: CachedLookup<Movie, MockMovieRepo> =
            CachedLookup::new(Arc::new(repo), Arc::new(cache), cache_keys::MOVIE);

        let err = lookup.get("tt0133093").await.unwrap_err();
        assert_eq!(err.error_code(), "CACHE_ERROR");
    }
}
