//! Cache interface trait for grouped key-value caching.

use async_trait::async_trait;
use movies_core::MoviesResult;

/// Cache interface over a mapping store keyed by `(group, key)`.
///
/// Values are JSON strings so the trait stays dyn-compatible. A group maps to
/// one Redis hash; keys are hash fields.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheInterface: Send + Sync {
    /// Checks whether `key` is present in `group`.
    async fn exists(&self, group: &str, key: &str) -> MoviesResult<bool>;

    /// Gets a raw JSON value.
    async fn get_raw(&self, group: &str, key: &str) -> MoviesResult<Option<String>>;

    /// Stores a raw JSON value, replacing any previous one.
    async fn put_raw(&self, group: &str, key: &str, value: &str) -> MoviesResult<()>;

    /// Removes a value.
    ///
    /// Returns `true` if the key existed.
    async fn delete(&self, group: &str, key: &str) -> MoviesResult<bool>;

    /// Name of the backing store, for logs and health output.
    fn backend(&self) -> &'static str;
}

/// Typed get/put on top of [`CacheInterface`].
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Gets a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(
        &self,
        group: &str,
        key: &str,
    ) -> MoviesResult<Option<T>> {
        match self.get_raw(group, key).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Stores a typed value in the cache.
    async fn put<T: serde::Serialize + Send + Sync>(
        &self,
        group: &str,
        key: &str,
        value: &T,
    ) -> MoviesResult<()> {
        let json = serde_json::to_string(value)?;
        self.put_raw(group, key, &json).await
    }
}

impl<T: CacheInterface + ?Sized> CacheExt for T {}
