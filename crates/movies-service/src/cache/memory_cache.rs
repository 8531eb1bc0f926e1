//! In-process cache used when Redis is disabled.

use super::CacheInterface;
use async_trait::async_trait;
use movies_core::MoviesResult;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// Grouped map held in process memory. Entries never expire.
#[derive(Debug, Default)]
pub struct MemoryCacheService {
    groups: RwLock<HashMap<String, HashMap<String, String>>>,
}

impl MemoryCacheService {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries held in a group.
    #[must_use]
    pub fn group_len(&self, group: &str) -> usize {
        self.groups.read().get(group).map_or(0, HashMap::len)
    }
}

#[async_trait]
impl CacheInterface for MemoryCacheService {
    async fn exists(&self, group: &str, key: &str) -> MoviesResult<bool> {
        Ok(self
            .groups
            .read()
            .get(group)
            .is_some_and(|entries| entries.contains_key(key)))
    }

    async fn get_raw(&self, group: &str, key: &str) -> MoviesResult<Option<String>> {
        let value = self
            .groups
            .read()
            .get(group)
            .and_then(|entries| entries.get(key).cloned());

        match &value {
            Some(_) => debug!("Cache hit for key '{}' in '{}'", key, group),
            None => debug!("Cache miss for key '{}' in '{}'", key, group),
        }

        Ok(value)
    }

    async fn put_raw(&self, group: &str, key: &str, value: &str) -> MoviesResult<()> {
        self.groups
            .write()
            .entry(group.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, group: &str, key: &str) -> MoviesResult<bool> {
        Ok(self
            .groups
            .write()
            .get_mut(group)
            .is_some_and(|entries| entries.remove(key).is_some()))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
