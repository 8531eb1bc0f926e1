//! In-memory repositories.
//!
//! Used by tests and local runs where no MySQL instance is available.

use crate::traits::{MovieRepository, UserExtraRepository};
use async_trait::async_trait;
use movies_core::{Entity, Movie, MoviesResult, Repository, UserExtra};
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Keyed in-memory store. `find_all` returns records in key order.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    records: RwLock<BTreeMap<String, T>>,
}

/// In-memory movie repository.
pub type InMemoryMovieRepository = InMemoryRepository<Movie>;

/// In-memory user extra repository.
pub type InMemoryUserExtraRepository = InMemoryRepository<UserExtra>;

impl<T: Entity + Clone> InMemoryRepository<T> {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Creates a repository seeded with records.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.records.write();
            for record in records {
                map.insert(record.id().to_string(), record);
            }
        }
        repo
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl<T: Entity + Clone> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Entity + Clone + Send + Sync,
{
    async fn find_by_id(&self, id: &str) -> MoviesResult<Option<T>> {
        Ok(self.records.read().get(id).cloned())
    }

    async fn find_all(&self) -> MoviesResult<Vec<T>> {
        Ok(self.records.read().values().cloned().collect())
    }

    async fn save(&self, entity: &T) -> MoviesResult<T> {
        self.records
            .write()
            .insert(entity.id().to_string(), entity.clone());
        Ok(entity.clone())
    }

    async fn delete(&self, id: &str) -> MoviesResult<bool> {
        Ok(self.records.write().remove(id).is_some())
    }
}

impl MovieRepository for InMemoryMovieRepository {}

impl UserExtraRepository for InMemoryUserExtraRepository {}

#[cfg(test)]
mod tests {
    use super::*;
    use movies_core::Comment;

    fn movie(id: &str, title: &str) -> Movie {
        Movie::new(id, title, "Someone", 2001, None)
    }

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let repo = InMemoryMovieRepository::new();
        let mut m = movie("tt0001", "First");
        m.add_comment(Comment::new("alice", "great"));

        repo.save(&m).await.unwrap();

        let found = repo.find_by_id("tt0001").await.unwrap().unwrap();
        assert_eq!(found, m);
        assert_eq!(found.comments.len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let repo = InMemoryMovieRepository::new();
        assert!(repo.find_by_id("tt404").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_existing() {
        let repo = InMemoryMovieRepository::with_records(vec![movie("tt0001", "Old")]);
        repo.save(&movie("tt0001", "New")).await.unwrap();

        assert_eq!(repo.len(), 1);
        let found = repo.find_by_id("tt0001").await.unwrap().unwrap();
        assert_eq!(found.title, "New");
    }

    #[tokio::test]
    async fn test_find_all_in_key_order() {
        let repo = InMemoryMovieRepository::with_records(vec![
            movie("tt0003", "Third"),
            movie("tt0001", "First"),
            movie("tt0002", "Second"),
        ]);

        let titles: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryUserExtraRepository::with_records(vec![UserExtra::new("alice")]);

        assert!(repo.delete("alice").await.unwrap());
        assert!(!repo.delete("alice").await.unwrap());
        assert!(repo.is_empty());
    }
}
