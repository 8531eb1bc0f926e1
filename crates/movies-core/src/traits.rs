//! Core traits shared across layers.

use crate::MoviesResult;
use async_trait::async_trait;

/// Trait for entities identified by a unique, immutable string key.
pub trait Entity {
    /// Name of the entity type, used in errors and logs.
    const TYPE_NAME: &'static str;

    /// Returns the entity's unique identifier.
    fn id(&self) -> &str;
}

/// Base repository trait for keyed CRUD against the system of record.
///
/// Every entity is stored under its [`Entity::id`]. `save` is an upsert and
/// returns the value as persisted, which may include store-assigned fields.
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Entity + Send + Sync,
{
    /// Finds an entity by its ID.
    async fn find_by_id(&self, id: &str) -> MoviesResult<Option<T>>;

    /// Finds all entities.
    async fn find_all(&self) -> MoviesResult<Vec<T>>;

    /// Inserts or replaces an entity.
    async fn save(&self, entity: &T) -> MoviesResult<T>;

    /// Deletes an entity by its ID.
    ///
    /// Returns `true` if a record was removed.
    async fn delete(&self, id: &str) -> MoviesResult<bool>;
}
