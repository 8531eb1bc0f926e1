//! User extra service trait definition.

use async_trait::async_trait;
use movies_core::{MoviesResult, UserExtra};

/// User extra service trait.
#[async_trait]
pub trait UserExtraService: Send + Sync {
    /// Gets a user's extras through the cache.
    async fn get_user_extra(&self, username: &str) -> MoviesResult<UserExtra>;

    /// Reads a user's extras from the store, without the cache.
    async fn find_user_extra(&self, username: &str) -> MoviesResult<Option<UserExtra>>;

    /// Sets a user's avatar, creating their extras if none exist yet.
    async fn set_avatar(&self, username: &str, avatar: Option<String>) -> MoviesResult<UserExtra>;
}
