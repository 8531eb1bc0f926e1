//! User extra service implementation.

use crate::cache::{cache_keys, CacheInterface};
use crate::lookup::CachedLookup;
use crate::user_extra_service::UserExtraService;
use async_trait::async_trait;
use movies_core::{MoviesResult, UserExtra};
use movies_repository::UserExtraRepository;
use std::sync::Arc;
use tracing::debug;

/// User extra service backed by a cached lookup.
pub struct UserExtraServiceImpl<R: ?Sized> {
    extras: CachedLookup<UserExtra, R>,
}

impl<R: UserExtraRepository + ?Sized> UserExtraServiceImpl<R> {
    /// Creates a new service caching under the `UserExtra` group.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheInterface>) -> Self {
        Self {
            extras: CachedLookup::new(repository, cache, cache_keys::USER_EXTRA),
        }
    }
}

#[async_trait]
impl<R: UserExtraRepository + ?Sized + 'static> UserExtraService for UserExtraServiceImpl<R> {
    async fn get_user_extra(&self, username: &str) -> MoviesResult<UserExtra> {
        self.extras.get(username).await
    }

    async fn find_user_extra(&self, username: &str) -> MoviesResult<Option<UserExtra>> {
        self.extras.find(username).await
    }

    async fn set_avatar(&self, username: &str, avatar: Option<String>) -> MoviesResult<UserExtra> {
        let mut extra = self
            .extras
            .find(username)
            .await?
            .unwrap_or_else(|| UserExtra::new(username));

        debug!("Setting avatar for {}", username);
        extra.avatar = avatar;
        self.extras.save(&extra).await
    }
}

impl<R: ?Sized> std::fmt::Debug for UserExtraServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserExtraServiceImpl")
            .field("extras", &self.extras)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCacheService;
    use movies_repository::InMemoryUserExtraRepository;

    fn service(
        extras: Vec<UserExtra>,
    ) -> (
        UserExtraServiceImpl<InMemoryUserExtraRepository>,
        Arc<MemoryCacheService>,
    ) {
        let cache = Arc::new(MemoryCacheService::new());
        let repo = Arc::new(InMemoryUserExtraRepository::with_records(extras));
        (UserExtraServiceImpl::new(repo, cache.clone()), cache)
    }

    #[tokio::test]
    async fn test_set_avatar_creates_missing_extra() {
        let (service, _) = service(vec![]);

        let saved = service
            .set_avatar("alice", Some("a.png".to_string()))
            .await
            .unwrap();

        assert_eq!(saved.username, "alice");
        assert_eq!(saved.avatar.as_deref(), Some("a.png"));
        assert_eq!(service.get_user_extra("alice").await.unwrap(), saved);
    }

    #[tokio::test]
    async fn test_set_avatar_invalidates_cached_extra() {
        let (service, cache) = service(vec![UserExtra::new("alice")]);

        assert_eq!(service.get_user_extra("alice").await.unwrap().avatar, None);
        assert_eq!(cache.group_len("UserExtra"), 1);

        service
            .set_avatar("alice", Some("new.png".to_string()))
            .await
            .unwrap();
        assert_eq!(cache.group_len("UserExtra"), 0);

        let extra = service.get_user_extra("alice").await.unwrap();
        assert_eq!(extra.avatar.as_deref(), Some("new.png"));
    }

    #[tokio::test]
    async fn test_find_does_not_populate_cache() {
        let (service, cache) = service(vec![UserExtra::new("bob")]);

        assert!(service.find_user_extra("bob").await.unwrap().is_some());
        assert!(service.find_user_extra("nobody").await.unwrap().is_none());
        assert_eq!(cache.group_len("UserExtra"), 0);
    }

    #[tokio::test]
    async fn test_get_missing_extra() {
        let (service, _) = service(vec![]);
        let err = service.get_user_extra("nobody").await.unwrap_err();
        assert_eq!(err.to_string(), "UserExtra with id nobody not found");
    }
}
