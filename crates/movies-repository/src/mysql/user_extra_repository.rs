//! MySQL user extra repository implementation.

use crate::{traits::UserExtraRepository, DatabasePoolInterface};
use async_trait::async_trait;
use movies_core::{MoviesError, MoviesResult, Repository, UserExtra};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL user extra repository implementation.
#[derive(Clone)]
pub struct MySqlUserExtraRepository {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlUserExtraRepository {
    /// Creates a new MySQL user extra repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserExtraRow {
    username: String,
    avatar: Option<String>,
}

impl From<UserExtraRow> for UserExtra {
    fn from(row: UserExtraRow) -> Self {
        Self {
            username: row.username,
            avatar: row.avatar,
        }
    }
}

#[async_trait]
impl Repository<UserExtra> for MySqlUserExtraRepository {
    async fn find_by_id(&self, id: &str) -> MoviesResult<Option<UserExtra>> {
        debug!("Finding user extra by username: {}", id);

        let row = sqlx::query_as::<_, UserExtraRow>(
            "SELECT username, avatar FROM user_extras WHERE username = ?",
        )
        .bind(id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(UserExtra::from))
    }

    async fn find_all(&self) -> MoviesResult<Vec<UserExtra>> {
        let rows = sqlx::query_as::<_, UserExtraRow>(
            "SELECT username, avatar FROM user_extras ORDER BY username ASC",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(UserExtra::from).collect())
    }

    async fn save(&self, extra: &UserExtra) -> MoviesResult<UserExtra> {
        debug!("Saving user extra: {}", extra.username);

        sqlx::query(
            r#"
            INSERT INTO user_extras (username, avatar)
            VALUES (?, ?)
            ON DUPLICATE KEY UPDATE avatar = VALUES(avatar)
            "#,
        )
        .bind(&extra.username)
        .bind(&extra.avatar)
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(&extra.username).await?.ok_or_else(|| {
            MoviesError::Database(format!("User extra {} missing after save", extra.username))
        })
    }

    async fn delete(&self, id: &str) -> MoviesResult<bool> {
        let result = sqlx::query("DELETE FROM user_extras WHERE username = ?")
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl UserExtraRepository for MySqlUserExtraRepository {}
