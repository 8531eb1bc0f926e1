//! MySQL movie repository implementation.

use crate::{traits::MovieRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use movies_core::{Comment, Movie, MoviesError, MoviesResult, Repository};
use sqlx::FromRow;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// MySQL movie repository implementation.
#[derive(Clone)]
pub struct MySqlMovieRepository {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlMovieRepository {
    /// Creates a new MySQL movie repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    async fn comments_for(&self, imdb_id: &str) -> MoviesResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT imdb_id, username, text, created_at
            FROM movie_comments
            WHERE imdb_id = ?
            ORDER BY position ASC
            "#,
        )
        .bind(imdb_id)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }
}

/// Database row representation of a movie, without comments.
#[derive(Debug, FromRow)]
struct MovieRow {
    imdb_id: String,
    title: String,
    director: String,
    year: i32,
    poster: Option<String>,
}

impl MovieRow {
    fn into_movie(self, comments: Vec<Comment>) -> Movie {
        Movie {
            imdb_id: self.imdb_id,
            title: self.title,
            director: self.director,
            year: self.year,
            poster: self.poster,
            comments,
        }
    }
}

/// Database row representation of a comment.
#[derive(Debug, FromRow)]
struct CommentRow {
    imdb_id: String,
    username: String,
    text: String,
    created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            username: row.username,
            text: row.text,
            timestamp: row.created_at,
        }
    }
}

#[async_trait]
impl Repository<Movie> for MySqlMovieRepository {
    async fn find_by_id(&self, id: &str) -> MoviesResult<Option<Movie>> {
        debug!("Finding movie by imdb id: {}", id);

        let row = sqlx::query_as::<_, MovieRow>(
            r#"
            SELECT imdb_id, title, director, year, poster
            FROM movies
            WHERE imdb_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.inner())
        .await?;

        match row {
            Some(row) => {
                let comments = self.comments_for(id).await?;
                Ok(Some(row.into_movie(comments)))
            }
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> MoviesResult<Vec<Movie>> {
        debug!("Finding all movies");

        let rows = sqlx::query_as::<_, MovieRow>(
            r#"
            SELECT imdb_id, title, director, year, poster
            FROM movies
            ORDER BY created_at ASC, imdb_id ASC
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        let comment_rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT imdb_id, username, text, created_at
            FROM movie_comments
            ORDER BY imdb_id ASC, position ASC
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        let mut comments: HashMap<String, Vec<Comment>> = HashMap::new();
        for row in comment_rows {
            comments
                .entry(row.imdb_id.clone())
                .or_default()
                .push(Comment::from(row));
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let movie_comments = comments.remove(&row.imdb_id).unwrap_or_default();
                row.into_movie(movie_comments)
            })
            .collect())
    }

    async fn save(&self, movie: &Movie) -> MoviesResult<Movie> {
        debug!(
            "Saving movie {} with {} comments",
            movie.imdb_id,
            movie.comments.len()
        );

        let mut tx = self.pool.inner().begin().await?;

        sqlx::query(
            r#"
            INSERT INTO movies (imdb_id, title, director, year, poster)
            VALUES (?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                title = VALUES(title),
                director = VALUES(director),
                year = VALUES(year),
                poster = VALUES(poster)
            "#,
        )
        .bind(&movie.imdb_id)
        .bind(&movie.title)
        .bind(&movie.director)
        .bind(movie.year)
        .bind(&movie.poster)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM movie_comments WHERE imdb_id = ?")
            .bind(&movie.imdb_id)
            .execute(&mut *tx)
            .await?;

        for (position, comment) in movie.comments.iter().enumerate() {
            let position = i32::try_from(position)
                .map_err(|_| MoviesError::Validation("Too many comments".to_string()))?;

            sqlx::query(
                r#"
                INSERT INTO movie_comments (imdb_id, position, username, text, created_at)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(&movie.imdb_id)
            .bind(position)
            .bind(&comment.username)
            .bind(&comment.text)
            .bind(comment.timestamp)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        info!("Movie saved: {}", movie.imdb_id);

        self.find_by_id(&movie.imdb_id).await?.ok_or_else(|| {
            MoviesError::Database(format!("Movie {} missing after save", movie.imdb_id))
        })
    }

    async fn delete(&self, id: &str) -> MoviesResult<bool> {
        debug!("Deleting movie: {}", id);

        let result = sqlx::query("DELETE FROM movies WHERE imdb_id = ?")
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl MovieRepository for MySqlMovieRepository {}
