//! Movie service implementation.

use crate::cache::{cache_keys, CacheInterface};
use crate::lookup::CachedLookup;
use crate::movie_service::MovieService;
use async_trait::async_trait;
use movies_core::{Comment, Movie, MoviesError, MoviesResult};
use movies_repository::MovieRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Movie service backed by a cached lookup over a movie repository.
pub struct MovieServiceImpl<R: ?Sized> {
    movies: CachedLookup<Movie, R>,
}

impl<R: MovieRepository + ?Sized> MovieServiceImpl<R> {
    /// Creates a new movie service caching under the `Movie` group.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheInterface>) -> Self {
        Self {
            movies: CachedLookup::new(repository, cache, cache_keys::MOVIE),
        }
    }
}

#[async_trait]
impl<R: MovieRepository + ?Sized + 'static> MovieService for MovieServiceImpl<R> {
    async fn list_movies(&self) -> MoviesResult<Vec<Movie>> {
        debug!("Listing movies");
        self.movies.list().await
    }

    async fn get_movie(&self, imdb_id: &str) -> MoviesResult<Movie> {
        debug!("Getting movie: {}", imdb_id);
        self.movies.get(imdb_id).await
    }

    async fn create_movie(&self, movie: Movie) -> MoviesResult<Movie> {
        debug!("Creating movie: {}", movie.imdb_id);

        if self.movies.find(&movie.imdb_id).await?.is_some() {
            return Err(MoviesError::Conflict(format!(
                "Movie with id {} already exists",
                movie.imdb_id
            )));
        }

        let created = self.movies.save(&movie).await?;
        info!("Movie created: {}", created.imdb_id);
        Ok(created)
    }

    async fn save_movie(&self, movie: &Movie) -> MoviesResult<Movie> {
        self.movies.save(movie).await
    }

    async fn delete_movie(&self, imdb_id: &str) -> MoviesResult<Movie> {
        let movie = self.movies.get(imdb_id).await?;
        self.movies.delete(&movie).await?;
        info!("Movie deleted: {}", imdb_id);
        Ok(movie)
    }

    async fn add_comment(&self, imdb_id: &str, username: &str, text: &str) -> MoviesResult<Movie> {
        let mut movie = self.movies.get(imdb_id).await?;
        movie.add_comment(Comment::new(username, text));
        let saved = self.movies.save(&movie).await?;
        debug!("Comment by {} added to {}", username, imdb_id);
        Ok(saved)
    }
}

impl<R: ?Sized> std::fmt::Debug for MovieServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieServiceImpl")
            .field("movies", &self.movies)
            .finish()
    }
}
