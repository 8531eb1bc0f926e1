//! Movie service trait definition.

use async_trait::async_trait;
use movies_core::{Movie, MoviesResult};

/// Movie service trait.
#[async_trait]
pub trait MovieService: Send + Sync {
    /// Lists all movies straight from the store.
    async fn list_movies(&self) -> MoviesResult<Vec<Movie>>;

    /// Gets a movie by IMDb id, through the cache.
    async fn get_movie(&self, imdb_id: &str) -> MoviesResult<Movie>;

    /// Creates a movie that does not exist yet.
    ///
    /// Never overwrites: if `imdb_id` is already stored this fails with
    /// `Conflict` and the stored movie, comments included, is left as is.
    /// Replacing an existing movie goes through [`save_movie`](Self::save_movie),
    /// which is an upsert.
    async fn create_movie(&self, movie: Movie) -> MoviesResult<Movie>;

    /// Saves an existing movie aggregate.
    async fn save_movie(&self, movie: &Movie) -> MoviesResult<Movie>;

    /// Deletes a movie and returns it as it was before deletion.
    async fn delete_movie(&self, imdb_id: &str) -> MoviesResult<Movie>;

    /// Puts a comment by `username` at the head of the movie's comments.
    async fn add_comment(&self, imdb_id: &str, username: &str, text: &str) -> MoviesResult<Movie>;
}
