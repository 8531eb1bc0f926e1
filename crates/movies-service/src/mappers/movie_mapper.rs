//! Movie mapping with comment author enrichment.

use crate::dto::{
    CommentResponse, CreateMovieRequest, MovieResponse, UpdateMovieRequest, UserExtraResponse,
};
use crate::user_extra_service::UserExtraService;
use movies_core::{Comment, Movie, MoviesResult, UserExtra};
use std::sync::Arc;

/// Converts between movie DTOs and entities.
///
/// Comment responses carry the author's avatar, read from the store on
/// every call; the username stands in when the author has none.
#[derive(Clone)]
pub struct MovieMapper {
    user_extras: Arc<dyn UserExtraService>,
}

impl MovieMapper {
    /// Creates a mapper resolving avatars through `user_extras`.
    pub fn new(user_extras: Arc<dyn UserExtraService>) -> Self {
        Self { user_extras }
    }

    /// Builds a new movie without comments.
    #[must_use]
    pub fn to_movie(request: CreateMovieRequest) -> Movie {
        Movie::new(
            request.imdb_id,
            request.title,
            request.director,
            request.year,
            request.poster,
        )
    }

    /// Applies the fields present in `request`.
    pub fn update_movie(request: UpdateMovieRequest, movie: &mut Movie) {
        if let Some(title) = request.title {
            movie.title = title;
        }
        if let Some(director) = request.director {
            movie.director = director;
        }
        if let Some(year) = request.year {
            movie.year = year;
        }
        if let Some(poster) = request.poster {
            movie.poster = Some(poster);
        }
    }

    /// Maps a movie, resolving every comment author's avatar.
    pub async fn to_movie_response(&self, movie: &Movie) -> MoviesResult<MovieResponse> {
        let mut comments = Vec::with_capacity(movie.comments.len());
        for comment in &movie.comments {
            comments.push(self.to_comment_response(comment).await?);
        }

        Ok(MovieResponse {
            imdb_id: movie.imdb_id.clone(),
            title: movie.title.clone(),
            director: movie.director.clone(),
            year: movie.year,
            poster: movie.poster.clone(),
            comments,
        })
    }

    /// Maps a list of movies.
    pub async fn to_movie_responses(&self, movies: &[Movie]) -> MoviesResult<Vec<MovieResponse>> {
        let mut responses = Vec::with_capacity(movies.len());
        for movie in movies {
            responses.push(self.to_movie_response(movie).await?);
        }
        Ok(responses)
    }

    /// Maps a comment, resolving its author's avatar.
    pub async fn to_comment_response(&self, comment: &Comment) -> MoviesResult<CommentResponse> {
        let avatar = self
            .user_extras
            .find_user_extra(&comment.username)
            .await?
            .map_or_else(|| comment.username.clone(), |extra| extra.display_avatar().to_string());

        Ok(CommentResponse {
            username: comment.username.clone(),
            avatar,
            text: comment.text.clone(),
            timestamp: comment.timestamp,
        })
    }

    /// Maps a user's extras.
    #[must_use]
    pub fn to_user_extra_response(extra: &UserExtra) -> UserExtraResponse {
        UserExtraResponse {
            username: extra.username.clone(),
            avatar: extra.avatar.clone(),
        }
    }
}

impl std::fmt::Debug for MovieMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieMapper").finish_non_exhaustive()
    }
}
