//! Movie catalogue controller.

use crate::{
    extractors::{AuthenticatedUser, ValidatedJson},
    responses::{created, ok, ApiResult, CreatedResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use movies_security::roles;
use movies_service::{
    AddCommentRequest, CreateMovieRequest, MovieMapper, MovieResponse, UpdateMovieRequest,
};
use tracing::debug;

/// Creates the movie router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_movies).post(create_movie))
        .route(
            "/:imdb_id",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
        .route("/:imdb_id/comments", post(add_comment))
}

/// List all movies.
async fn list_movies(State(state): State<AppState>) -> ApiResult<Vec<MovieResponse>> {
    let movies = state.movie_service.list_movies().await?;
    let responses = state.mapper.to_movie_responses(&movies).await?;
    ok(responses)
}

/// Get a movie by IMDb id.
async fn get_movie(
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> ApiResult<MovieResponse> {
    debug!("Get movie request: {}", imdb_id);

    let movie = state.movie_service.get_movie(&imdb_id).await?;
    ok(state.mapper.to_movie_response(&movie).await?)
}

/// Create a movie (movie managers only).
async fn create_movie(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<CreateMovieRequest>,
) -> CreatedResult<MovieResponse> {
    debug!("Create movie request: {}", request.imdb_id);

    user.require_role(roles::MOVIES_MANAGER)?;

    let movie = state
        .movie_service
        .create_movie(MovieMapper::to_movie(request))
        .await?;
    created(state.mapper.to_movie_response(&movie).await?)
}

/// Partially update a movie (movie managers only).
async fn update_movie(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(imdb_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateMovieRequest>,
) -> ApiResult<MovieResponse> {
    debug!("Update movie request: {}", imdb_id);

    user.require_role(roles::MOVIES_MANAGER)?;

    let mut movie = state.movie_service.get_movie(&imdb_id).await?;
    MovieMapper::update_movie(request, &mut movie);
    let saved = state.movie_service.save_movie(&movie).await?;

    ok(state.mapper.to_movie_response(&saved).await?)
}

/// Delete a movie and return it (movie managers only).
async fn delete_movie(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(imdb_id): Path<String>,
) -> ApiResult<MovieResponse> {
    debug!("Delete movie request: {}", imdb_id);

    user.require_role(roles::MOVIES_MANAGER)?;

    let movie = state.movie_service.delete_movie(&imdb_id).await?;
    ok(state.mapper.to_movie_response(&movie).await?)
}

/// Comment on a movie as the caller.
async fn add_comment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(imdb_id): Path<String>,
    ValidatedJson(request): ValidatedJson<AddCommentRequest>,
) -> CreatedResult<MovieResponse> {
    debug!("Add comment request by {} on {}", user.username(), imdb_id);

    let movie = state
        .movie_service
        .add_comment(&imdb_id, user.username(), &request.text)
        .await?;
    created(state.mapper.to_movie_response(&movie).await?)
}
