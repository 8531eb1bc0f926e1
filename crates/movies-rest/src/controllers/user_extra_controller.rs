//! Controller for the caller's own user extras.

use crate::{
    extractors::{AuthenticatedUser, ValidatedJson},
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{extract::State, routing::get, Router};
use movies_service::{MovieMapper, UserExtraRequest, UserExtraResponse};

/// Creates the user extras router.
pub fn router() -> Router<AppState> {
    Router::new().route("/me", get(get_my_extra).post(save_my_extra))
}

/// Get the caller's extras.
async fn get_my_extra(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<UserExtraResponse> {
    let extra = state
        .user_extra_service
        .get_user_extra(user.username())
        .await?;
    ok(MovieMapper::to_user_extra_response(&extra))
}

/// Create or update the caller's extras.
async fn save_my_extra(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<UserExtraRequest>,
) -> ApiResult<UserExtraResponse> {
    let extra = state
        .user_extra_service
        .set_avatar(user.username(), request.avatar)
        .await?;
    ok(MovieMapper::to_user_extra_response(&extra))
}
