//! User extra DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to update the caller's extras.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserExtraRequest {
    #[validate(length(max = 1024))]
    pub avatar: Option<String>,
}

/// A user's extras as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserExtraResponse {
    pub username: String,
    pub avatar: Option<String>,
}
