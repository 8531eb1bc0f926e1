//! Per-user profile enrichment.

use crate::Entity;
use serde::{Deserialize, Serialize};

/// Profile data keyed by username, used to decorate comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserExtra {
    /// Username (unique).
    pub username: String,

    /// Avatar reference.
    pub avatar: Option<String>,
}

impl UserExtra {
    /// Creates an empty profile for a user.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            avatar: None,
        }
    }

    /// Returns the avatar to display, falling back to the username.
    #[must_use]
    pub fn display_avatar(&self) -> &str {
        self.avatar.as_deref().unwrap_or(&self.username)
    }
}

impl Entity for UserExtra {
    const TYPE_NAME: &'static str = "UserExtra";

    fn id(&self) -> &str {
        &self.username
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_avatar_falls_back_to_username() {
        let mut extra = UserExtra::new("alice");
        assert_eq!(extra.display_avatar(), "alice");

        extra.avatar = Some("a.png".to_string());
        assert_eq!(extra.display_avatar(), "a.png");
    }
}
