//! RBAC role checker.

use crate::Claims;
use movies_core::{MoviesError, MoviesResult};

/// Role names granted by the identity provider.
pub mod roles {
    /// May create, update and delete movies.
    pub const MOVIES_MANAGER: &str = "MOVIES_MANAGER";

    /// Regular signed-in user.
    pub const USER: &str = "USER";
}

/// Extension trait for Claims to check roles.
pub trait ClaimsExt {
    /// Requires a specific role.
    fn require_role(&self, role: &str) -> MoviesResult<()>;
}

impl ClaimsExt for Claims {
    fn require_role(&self, role: &str) -> MoviesResult<()> {
        if self.has_role(role) {
            Ok(())
        } else {
            Err(MoviesError::Forbidden(format!("Required role: {}", role)))
        }
    }
}
