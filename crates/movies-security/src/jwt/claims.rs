//! JWT claims structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried by a bearer token issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user identifier at the identity provider).
    pub sub: String,

    /// Display username, preferred over `sub` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<String>,

    /// Granted roles.
    #[serde(default)]
    pub roles: Vec<String>,

    /// Issuer.
    pub iss: String,

    /// Audience.
    pub aud: String,

    /// Expiration timestamp.
    pub exp: i64,

    /// Issued at timestamp.
    pub iat: i64,
}

impl Claims {
    /// Creates claims issued now.
    #[must_use]
    pub fn new(
        sub: impl Into<String>,
        roles: Vec<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: sub.into(),
            preferred_username: None,
            roles,
            iss: issuer.into(),
            aud: audience.into(),
            exp: expires_at.timestamp(),
            iat: Utc::now().timestamp(),
        }
    }

    /// Sets the preferred username.
    #[must_use]
    pub fn with_preferred_username(mut self, username: impl Into<String>) -> Self {
        self.preferred_username = Some(username.into());
        self
    }

    /// Returns the caller's username: `preferred_username`, else `sub`.
    #[must_use]
    pub fn username(&self) -> &str {
        self.preferred_username.as_deref().unwrap_or(&self.sub)
    }

    /// Checks if the caller holds a role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Checks if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Returns the expiration time.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn claims(roles: &[&str]) -> Claims {
        Claims::new(
            "a1b2c3",
            roles.iter().map(ToString::to_string).collect(),
            "issuer",
            "audience",
            Utc::now() + Duration::hours(1),
        )
    }

    #[test]
    fn test_username_prefers_preferred_username() {
        let plain = claims(&[]);
        assert_eq!(plain.username(), "a1b2c3");

        let named = plain.with_preferred_username("alice");
        assert_eq!(named.username(), "alice");
    }

    #[test]
    fn test_role_check() {
        let claims = claims(&["USER", "MOVIES_MANAGER"]);
        assert!(claims.has_role("MOVIES_MANAGER"));
        assert!(!claims.has_role("ADMIN"));
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_missing_roles_deserialize_as_empty() {
        let json = r#"{"sub":"bob","iss":"i","aud":"a","exp":0,"iat":0}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert!(claims.roles.is_empty());
        assert_eq!(claims.username(), "bob");
        assert!(claims.is_expired());
    }
}
