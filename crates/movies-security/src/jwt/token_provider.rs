//! JWT token validation.

use super::Claims;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use movies_config::SecurityConfig;
use movies_core::{MoviesError, MoviesResult};
use std::sync::Arc;
use tracing::{debug, warn};

/// Validates HS256 bearer tokens against the configured issuer and audience.
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: Arc<SecurityConfig>,
    validation: Validation,
}

impl TokenProvider {
    /// Creates a new token provider.
    #[must_use]
    pub fn new(config: Arc<SecurityConfig>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_audience(&[&config.jwt_audience]);
        validation.validate_exp = true;
        validation.leeway = config.leeway_secs;

        Self {
            encoding_key,
            decoding_key,
            config,
            validation,
        }
    }

    /// Validates a token and returns the claims.
    pub fn validate_token(&self, token: &str) -> MoviesResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                warn!("Token validation failed: {}", e);
                match e.kind() {
                    ErrorKind::ExpiredSignature => MoviesError::TokenExpired,
                    ErrorKind::InvalidToken | ErrorKind::InvalidSignature => {
                        MoviesError::InvalidToken("Invalid token signature".to_string())
                    }
                    ErrorKind::InvalidIssuer => {
                        MoviesError::InvalidToken("Invalid token issuer".to_string())
                    }
                    ErrorKind::InvalidAudience => {
                        MoviesError::InvalidToken("Invalid token audience".to_string())
                    }
                    _ => MoviesError::InvalidToken(e.to_string()),
                }
            })?;

        debug!("Validated token for {}", token_data.claims.username());
        Ok(token_data.claims)
    }

    /// Signs claims with the shared secret.
    ///
    /// The service never hands tokens to clients; this exists for tests and
    /// local tooling that need a token the validator accepts.
    pub fn sign(&self, claims: &Claims) -> MoviesResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| MoviesError::Internal(format!("Failed to sign token: {}", e)))
    }

    /// Returns the expected issuer.
    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.config.jwt_issuer
    }

    /// Returns the expected audience.
    #[must_use]
    pub fn audience(&self) -> &str {
        &self.config.jwt_audience
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("issuer", &self.config.jwt_issuer)
            .field("audience", &self.config.jwt_audience)
            .finish_non_exhaustive()
    }
}
