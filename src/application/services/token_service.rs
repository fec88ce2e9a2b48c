//! Session token issuing and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};

/// Why a presented token was rejected.
///
/// The taxonomy exists for internal logging; the HTTP boundary collapses
/// every variant into one uniform unauthorized response so callers cannot
/// probe which check failed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("token expired")]
    Expired,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("malformed token")]
    Malformed,
}

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Owning user id, stringified.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Immutable signing configuration, constructed once at startup.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub signing_secret: String,
    /// Validity window for issued tokens.
    pub ttl: Duration,
}

/// Issues and verifies signed, self-contained session tokens.
///
/// Tokens are HS256 JWTs embedding the user id and an expiry; verification
/// needs only the signing secret and the clock, no store lookup. The
/// secret is process-wide configuration; rotation is out of scope.
pub struct TokenService {
    config: TokenConfig,
}

impl TokenService {
    /// Creates a token service from explicit configuration.
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    /// Issues a token for a user with the configured validity window.
    pub fn issue(&self, user_id: i64) -> String {
        self.issue_with_ttl(user_id, self.config.ttl)
    }

    /// Issues a token with an explicit validity window.
    ///
    /// A zero or negative `ttl` produces an already-expired token; useful
    /// for short-lived credentials and for exercising expiry handling.
    pub fn issue_with_ttl(&self, user_id: i64, ttl: Duration) -> String {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.signing_secret.as_bytes()),
        )
        .expect("HS256 encoding of serializable claims cannot fail")
    }

    /// Verifies a token and returns the embedded user id.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Expired`] - past the embedded expiry
    /// - [`AuthError::InvalidSignature`] - signature does not match
    /// - [`AuthError::Malformed`] - not parseable as a token, or the
    ///   subject is not a user id
    pub fn verify(&self, token: &str) -> Result<i64, AuthError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let data = jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.signing_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::Expired,
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                AuthError::InvalidSignature
            }
            _ => AuthError::Malformed,
        })?;

        data.claims.sub.parse().map_err(|_| AuthError::Malformed)
    }
}
