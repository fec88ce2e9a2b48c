//! Account signup and login orchestration.

use std::sync::Arc;

use serde_json::json;

use crate::application::services::token_service::TokenService;
use crate::domain::entities::NewUser;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_password};

/// Service for registering accounts and exchanging credentials for tokens.
///
/// Emails are normalized to lowercase before storage and lookup, making
/// comparison case-insensitive. Login failures are indistinguishable
/// between an unknown email and a wrong password.
pub struct AccountService {
    repository: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(repository: Arc<dyn UserRepository>, tokens: Arc<TokenService>) -> Self {
        Self { repository, tokens }
    }

    /// Registers a new account and returns its id.
    ///
    /// The password is hashed with a fresh per-user salt; the plaintext is
    /// dropped here and never persisted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// The pre-check keeps the common case friendly; the unique constraint
    /// on `users.email` closes the race window.
    pub async fn signup(
        &self,
        first_name: String,
        last_name: Option<String>,
        email: String,
        password: String,
    ) -> Result<i64, AppError> {
        let email = email.trim().to_lowercase();

        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict(
                "Email already registered",
                json!({ "field": "email" }),
            ));
        }

        let (salt, password_hash) = hash_password(&password, None);

        let user = self
            .repository
            .create(NewUser {
                email,
                first_name,
                last_name,
                salt,
                password_hash,
            })
            .await?;

        Ok(user.id)
    }

    /// Exchanges credentials for a session token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with one shared message for both
    /// an unknown email and a wrong password, so callers cannot probe
    /// which accounts exist.
    pub async fn login(&self, email: String, password: String) -> Result<String, AppError> {
        let email = email.trim().to_lowercase();

        let Some(user) = self.repository.find_by_email(&email).await? else {
            return Err(Self::invalid_credentials());
        };

        if !verify_password(&password, &user.salt, &user.password_hash) {
            return Err(Self::invalid_credentials());
        }

        Ok(self.tokens.issue(user.id))
    }

    fn invalid_credentials() -> AppError {
        AppError::unauthorized("Invalid email or password", json!({}))
    }
}
