//! User entity representing an account that owns short links.

use chrono::{DateTime, Utc};

/// A registered account.
///
/// The `salt` and `password_hash` fields hold the hex-encoded per-user salt
/// and HMAC-SHA256 digest; the plaintext password is never stored. Email is
/// normalized to lowercase before it reaches this type.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub salt: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub salt: String,
    pub password_hash: String,
}
