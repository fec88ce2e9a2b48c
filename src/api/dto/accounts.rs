//! DTOs for the signup and login endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create an account.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(max = 100))]
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 6, max = 128, message = "Password must be 6-128 characters"))]
    pub password: String,
}

/// Response carrying the id of a freshly created account.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub id: i64,
}

/// Request to exchange credentials for a session token.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response carrying a bearer token.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}
