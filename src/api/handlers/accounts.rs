//! Handlers for account signup and login.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::accounts::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new account.
///
/// # Endpoint
///
/// `POST /user/signup`
///
/// # Request Body
///
/// ```json
/// { "firstName": "Ada", "lastName": "Lovelace", "email": "a@x.com", "password": "secret" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on validation failure and 409 Conflict when
/// the email is already registered (compared case-insensitively).
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    payload.validate()?;

    let id = state
        .account_service
        .signup(
            payload.first_name,
            payload.last_name,
            payload.email,
            payload.password,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(SignupResponse { id })))
}

/// Exchanges credentials for a session token.
///
/// # Endpoint
///
/// `POST /user/login`
///
/// # Errors
///
/// Returns 401 Unauthorized with one uniform body for an unknown email
/// and a wrong password; 400 Bad Request on validation failure.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;

    let token = state
        .account_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(LoginResponse { token }))
}
