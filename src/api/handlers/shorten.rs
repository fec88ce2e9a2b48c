//! Handler for the link shortening endpoint.

use axum::{Extension, Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL owned by the authenticated caller.
///
/// # Endpoint
///
/// `POST /url/shorten` (bearer token required)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "code": "my-link" }
/// ```
///
/// `code` is optional; without it a random 6-character code is generated,
/// retrying on the rare collision. The target URL is stored opaquely and
/// is not checked for syntactic validity.
///
/// # Errors
///
/// Returns 400 Bad Request when the URL is missing or the code is
/// malformed, and 409 Conflict when a caller-chosen code is taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.url, payload.code, owner_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            id: link.id,
            short_code: link.code,
            target_url: link.target_url,
        }),
    ))
}
