//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Identity of the authenticated caller, attached to request extensions
/// for downstream handlers.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub i64);

/// Authenticates requests using Bearer tokens from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract token from the `Authorization` header
/// 2. Verify signature and expiry via the token service
/// 3. Insert [`CurrentUser`] into request extensions
/// 4. Continue to the next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` with a uniform body if the header is
/// missing, the token is malformed, the signature is wrong, or the token
/// is expired. The precise reason is logged at debug level only; leaking
/// it would let callers distinguish the failure modes.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            tracing::debug!("missing or non-bearer authorization header");
            unauthorized()
        })?;

    let user_id = st.token_service.verify(&token).map_err(|e| {
        tracing::debug!(reason = %e, "rejected bearer token");
        unauthorized()
    })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentUser(user_id));

    Ok(next.run(req).await)
}

fn unauthorized() -> AppError {
    AppError::unauthorized("Unauthorized", serde_json::json!({}))
}
