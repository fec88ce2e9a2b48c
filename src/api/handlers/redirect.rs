//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::domain::visit_event::VisitEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}` (public)
///
/// # Request Flow
///
/// 1. Look up the code in the link store
/// 2. Enqueue a visit event for the background counter worker
/// 3. Return 307 Temporary Redirect
///
/// # Visit Counting
///
/// The counter update is fire-and-forget: the event goes onto a bounded
/// channel and a full queue drops it with a warning. A redirect is never
/// delayed or failed by the counter path.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist. Store failures
/// on the lookup itself propagate as 500.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let link = state.link_service.resolve(&code).await?;

    if state.visit_sender.try_send(VisitEvent::new(link.code)).is_err() {
        metrics::counter!("visits_dropped_total").increment(1);
        tracing::warn!(%code, "visit queue full, dropping event");
    }

    Ok(Redirect::temporary(&link.target_url))
}
