//! Handlers for listing and deleting owned links.

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::api::dto::links::{DeleteResponse, LinkItem};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all links owned by the authenticated caller.
///
/// # Endpoint
///
/// `GET /url/codes` (bearer token required)
///
/// Returns the caller's links in creation order, visit counters included.
/// No pagination.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
) -> Result<Json<Vec<LinkItem>>, AppError> {
    let links = state.link_service.list_links(owner_id).await?;

    Ok(Json(links.into_iter().map(LinkItem::from).collect()))
}

/// Deletes a link owned by the authenticated caller.
///
/// # Endpoint
///
/// `DELETE /url/{id}` (bearer token required)
///
/// Responds `{"deleted": true}` only when the link existed and belonged
/// to the caller. An unknown id and another owner's id both produce
/// `{"deleted": false}` with status 200, so the response cannot be used
/// to probe which links exist.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.link_service.delete_link(id, owner_id).await?;

    Ok(Json(DeleteResponse { deleted }))
}
