//! Protected API route configuration.
//!
//! Every route in this module requires Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{delete_link_handler, list_links_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Link management routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /shorten` - Create a short link
/// - `GET    /codes`   - List the caller's links
/// - `DELETE /{id}`    - Delete one of the caller's links
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/codes", get(list_links_handler))
        .route("/{id}", delete(delete_link_handler))
}
