//! Link creation, resolution, listing, and deletion.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, validate_custom_code};

/// Collision retry budget for generated codes. Collisions in a 64^6 space
/// are rare; anything past this bound means something is wrong with the
/// store, not bad luck.
const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Service for creating and resolving shortened links.
///
/// Uniqueness is delegated entirely to the store: creation inserts and
/// catches the code conflict rather than pre-checking, so there is no
/// check-then-insert race window.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short link owned by `owner_id`.
    ///
    /// A caller-chosen code is validated and used verbatim; its conflict
    /// surfaces to the caller for correction. Without one, a random code
    /// is generated and creation retries on collision up to
    /// [`MAX_GENERATION_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed custom code,
    /// [`AppError::Conflict`] when a custom code is already taken, and
    /// [`AppError::Internal`] when generation exhausts its retry budget.
    pub async fn create_link(
        &self,
        target_url: String,
        custom_code: Option<String>,
        owner_id: i64,
    ) -> Result<Link, AppError> {
        if let Some(code) = custom_code {
            validate_custom_code(&code)?;

            return self
                .repository
                .create(NewLink {
                    code: code.clone(),
                    target_url,
                    user_id: owner_id,
                })
                .await
                .map_err(|e| {
                    if e.is_conflict() {
                        AppError::conflict("Short code already taken", json!({ "code": code }))
                    } else {
                        e
                    }
                });
        }

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = generate_code(DEFAULT_CODE_LENGTH);

            match self
                .repository
                .create(NewLink {
                    code,
                    target_url: target_url.clone(),
                    user_id: owner_id,
                })
                .await
            {
                Ok(link) => return Ok(link),
                Err(e) if e.is_conflict() => {
                    tracing::warn!(attempt, "generated code collided, retrying");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique code",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }

    /// Resolves a short code to its link.
    ///
    /// Lookup failures propagate; the visit counter is the caller's
    /// concern and never part of this call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))
    }

    /// Lists all links owned by `owner_id`, in creation order.
    pub async fn list_links(&self, owner_id: i64) -> Result<Vec<Link>, AppError> {
        self.repository.list_by_owner(owner_id).await
    }

    /// Deletes a link if and only if `owner_id` owns it.
    ///
    /// Returns whether a deletion occurred. A missing id and a foreign
    /// owner both report `false`; the distinction is deliberately not
    /// exposed.
    pub async fn delete_link(&self, id: i64, owner_id: i64) -> Result<bool, AppError> {
        self.repository.delete_by_id_and_owner(id, owner_id).await
    }

    /// Store connectivity probe, used by the health endpoint.
    pub async fn store_healthy(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
