use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{AccountService, LinkService, TokenService};
use crate::domain::visit_event::VisitEvent;

/// Shared application state injected into all handlers.
///
/// Everything here is either an `Arc` or a channel sender, so cloning per
/// request is cheap. No mutable state lives in this struct; the store is
/// the only thing requests coordinate through.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub link_service: Arc<LinkService>,
    pub token_service: Arc<TokenService>,
    pub visit_sender: mpsc::Sender<VisitEvent>,
}

impl AppState {
    pub fn new(
        account_service: Arc<AccountService>,
        link_service: Arc<LinkService>,
        token_service: Arc<TokenService>,
        visit_sender: mpsc::Sender<VisitEvent>,
    ) -> Self {
        Self {
            account_service,
            link_service,
            token_service,
            visit_sender,
        }
    }
}
