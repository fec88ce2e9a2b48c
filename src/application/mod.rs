//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations by coordinating repository
//! calls, validation, and business rules, and provide a clean API for the
//! HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::account_service::AccountService`] - Signup and login
//! - [`services::link_service::LinkService`] - Link creation and resolution
//! - [`services::token_service::TokenService`] - Session token issue/verify

pub mod services;
