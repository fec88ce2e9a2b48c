//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits over a pooled
//! SQLx connection.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Account storage
//! - [`PgLinkRepository`] - Link storage with atomic visit counting

pub mod pg_link_repository;
pub mod pg_user_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_user_repository::PgUserRepository;
