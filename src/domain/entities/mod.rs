//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`User`] - An account that can create and manage links
//! - [`Link`] - A shortened URL mapping with its visit counter
//!
//! Each entity has a `New*` companion struct carrying the fields a caller
//! supplies on creation; ids and timestamps are assigned by the store.

pub mod link;
pub mod user;

pub use link::{Link, NewLink};
pub use user::{NewUser, User};
