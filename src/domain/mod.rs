//! Core domain types: the user record, its store interface and errors.

pub mod error;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use user::{seed_users, User, UserStore, DEFAULT_ROLE};
