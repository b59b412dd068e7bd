//! User aggregate
//!
//! Contains the User record, the seed set, and the store interface.

pub mod model;
pub mod repository;

pub use model::{seed_users, User, DEFAULT_ROLE};
pub use repository::UserStore;
