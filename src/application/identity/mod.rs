//! Identity module: user management
//!
//! Contains the `UserService` which mediates every user CRUD use-case
//! between the HTTP layer and the user store.

pub mod service;

pub use service::UserService;
