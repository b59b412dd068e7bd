//! # User Registry
//!
//! CRUD service for user records (name, email, role) persisted in a single
//! JSON file, with a REST API and static HTML pages.
//!
//! ## Architecture
//!
//! - **domain**: the `User` record, the `UserStore` interface and errors
//! - **application**: `UserService`, the CRUD use-cases
//! - **infrastructure**: JSON file and in-memory stores
//! - **interfaces**: HTTP router, handlers, pages and middleware
//! - **config** / **server**: configuration loading and runtime bootstrap

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use application::UserService;
pub use domain::{DomainError, DomainResult, User, UserStore};
pub use infrastructure::{InMemoryStore, JsonFileStore};

// Re-export HTTP router
pub use interfaces::http::create_router;
