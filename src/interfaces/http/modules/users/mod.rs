//! Users module: the `/api/users` REST surface

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
