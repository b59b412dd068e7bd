//! Pages module: HTML views and static assets

pub mod assets;
pub mod handlers;

pub use handlers::*;
