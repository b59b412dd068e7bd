//! HTTP interface
//!
//! - `common`: shared response types and the validated JSON extractor
//! - `modules`: handlers per resource (users, pages, health) and middleware
//! - `router`: route table, middleware stack and OpenAPI document

pub mod common;
pub mod modules;
pub mod router;

pub use router::create_router;
