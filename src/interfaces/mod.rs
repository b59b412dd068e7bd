//! Interface adapters exposed to the outside world

pub mod http;
