pub mod shutdown;
pub mod validations;

pub use shutdown::ShutdownSignal;
pub use validations::*;
