//! Foundation Layer - greeting operations and shared error types
//!
//! This crate provides the building blocks every other Greeter crate uses:
//! - The greeting operations (`greet`, `hello`) and the configurable `Greeter`
//! - Small arithmetic helpers
//! - The `GreeterError` type and `GreeterResult` alias

pub mod error;
pub mod greeting;
pub mod sum;

// Re-export commonly used items for convenience
pub use error::{GreeterError, GreeterResult};
pub use greeting::{greet, hello, Greeter, DEFAULT_NAME};
pub use sum::calculate_sum;
