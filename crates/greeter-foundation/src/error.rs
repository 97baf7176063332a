//! Error handling for the Greeter workspace

use thiserror::Error;

/// Error type used throughout the Greeter crates
///
/// The greeting operations themselves are total; these variants cover the
/// ambient layer (configuration, logging setup, file access).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GreeterError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Fallback name cannot be empty")]
    InvalidFallback,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging error: {message}")]
    Logging { message: String },
}

impl GreeterError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new logging error
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type GreeterResult<T> = Result<T, GreeterError>;
