//! Centralized logging initialization with environment variable support

use crate::{AppConfig, LogFormat};
use greeter_foundation::{GreeterError, GreeterResult};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber
///
/// Environment variables:
/// - `RUST_LOG`: Standard Rust log filter (takes precedence over the configured level)
/// - `LOG_FORMAT`: Override format (json, pretty)
///
/// Logs always go to stderr. Returns an error if `RUST_LOG` does not parse or
/// a global subscriber is already installed.
///
/// # Examples
///
/// ```bash
/// # Module-specific filtering
/// RUST_LOG=greeter_foundation=debug cargo test
///
/// # JSON logs
/// LOG_FORMAT=json cargo test
/// ```
pub fn initialize(config: &AppConfig) -> GreeterResult<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_filter(rust_log.as_deref(), &config.logging.level)?;

    let format = format_override().unwrap_or_else(|| config.logging.format.clone());

    let result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| GreeterError::logging(format!("Failed to install subscriber: {}", e)))
}

/// `RUST_LOG` wins over the configured level when set and non-empty
fn build_filter(rust_log: Option<&str>, level: &str) -> GreeterResult<EnvFilter> {
    match rust_log.filter(|directives| !directives.trim().is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| GreeterError::logging(format!("Invalid RUST_LOG '{}': {}", directives, e))),
        None => EnvFilter::try_new(level)
            .map_err(|e| GreeterError::logging(format!("Invalid log level '{}': {}", level, e))),
    }
}

fn format_override() -> Option<LogFormat> {
    std::env::var("LOG_FORMAT")
        .ok()
        .and_then(|f| parse_format(&f))
}

fn parse_format(value: &str) -> Option<LogFormat> {
    match value.to_lowercase().as_str() {
        "json" => Some(LogFormat::Json),
        "pretty" | "human" => Some(LogFormat::Pretty),
        _ => None,
    }
}
