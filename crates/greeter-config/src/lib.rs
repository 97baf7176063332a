//! greeter-config: configuration loading and logging setup for Greeter

pub mod config;
pub mod logging;

pub use config::{AppConfig, GreetingConfig, LogFormat, LoggingConfig};
