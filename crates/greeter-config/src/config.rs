//! Configuration management for Greeter

use greeter_foundation::{Greeter, GreeterError, GreeterResult, DEFAULT_NAME};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;

/// Config files searched by [`AppConfig::load`], first match wins
const CONFIG_PATHS: [&str; 2] = ["greeter.toml", ".greeter/config.toml"];

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Greeting configuration
    pub greeting: GreetingConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Greeting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetingConfig {
    /// Name used when the caller passes an empty name
    #[serde(deserialize_with = "scalar_string")]
    pub fallback: String,
}

/// Accept any scalar as a string; environment values arrive typed (`42`, `true`)
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarVisitor;

    impl de::Visitor<'_> for ScalarVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_char<E: de::Error>(self, v: char) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(ScalarVisitor)
}

/// Log output format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format for development
    #[default]
    Pretty,
    /// Structured JSON format for production
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_NAME.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and config files
    ///
    /// Configuration is loaded in the following priority order (highest to lowest):
    /// 1. Environment variables (GREETER__*)
    /// 2. Environment-specific profile from the config file (based on GREETER_ENV)
    /// 3. Base configuration from greeter.toml or .greeter/config.toml
    /// 4. Default values
    pub fn load() -> GreeterResult<Self> {
        let path = CONFIG_PATHS.iter().map(Path::new).find(|p| p.exists());
        Self::extract(path)
    }

    /// Load configuration from an explicit TOML file, still honoring
    /// profiles and environment overrides
    pub fn load_from(path: &Path) -> GreeterResult<Self> {
        if !path.exists() {
            return Err(GreeterError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        Self::extract(Some(path))
    }

    fn extract(path: Option<&Path>) -> GreeterResult<Self> {
        use figment::{
            providers::{Env, Format, Serialized, Toml},
            Figment,
        };

        let env_profile = std::env::var("GREETER_ENV").unwrap_or_else(|_| "default".to_string());

        tracing::debug!(profile = %env_profile, "Loading configuration with profile");

        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "Loading TOML configuration");
            figment = figment.merge(Toml::file(path));

            if env_profile != "default" {
                tracing::debug!(profile = %env_profile, "Applying environment-specific profile");
                let profile =
                    Figment::from(Toml::file(path)).focus(&format!("environments.{}", env_profile));
                figment = figment.merge(profile);
            }
        }

        let figment = figment.merge(Env::prefixed("GREETER__").split("__"));

        let config: AppConfig = figment
            .extract()
            .map_err(|e| GreeterError::config(format!("Failed to load configuration: {}", e)))?;

        config.validate()?;

        tracing::debug!(
            level = %config.logging.level,
            fallback = %config.greeting.fallback,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Save configuration as TOML, creating parent directories as needed
    pub fn save(&self, path: &Path) -> GreeterResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| GreeterError::config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Build a [`Greeter`] using the configured fallback name
    pub fn greeter(&self) -> GreeterResult<Greeter> {
        Greeter::new(self.greeting.fallback.as_str())
    }

    /// Validate the configuration
    pub fn validate(&self) -> GreeterResult<()> {
        if !VALID_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(GreeterError::config(format!(
                "Invalid log level '{}', must be one of: {}",
                self.logging.level,
                VALID_LEVELS.join(", ")
            )));
        }

        if self.greeting.fallback.is_empty() {
            return Err(GreeterError::config("Greeting fallback cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.greeting.fallback, "World");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_invalid_level_rejected() {
        let mut config = AppConfig::default();
        config.logging.level = "verbose".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid log level 'verbose'"));
    }

    #[test]
    fn test_empty_fallback_rejected() {
        let mut config = AppConfig::default();
        config.greeting.fallback.clear();

        assert!(matches!(
            config.validate(),
            Err(GreeterError::Config { .. })
        ));
    }

    #[test]
    fn test_greeter_uses_fallback() {
        let mut config = AppConfig::default();
        config.greeting.fallback = "Friend".to_string();

        let greeter = config.greeter().unwrap();
        assert_eq!(greeter.greet(""), "Hello, Friend!");
    }
}
