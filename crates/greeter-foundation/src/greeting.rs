//! Greeting operations

use crate::error::{GreeterError, GreeterResult};

/// Name substituted for an empty input by [`greet`]
pub const DEFAULT_NAME: &str = "World";

/// Greet `name`, falling back to `"World"` when it is empty.
///
/// Only the empty string triggers the fallback; whitespace and any other
/// characters are passed through verbatim.
///
/// # Examples
///
/// ```
/// use greeter_foundation::greet;
///
/// assert_eq!(greet(""), "Hello, World!");
/// assert_eq!(greet("Alice"), "Hello, Alice!");
/// ```
pub fn greet(name: &str) -> String {
    format_greeting(if name.is_empty() { DEFAULT_NAME } else { name })
}

/// Log and return the greeting for `name` without any fallback.
///
/// `hello("")` yields `"Hello, !"`.
pub fn hello(name: &str) -> String {
    let greeting = format_greeting(name);
    tracing::info!(greeting = %greeting, "hello");
    greeting
}

fn format_greeting(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Greeter with a configurable fallback name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    fallback: String,
}

impl Greeter {
    /// Create a greeter that substitutes `fallback` for empty names
    pub fn new(fallback: impl Into<String>) -> GreeterResult<Self> {
        let fallback = fallback.into();
        if fallback.is_empty() {
            return Err(GreeterError::InvalidFallback);
        }
        Ok(Self { fallback })
    }

    /// The name used when the input is empty
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Greet `name`, using the configured fallback when it is empty
    pub fn greet(&self, name: &str) -> String {
        format_greeting(if name.is_empty() {
            self.fallback.as_str()
        } else {
            name
        })
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_greet_cases() {
        let cases = [
            ("empty name", "", "Hello, World!"),
            ("with name", "Alice", "Hello, Alice!"),
            ("with special chars", "Go Developer", "Hello, Go Developer!"),
            ("whitespace only", " ", "Hello,  !"),
        ];

        for (label, input, expected) in cases {
            assert_eq!(greet(input), expected, "case: {}", label);
        }
    }

    #[test]
    fn test_hello_has_no_fallback() {
        assert_eq!(hello("Alice"), "Hello, Alice!");
        assert_eq!(hello(""), "Hello, !");
    }

    #[test]
    fn test_default_greeter_matches_greet() {
        let greeter = Greeter::default();
        assert_eq!(greeter.fallback(), "World");
        for name in ["", "Bob", " ", "Zoë"] {
            assert_eq!(greeter.greet(name), greet(name));
        }
    }

    #[test]
    fn test_custom_fallback() {
        let greeter = Greeter::new("Rustacean").unwrap();
        assert_eq!(greeter.greet(""), "Hello, Rustacean!");
        assert_eq!(greeter.greet("Ferris"), "Hello, Ferris!");
    }

    #[test]
    fn test_empty_fallback_rejected() {
        assert!(matches!(
            Greeter::new(""),
            Err(GreeterError::InvalidFallback)
        ));
    }
}
