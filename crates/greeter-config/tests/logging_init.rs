//! Global subscriber installation

use greeter_config::{logging, AppConfig};
use greeter_foundation::{hello, GreeterError};

#[test]
fn test_initialize_once() {
    let config = AppConfig::default();

    logging::initialize(&config).unwrap();
    assert_eq!(hello("Alice"), "Hello, Alice!");

    let second = logging::initialize(&config);
    assert!(matches!(second, Err(GreeterError::Logging { .. })));
}
