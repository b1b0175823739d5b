//! Smoke tests for telemetry initialization.

use keywork::telemetry::{TelemetryConfig, init_telemetry};

#[test]
fn telemetry_initializes_with_default_config() {
    // The tracing subscriber can only be set once per process; try_init
    // in the implementation means a second call errors instead of
    // panicking. This may return Err if another test already installed a
    // subscriber, which is acceptable.
    let _ = init_telemetry(TelemetryConfig::default());
}

#[test]
fn repeated_init_returns_error_instead_of_panicking() {
    let _ = init_telemetry(TelemetryConfig::default());
    let second = init_telemetry(TelemetryConfig {
        log_level: "debug".to_string(),
    });
    assert!(second.is_err());
}
