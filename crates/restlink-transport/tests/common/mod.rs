//! Shared helpers for integration tests

#![allow(dead_code)]

use restlink_core::RestOptions;
use std::time::Duration;

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Options generous enough for a local mock server
pub fn test_options() -> RestOptions {
    RestOptions::new(Duration::from_secs(2), Duration::from_secs(5))
}

/// `host:port` of a mock server, the form requests use as location
pub fn location_of(server: &wiremock::MockServer) -> String {
    server.address().to_string()
}
