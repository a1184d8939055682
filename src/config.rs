//! Service constants.
//!
//! The service is deliberately non-configurable: no config file, no CLI
//! arguments, no environment lookups beyond the conventional `RUST_LOG`
//! filter override. Everything that could vary lives here as a constant.

// =============================================================================
// Network
// =============================================================================

/// Bind address - all interfaces, so the service is reachable from outside
/// the container.
pub const BIND_HOST: &str = "0.0.0.0";

/// Fixed listen port.
pub const BIND_PORT: u16 = 8000;

// =============================================================================
// Response payload
// =============================================================================

/// Greeting returned in every response body.
pub const GREETING_MESSAGE: &str = "Hello from Docker 101!";

// =============================================================================
// Logging
// =============================================================================

/// Default tracing filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "hello_docker=info,tower_http=info";
