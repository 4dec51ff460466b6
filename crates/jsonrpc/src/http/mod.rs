//! HTTP transports for the JSON-RPC client.

/// Default URL of a local node.
pub const DEFAULT_URL: &str = "http://127.0.0.1";

/// Default JSON-RPC port of a local node.
pub const DEFAULT_PORT: u16 = 8370;

/// Timeout applied to requests when the builder is not given one.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 15;

#[cfg(feature = "reqwest_http")]
pub mod reqwest_http;
