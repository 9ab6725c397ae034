//! API constants.

/// Liveness probe path.
pub const HEALTH_PATH: &str = "/_/health";

/// Webhook intake path.
pub const WEBHOOK_PATH: &str = "/webhook";

/// Liveness response body.
pub const HEALTH_MARKER: &str = "Hello, world!";

/// Upper bound on an inbound webhook body.
pub const MAX_PAYLOAD_BYTES: usize = 1024 * 1024;
