//! Error types module
//!
//! All relay failures are unified under the `RelayError` enum. Each variant
//! knows its HTTP status and log level, so the API layer only renders.
//! Client-input failures map to 400; anything that happens after the request
//! has been accepted as valid maps to 500.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("invalid method {0}")]
    MethodNotAllowed(String),

    #[error("invalid content type {0}")]
    UnsupportedContentType(String),

    #[error("invalid request body: {0}")]
    MalformedBody(String),

    #[error("invalid file name: {0}")]
    InvalidFilename(String),

    #[error("URL is required")]
    MissingUrl,

    #[error("asset lookup failed: {0}")]
    Lookup(String),

    #[error("failed to build download request: {0}")]
    RequestConstruction(String),

    #[error("download request failed: {0}")]
    Transport(String),

    #[error("failed to create file: {0}")]
    FileCreation(String),

    #[error("failed to save file: {0}")]
    Copy(String),
}

/// Static metadata for each variant: (http_status, error_type, log_level).
fn relay_error_static_metadata(err: &RelayError) -> (u16, &'static str, LogLevel) {
    match err {
        RelayError::MethodNotAllowed(_) => (400, "MethodNotAllowed", LogLevel::Debug),
        RelayError::UnsupportedContentType(_) => (400, "UnsupportedContentType", LogLevel::Debug),
        RelayError::MalformedBody(_) => (400, "MalformedBody", LogLevel::Debug),
        RelayError::InvalidFilename(_) => (400, "InvalidFilename", LogLevel::Debug),
        RelayError::MissingUrl => (400, "MissingUrl", LogLevel::Debug),
        RelayError::Lookup(_) => (500, "Lookup", LogLevel::Error),
        RelayError::RequestConstruction(_) => (500, "RequestConstruction", LogLevel::Error),
        RelayError::Transport(_) => (500, "Transport", LogLevel::Error),
        RelayError::FileCreation(_) => (500, "FileCreation", LogLevel::Error),
        RelayError::Copy(_) => (500, "Copy", LogLevel::Error),
    }
}

impl RelayError {
    /// HTTP status code to return
    pub fn http_status_code(&self) -> u16 {
        relay_error_static_metadata(self).0
    }

    /// Short variant name for structured logging
    pub fn error_type(&self) -> &'static str {
        relay_error_static_metadata(self).1
    }

    /// Log level for this error
    pub fn log_level(&self) -> LogLevel {
        relay_error_static_metadata(self).2
    }
}
