//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, HttpRelayError>`. The wrapper
//! takes the status and log level from the error's own metadata and renders
//! the failure description as a plain-text body, which is the response
//! contract for this endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hookrelay_core::{LogLevel, RelayError};
use hookrelay_storage::StoreError;

/// Wrapper type for RelayError to implement IntoResponse. Necessary because
/// of the orphan rule: IntoResponse is axum's trait and RelayError lives in
/// hookrelay-core.
#[derive(Debug)]
pub struct HttpRelayError(pub RelayError);

impl From<RelayError> for HttpRelayError {
    fn from(err: RelayError) -> Self {
        HttpRelayError(err)
    }
}

impl From<StoreError> for HttpRelayError {
    fn from(err: StoreError) -> Self {
        let relay = match err {
            StoreError::InvalidName(name) => RelayError::InvalidFilename(name),
            StoreError::ConfigError(msg) => RelayError::FileCreation(msg),
            StoreError::CreateFailed(msg) => RelayError::FileCreation(msg),
            StoreError::WriteFailed(msg) => RelayError::Copy(msg),
        };
        HttpRelayError(relay)
    }
}

fn log_error(error: &RelayError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Request rejected");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Request degraded");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Request failed");
        }
    }
}

impl IntoResponse for HttpRelayError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(&self.0);

        (status, self.0.to_string()).into_response()
    }
}
