//! Webhook payload extraction.
//!
//! The intake contract answers 400, not axum's default 405/415, for a wrong
//! method or content type, with the reason in the body. A `FromRequest`
//! extractor keeps that policy in one place and consumes the body exactly
//! once, all-or-nothing.

use crate::constants::MAX_PAYLOAD_BYTES;
use crate::error::HttpRelayError;
use axum::extract::{FromRequest, Request};
use axum::http::{header, Method};
use hookrelay_core::models::WebhookPayload;
use hookrelay_core::RelayError;

/// Extractor enforcing the webhook intake contract: POST only, content type
/// exactly `application/json`, body decoding into a [`WebhookPayload`].
pub struct WebhookJson(pub WebhookPayload);

impl<S> FromRequest<S> for WebhookJson
where
    S: Send + Sync,
{
    type Rejection = HttpRelayError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        if req.method() != Method::POST {
            return Err(RelayError::MethodNotAllowed(req.method().to_string()).into());
        }

        // Exact match: `application/json; charset=utf-8` is rejected too.
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");
        if content_type != "application/json" {
            return Err(RelayError::UnsupportedContentType(content_type.to_string()).into());
        }

        let body = axum::body::to_bytes(req.into_body(), MAX_PAYLOAD_BYTES)
            .await
            .map_err(|e| RelayError::MalformedBody(e.to_string()))?;

        let payload: WebhookPayload = serde_json::from_slice(&body)
            .map_err(|e| RelayError::MalformedBody(e.to_string()))?;

        Ok(WebhookJson(payload))
    }
}
