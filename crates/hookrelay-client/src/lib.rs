//! Outbound HTTP client for the relay.
//!
//! Provides a single `AssetClient` with bearer auth on every call and a
//! configurable per-request timeout. Two operations: the asset-metadata
//! lookup and the download fetch itself.

use anyhow::{Context, Result};
use hookrelay_core::models::{AssetRecord, ResolvedAsset};
use hookrelay_core::RelayError;
use reqwest::Client;
use std::time::Duration;

/// HTTP client for the asset API and download origins.
#[derive(Clone, Debug)]
pub struct AssetClient {
    client: Client,
    base_url: String,
    token: String,
}

impl AssetClient {
    /// Create a client against `base_url`, authenticating with `token`.
    /// `timeout` applies to every outbound call; `None` means unbounded.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.header("Authorization", format!("Bearer {}", self.token))
    }

    /// Look up an asset by id and return its download URL and filename.
    ///
    /// The response body is buffered once; decoding and diagnostics both read
    /// from that buffer. Non-success statuses and undecodable bodies are
    /// lookup failures.
    pub async fn resolve_asset(&self, asset_id: &str) -> Result<ResolvedAsset, RelayError> {
        let url = format!("{}/assets/{}", self.base_url, asset_id);
        let request = self.apply_auth(self.client.get(&url));

        let response = request
            .send()
            .await
            .map_err(|e| RelayError::Lookup(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| RelayError::Lookup(format!("failed to read response body: {}", e)))?;

        tracing::debug!(
            asset_id = %asset_id,
            status = %status,
            body = %String::from_utf8_lossy(&body),
            "Asset lookup response"
        );

        if !status.is_success() {
            return Err(RelayError::Lookup(format!(
                "asset API returned status {}: {}",
                status,
                String::from_utf8_lossy(&body)
            )));
        }

        let record: AssetRecord = serde_json::from_slice(&body)
            .map_err(|e| RelayError::Lookup(format!("failed to decode asset metadata: {}", e)))?;

        Ok(record.into())
    }

    /// GET the download URL with the bearer header and hand the response back
    /// for streaming. The status code is not inspected; whatever the origin
    /// returns is what gets relayed to disk.
    pub async fn fetch(&self, url: &str) -> Result<reqwest::Response, RelayError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| RelayError::RequestConstruction(format!("{}: {}", url, e)))?;

        let request = self.apply_auth(self.client.get(parsed));

        request
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))
    }
}
