//! Configuration module
//!
//! Environment-driven configuration, resolved once at startup. The bearer
//! token has no fallback: the process refuses to start without it.

use std::env;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ASSET_API_URL: &str = "https://api.frame.io/v2";
const DEFAULT_DOWNLOAD_DIR: &str = ".";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

/// Application configuration (relay service).
#[derive(Clone, Debug)]
pub struct Config {
    /// TCP port the server listens on.
    pub server_port: u16,
    /// Bearer token sent on every outbound call.
    pub api_token: String,
    /// Base URL of the asset-metadata API, without trailing slash.
    pub asset_api_url: String,
    /// Directory downloaded files are written into.
    pub download_dir: String,
    /// Per-call timeout for outbound requests. 0 disables the timeout.
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let api_token = env::var("HOOKRELAY_TOKEN").map_err(|_| {
            anyhow::anyhow!("HOOKRELAY_TOKEN must be set; refusing to start without a bearer token")
        })?;
        if api_token.trim().is_empty() {
            return Err(anyhow::anyhow!("HOOKRELAY_TOKEN must not be empty"));
        }

        let server_port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?;

        let asset_api_url = env::var("HOOKRELAY_ASSET_API_URL")
            .unwrap_or_else(|_| DEFAULT_ASSET_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let download_dir =
            env::var("HOOKRELAY_DOWNLOAD_DIR").unwrap_or_else(|_| DEFAULT_DOWNLOAD_DIR.to_string());

        let http_timeout_secs = env::var("HOOKRELAY_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_HTTP_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        Ok(Config {
            server_port,
            api_token,
            asset_api_url,
            download_dir,
            http_timeout_secs,
        })
    }

    /// Outbound request timeout, `None` when disabled.
    pub fn http_timeout(&self) -> Option<Duration> {
        (self.http_timeout_secs > 0).then(|| Duration::from_secs(self.http_timeout_secs))
    }
}
