//! Application setup and initialization
//!
//! All startup logic lives here rather than in main.rs: telemetry, the
//! outbound client, the download store, and the route table.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use hookrelay_client::AssetClient;
use hookrelay_core::Config;
use hookrelay_storage::DownloadStore;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry();

    tracing::info!(
        asset_api_url = %config.asset_api_url,
        download_dir = %config.download_dir,
        http_timeout_secs = config.http_timeout_secs,
        "Configuration loaded"
    );

    let assets = AssetClient::new(&config.asset_api_url, &config.api_token, config.http_timeout())
        .context("Failed to create asset client")?;

    let store = DownloadStore::new(&config.download_dir)
        .await
        .context("Failed to prepare download directory")?;

    let state = Arc::new(AppState {
        config,
        assets,
        store,
    });

    let router = routes::relay_router(state.clone());

    Ok((state, router))
}
