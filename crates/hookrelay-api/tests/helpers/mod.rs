//! Test helpers: build state and router against mock remote endpoints.
//!
//! Run from workspace root: `cargo test -p hookrelay-api --test webhook_test`
//! or `cargo test -p hookrelay-api`.

use axum_test::TestServer;
use hookrelay_api::setup::routes;
use hookrelay_api::state::AppState;
use hookrelay_client::AssetClient;
use hookrelay_core::Config;
use hookrelay_storage::DownloadStore;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_TOKEN: &str = "test-bearer-token";

/// Asset API base URL for tests that must never reach it (TCP port 9 is the
/// discard port; any call errors out immediately).
pub const UNREACHABLE_ASSET_API: &str = "http://127.0.0.1:9";

/// Test application: server plus the tempdir downloads land in.
pub struct TestApp {
    pub server: TestServer,
    pub download_dir: TempDir,
}

impl TestApp {
    /// Path a completed download would have inside this app's download dir.
    pub fn downloaded(&self, name: &str) -> PathBuf {
        self.download_dir.path().join(name)
    }
}

/// Spin up the relay against the given asset API base URL, downloading into
/// an isolated temp directory.
pub async fn setup_test_app(asset_api_url: &str) -> TestApp {
    let download_dir = tempfile::tempdir().expect("Failed to create temp directory");

    let config = Config {
        server_port: 0,
        api_token: TEST_TOKEN.to_string(),
        asset_api_url: asset_api_url.trim_end_matches('/').to_string(),
        download_dir: download_dir.path().display().to_string(),
        http_timeout_secs: 10,
    };

    let assets = AssetClient::new(&config.asset_api_url, &config.api_token, config.http_timeout())
        .expect("Failed to create asset client");
    let store = DownloadStore::new(download_dir.path())
        .await
        .expect("Failed to create download store");

    let state = Arc::new(AppState {
        config,
        assets,
        store,
    });

    let server = TestServer::new(routes::relay_router(state)).expect("Failed to start test server");

    TestApp {
        server,
        download_dir,
    }
}
