//! Application state.

use hookrelay_client::AssetClient;
use hookrelay_core::Config;
use hookrelay_storage::DownloadStore;

/// Everything a handler needs, shared behind an `Arc`. The relay keeps no
/// state between requests; these are the process-wide resources built once at
/// startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub assets: AssetClient,
    pub store: DownloadStore,
}
