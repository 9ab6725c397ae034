//! Resolved asset and the asset API's wire shape.

use crate::constants::DEFAULT_DOWNLOAD_NAME;
use serde::Deserialize;

/// A downloadable asset: where to fetch it and what to call it on disk.
///
/// The URL must be non-empty before a download is attempted; callers check
/// this and reject the request otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub url: String,
    pub filename: String,
}

impl ResolvedAsset {
    /// Filename to write, falling back to the default placeholder when the
    /// resolved name is empty.
    pub fn disk_name(&self) -> &str {
        let trimmed = self.filename.trim();
        if trimmed.is_empty() {
            DEFAULT_DOWNLOAD_NAME
        } else {
            trimmed
        }
    }
}

/// Asset metadata as returned by the remote asset API.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetRecord {
    /// Download URL of the original file.
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub name: String,
}

impl From<AssetRecord> for ResolvedAsset {
    fn from(record: AssetRecord) -> Self {
        ResolvedAsset {
            url: record.original,
            filename: record.name,
        }
    }
}
