//! Local-disk sink for downloaded assets.
//!
//! The destination file is created before any bytes arrive, handles close on
//! every exit path, and a name that would escape the download directory never
//! reaches the filesystem. A failed copy leaves the partial file behind; the
//! caller sees the error and nothing else.

use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::fs;
use tokio::io::AsyncRead;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid file name: {0}")]
    InvalidName(String),

    #[error("failed to prepare download directory: {0}")]
    ConfigError(String),

    #[error("failed to create file: {0}")]
    CreateFailed(String),

    #[error("failed to write file: {0}")]
    WriteFailed(String),
}

/// Download directory with validated, flat file naming.
#[derive(Clone, Debug)]
pub struct DownloadStore {
    base_path: PathBuf,
}

impl DownloadStore {
    /// Create a store rooted at `base_path`, creating the directory if needed.
    pub async fn new(base_path: impl Into<PathBuf>) -> StoreResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path)
            .await
            .map_err(|e| StoreError::ConfigError(format!("{}: {}", base_path.display(), e)))?;

        Ok(DownloadStore { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a caller-supplied name to a path inside the download
    /// directory. Separators and parent components are rejected outright.
    fn name_to_path(&self, name: &str) -> StoreResult<PathBuf> {
        if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(StoreError::InvalidName(name.to_string()));
        }

        Ok(self.base_path.join(name))
    }

    /// Stream `reader` into a freshly created file named `name`.
    ///
    /// An existing file with the same name is truncated; there is no locking
    /// between concurrent writers of the same name. Returns the final path
    /// and the number of bytes written.
    pub async fn save_stream(
        &self,
        name: &str,
        mut reader: Pin<Box<dyn AsyncRead + Send + Unpin>>,
    ) -> StoreResult<(PathBuf, u64)> {
        let path = self.name_to_path(name)?;
        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path)
            .await
            .map_err(|e| StoreError::CreateFailed(format!("{}: {}", path.display(), e)))?;

        let bytes_copied = tokio::io::copy(&mut reader, &mut file)
            .await
            .map_err(|e| StoreError::WriteFailed(format!("{}: {}", path.display(), e)))?;

        file.sync_all()
            .await
            .map_err(|e| StoreError::WriteFailed(format!("{}: {}", path.display(), e)))?;

        tracing::info!(
            path = %path.display(),
            size_bytes = bytes_copied,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Download saved to disk"
        );

        Ok((path, bytes_copied))
    }
}
