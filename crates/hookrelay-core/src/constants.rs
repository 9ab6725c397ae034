//! Shared constants.

/// Fallback filename used when neither the payload nor the asset record
/// carries a name.
pub const DEFAULT_DOWNLOAD_NAME: &str = "downloaded_file";

/// Form field the caller must fill in with the desired download name.
pub const DOWNLOAD_NAME_FIELD: &str = "dw_name";
