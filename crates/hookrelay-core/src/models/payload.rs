//! Inbound webhook payload shapes.

use serde::Deserialize;

/// Inbound webhook notification.
///
/// Two shapes arrive on the same endpoint depending on the sender: a direct
/// download instruction carrying the URL itself, or a resource notification
/// that only names an asset id and needs a metadata lookup. The union is
/// untagged; a payload without a `resource` object falls through to the
/// direct shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WebhookPayload {
    Resource(ResourceNotification),
    Direct(DirectDownload),
}

/// Notification naming a remote resource that must be resolved before it can
/// be downloaded.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceNotification {
    pub resource: ResourceRef,
    #[serde(default)]
    pub data: DownloadOptions,
}

/// Identifier/type pair for a remote resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRef {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Caller-supplied download options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DownloadOptions {
    #[serde(rename = "dw_name", default)]
    pub download_name: Option<String>,
}

impl DownloadOptions {
    /// The user-supplied download name, if one was actually provided.
    pub fn download_name(&self) -> Option<&str> {
        self.download_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Direct download instruction: the URL is already known to the sender.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectDownload {
    #[serde(alias = "URL", alias = "original")]
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
}
