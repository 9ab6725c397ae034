use crate::error::HttpRelayError;
use crate::extract::WebhookJson;
use crate::state::AppState;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures::TryStreamExt;
use hookrelay_core::models::{FormResponse, ReceiptResponse, ResolvedAsset, WebhookPayload};
use hookrelay_core::RelayError;
use std::io;
use std::pin::Pin;
use std::sync::Arc;
use tokio::io::AsyncRead;
use tokio_util::io::StreamReader;

/// Webhook intake: decode the notification, resolve the asset when the
/// payload only names a resource, then stream the download to disk.
///
/// A resource notification without a download name is answered with a form
/// prompt and processed no further.
#[tracing::instrument(skip(state, payload), fields(operation = "receive_webhook"))]
pub async fn receive_webhook(
    State(state): State<Arc<AppState>>,
    WebhookJson(payload): WebhookJson,
) -> Result<Response, HttpRelayError> {
    let resolved = match payload {
        WebhookPayload::Resource(notification) => {
            let Some(download_name) = notification.data.download_name() else {
                tracing::debug!(
                    resource_id = %notification.resource.id,
                    "No download name supplied, prompting caller"
                );
                return Ok(Json(FormResponse::download_name_prompt()).into_response());
            };
            let download_name = download_name.to_string();

            let asset = state.assets.resolve_asset(&notification.resource.id).await?;

            // The caller-supplied name decides what lands on disk.
            ResolvedAsset {
                url: asset.url,
                filename: download_name,
            }
        }
        WebhookPayload::Direct(direct) => ResolvedAsset {
            url: direct.url.trim().to_string(),
            filename: direct.name,
        },
    };

    if resolved.url.is_empty() {
        return Err(RelayError::MissingUrl.into());
    }

    let filename = resolved.disk_name().to_string();
    tracing::info!(url = %resolved.url, filename = %filename, "Downloading file");

    let response = state.assets.fetch(&resolved.url).await?;

    let stream = response.bytes_stream().map_err(io::Error::other);
    let reader: Pin<Box<dyn AsyncRead + Send + Unpin>> =
        Box::pin(StreamReader::new(Box::pin(stream)));

    let (path, size_bytes) = state.store.save_stream(&filename, reader).await?;

    tracing::info!(path = %path.display(), size_bytes, "File downloaded");

    Ok(Json(ReceiptResponse::downloaded()).into_response())
}
