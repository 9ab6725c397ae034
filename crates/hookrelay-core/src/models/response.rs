//! Response envelopes for the webhook caller.

use crate::constants::DOWNLOAD_NAME_FIELD;
use serde::{Deserialize, Serialize};

/// Flat acknowledgement envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptResponse {
    pub title: String,
    pub description: String,
}

impl ReceiptResponse {
    /// Acknowledgement sent after a completed download.
    pub fn downloaded() -> Self {
        ReceiptResponse {
            title: "Yey!".to_string(),
            description: "File downloaded successfully".to_string(),
        }
    }
}

/// Envelope prompting the caller to supply missing fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormResponse {
    pub title: String,
    pub description: String,
    pub fields: Vec<FormField>,
}

/// A single field in a form prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormField {
    #[serde(rename = "type")]
    pub field_type: String,
    pub name: String,
    pub value: String,
    pub label: String,
}

impl FormResponse {
    /// Prompt asking the caller for the download name.
    pub fn download_name_prompt() -> Self {
        FormResponse {
            title: "Download File".to_string(),
            description: "Please provide the name of the file to download".to_string(),
            fields: vec![FormField {
                field_type: "text".to_string(),
                name: DOWNLOAD_NAME_FIELD.to_string(),
                value: String::new(),
                label: "File Name".to_string(),
            }],
        }
    }
}
