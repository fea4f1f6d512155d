//! Receipt files and the upload payload built from them

use super::file_format::{ReceiptFormat, file_name_from_path};
use serde::{Deserialize, Serialize};

/// A receipt file chosen by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptFile {
    name: String,
    bytes: Vec<u8>,
}

impl ReceiptFile {
    /// Create a receipt from a file input value (path prefix is stripped) and its bytes
    pub fn new(value: impl AsRef<str>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: file_name_from_path(value.as_ref()).to_string(),
            bytes: bytes.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Image format, `None` when the extension is not accepted
    pub fn format(&self) -> Option<ReceiptFormat> {
        ReceiptFormat::from_file_name(&self.name)
    }
}

/// Multipart payload for the store's create call: a `file` part and an `email` part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptUpload {
    pub file: ReceiptFile,
    pub email: String,
}

impl ReceiptUpload {
    pub fn new(file: ReceiptFile, email: impl Into<String>) -> Self {
        Self {
            file,
            email: email.into(),
        }
    }

    /// Content type of the file part
    pub fn content_type(&self) -> &'static str {
        self.file
            .format()
            .map(|f| f.content_type())
            .unwrap_or("application/octet-stream")
    }
}

/// Result of a successful receipt upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedFile {
    pub file_url: String,
    pub key: String,
}
