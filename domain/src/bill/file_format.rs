//! Receipt file format validation
//!
//! Only image receipts are accepted. The format is taken from the last
//! extension segment of the file name, compared case-insensitively, so
//! `report.v2.png` is a PNG and `photo.png.exe` is rejected.

use serde::{Deserialize, Serialize};

/// Extensions accepted for receipt images (lowercase)
pub const ACCEPTED_FORMATS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Validation message shown on the file input when a receipt is rejected
pub const INVALID_FORMAT_MESSAGE: &str = "Formats acceptés : jpg, jpeg et png";

/// Accepted receipt image formats (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptFormat {
    Jpeg,
    Png,
}

impl ReceiptFormat {
    /// Detect the format from a file name, `None` if it is not an accepted image
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = extension(file_name)?;
        let accepted = ACCEPTED_FORMATS
            .iter()
            .find(|format| ext.eq_ignore_ascii_case(format))?;
        Some(if *accepted == "png" {
            ReceiptFormat::Png
        } else {
            ReceiptFormat::Jpeg
        })
    }

    /// MIME type sent with the multipart file part
    pub fn content_type(&self) -> &'static str {
        match self {
            ReceiptFormat::Jpeg => "image/jpeg",
            ReceiptFormat::Png => "image/png",
        }
    }
}

impl std::fmt::Display for ReceiptFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReceiptFormat::Jpeg => write!(f, "jpeg"),
            ReceiptFormat::Png => write!(f, "png"),
        }
    }
}

/// Extension segment of a file name: everything after the last `.`
///
/// Returns `None` when there is no dot or nothing follows it.
pub fn extension(file_name: &str) -> Option<&str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    if ext.is_empty() { None } else { Some(ext) }
}

/// Whether a receipt file name has an accepted image extension
pub fn is_accepted_format(file_name: &str) -> bool {
    ReceiptFormat::from_file_name(file_name).is_some()
}

/// File name component of a file input value.
///
/// Browsers report `C:\fakepath\receipt.png`; local paths use `/`.
pub fn file_name_from_path(value: &str) -> &str {
    value.rsplit(['\\', '/']).next().unwrap_or(value)
}
