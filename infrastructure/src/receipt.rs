//! Reading receipt files from the local filesystem

use billed_domain::ReceiptFile;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading a receipt
#[derive(Error, Debug)]
pub enum ReceiptReadError {
    #[error("Failed to read receipt {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Receipt path has no file name: {0}")]
    NoFileName(PathBuf),
}

/// Loads receipt files chosen on the command line
pub struct ReceiptReader;

impl ReceiptReader {
    /// Read the file at `path`; the receipt is named after the last path component
    pub async fn read(path: impl AsRef<Path>) -> Result<ReceiptFile, ReceiptReadError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| ReceiptReadError::NoFileName(path.to_path_buf()))?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ReceiptReadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Read receipt {} ({} bytes)", name, bytes.len());

        Ok(ReceiptFile::new(name, bytes))
    }
}
