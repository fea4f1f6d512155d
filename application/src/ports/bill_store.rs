//! Bill store port
//!
//! Defines the interface for persisting receipts and bills.
//!
//! Submitting a bill is two calls against the store:
//!
//! ```text
//! receipt chosen ──▶ create(upload) ──▶ { fileUrl, key }
//!                                           │
//! form submitted ──▶ update(bill, key) ◀────┘
//! ```

use async_trait::async_trait;
use billed_domain::{Bill, CreatedFile, ReceiptUpload};
use thiserror::Error;

/// Errors that can occur during bill store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Erreur {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl StoreError {
    /// HTTP status code, if the store answered with one
    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Persistence collaborator for bills
///
/// Implementations (adapters) live in the infrastructure layer.
/// Every call is attempted exactly once; callers never retry.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// Upload a receipt, reserving a bill identifier for it
    async fn create(&self, upload: &ReceiptUpload) -> Result<CreatedFile, StoreError>;

    /// Store the complete bill under the identifier returned by [`create`](Self::create)
    async fn update(&self, bill: &Bill, bill_id: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let error = StoreError::Http {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(error.to_string(), "Erreur 404: Not Found");
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_non_http_error_has_no_status() {
        assert_eq!(StoreError::Timeout.status(), None);
        assert_eq!(StoreError::Connection("refused".into()).status(), None);
    }
}
