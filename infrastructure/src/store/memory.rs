//! In-memory bill store

use async_trait::async_trait;
use billed_application::{BillStore, StoreError};
use billed_domain::{Bill, CreatedFile, ReceiptUpload};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// Base of the URLs handed out for uploaded receipts
pub const IMAGE_BASE_URL: &str = "https://localhost:3456/images";

#[derive(Debug, Default)]
struct Inner {
    next_key: u64,
    receipts: HashMap<String, ReceiptUpload>,
    bills: HashMap<String, Bill>,
}

/// Bill store kept in process memory.
///
/// Receipts get sequential keys starting at `1`. Updating a key that was
/// never created answers like the API does: `Erreur 404`.
#[derive(Debug, Default)]
pub struct InMemoryBillStore {
    inner: Mutex<Inner>,
}

impl InMemoryBillStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bill stored under `bill_id`, if it was updated
    pub fn bill(&self, bill_id: &str) -> Option<Bill> {
        self.lock().ok()?.bills.get(bill_id).cloned()
    }

    /// Uploaded receipt under `bill_id`
    pub fn receipt(&self, bill_id: &str) -> Option<ReceiptUpload> {
        self.lock().ok()?.receipts.get(bill_id).cloned()
    }

    /// Number of stored bills
    pub fn bill_count(&self) -> usize {
        self.lock().map(|inner| inner.bills.len()).unwrap_or(0)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Other("Store lock poisoned".to_string()))
    }
}

#[async_trait]
impl BillStore for InMemoryBillStore {
    async fn create(&self, upload: &ReceiptUpload) -> Result<CreatedFile, StoreError> {
        let mut inner = self.lock()?;
        inner.next_key += 1;
        let key = inner.next_key.to_string();
        inner.receipts.insert(key.clone(), upload.clone());
        debug!("Stored receipt {} under key {}", upload.file.name(), key);

        Ok(CreatedFile {
            file_url: format!("{}/{}", IMAGE_BASE_URL, upload.file.name()),
            key,
        })
    }

    async fn update(&self, bill: &Bill, bill_id: &str) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        if !inner.receipts.contains_key(bill_id) {
            return Err(StoreError::Http {
                status: 404,
                message: format!("Bill {} not found", bill_id),
            });
        }
        inner.bills.insert(bill_id.to_string(), bill.clone());
        Ok(())
    }
}
