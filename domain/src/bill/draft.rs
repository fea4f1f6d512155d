//! Bill draft: the receipt reference held between upload and submission

use super::receipt::CreatedFile;
use serde::{Deserialize, Serialize};

/// Transient holder for the receipt upload result
///
/// Empty when the workflow starts, filled once by a successful upload and
/// read when the bill is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillDraft {
    file_url: Option<String>,
    file_name: Option<String>,
    bill_id: Option<String>,
}

impl BillDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an upload result. All three fields are set together.
    pub fn fill(&mut self, created: CreatedFile, file_name: impl Into<String>) {
        self.bill_id = Some(created.key);
        self.file_url = Some(created.file_url);
        self.file_name = Some(file_name.into());
    }

    pub fn file_url(&self) -> Option<&str> {
        self.file_url.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn bill_id(&self) -> Option<&str> {
        self.bill_id.as_deref()
    }

    /// Whether an upload has completed and the bill can be submitted
    pub fn is_ready(&self) -> bool {
        self.bill_id.is_some()
    }
}
