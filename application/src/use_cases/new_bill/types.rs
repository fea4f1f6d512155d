//! Types for the new-bill workflow: states, file input and errors.

use crate::ports::bill_store::StoreError;
use billed_domain::{BillFormError, INVALID_FORMAT_MESSAGE};
use thiserror::Error;

/// Lifecycle of a new-bill workflow
///
/// ```text
/// Empty ──select──▶ FileUploading ──ok──▶ FileReady ──submit──▶ Submitting ──ok──▶ Done
///   ▲                    │                  ▲  │                     │
///   └───────err──────────┘                  │  └──select (replace)   │
///                                           └──────────err───────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewBillState {
    /// No receipt uploaded yet
    Empty,
    /// A receipt upload is in flight
    FileUploading,
    /// The draft holds an uploaded receipt
    FileReady,
    /// The bill update is in flight
    Submitting,
    /// The bill was stored and the user navigated away
    Done,
}

impl std::fmt::Display for NewBillState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NewBillState::Empty => "empty",
            NewBillState::FileUploading => "uploading the receipt",
            NewBillState::FileReady => "ready",
            NewBillState::Submitting => "submitting",
            NewBillState::Done => "done",
        };
        write!(f, "{}", s)
    }
}

/// State of the form's file input: its value and validation message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInput {
    value: Option<String>,
    validation_message: String,
}

impl FileInput {
    /// Selected file name, `None` when the input is empty
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Custom validity message, empty when the input is valid
    pub fn validation_message(&self) -> &str {
        &self.validation_message
    }

    pub fn is_valid(&self) -> bool {
        self.validation_message.is_empty()
    }

    pub(crate) fn accept(&mut self, file_name: &str) {
        self.value = Some(file_name.to_string());
        self.validation_message.clear();
    }

    pub(crate) fn reject(&mut self, message: &str) {
        self.value = None;
        self.validation_message = message.to_string();
    }
}

/// Errors returned when a receipt is selected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectFileError {
    #[error("Unsupported receipt format: {file_name}")]
    InvalidFormat { file_name: String },

    #[error("Cannot change the receipt while {0}")]
    InvalidState(NewBillState),

    #[error("Receipt upload failed: {0}")]
    Store(#[from] StoreError),
}

impl SelectFileError {
    /// Message meant for the user, if this error has one
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            SelectFileError::InvalidFormat { .. } => Some(INVALID_FORMAT_MESSAGE),
            _ => None,
        }
    }
}

/// Errors returned when the bill is submitted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitBillError {
    #[error("No receipt has been uploaded")]
    NoReceipt,

    #[error("The receipt upload has not finished")]
    UploadInProgress,

    #[error("The bill is already being submitted")]
    SubmissionInProgress,

    #[error("The bill has already been submitted")]
    AlreadySubmitted,

    #[error("Invalid form: {0}")]
    Form(#[from] BillFormError),

    #[error("Bill update failed: {0}")]
    Store(#[from] StoreError),
}

impl SubmitBillError {
    /// Whether the store was reached and failed (as opposed to a local rejection)
    pub fn is_store_failure(&self) -> bool {
        matches!(self, SubmitBillError::Store(_))
    }
}
