//! New Bill use case.
//!
//! Drives the submission of one expense report:
//!
//! 1. [`select_file`](NewBillUseCase::select_file) validates the receipt
//!    format and uploads it through [`BillStore::create`], filling the
//!    [`BillDraft`].
//! 2. [`submit`](NewBillUseCase::submit) assembles the [`Bill`] from the
//!    form, stores it with [`BillStore::update`] and, once the store has
//!    confirmed, navigates to [`Route::Bills`].
//!
//! Submission is refused until a receipt upload has completed. Store
//! failures are logged and returned to the caller; nothing is retried.

mod types;

pub use types::{FileInput, NewBillState, SelectFileError, SubmitBillError};

use crate::config::BehaviorConfig;
use crate::ports::bill_store::{BillStore, StoreError};
use crate::ports::navigator::Navigator;
use billed_domain::{
    Bill, BillDraft, BillForm, INVALID_FORMAT_MESSAGE, ReceiptFile, ReceiptUpload, Route,
    Session,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Use case for filing a new bill.
///
/// One instance owns one draft and is discarded after the bill is stored.
pub struct NewBillUseCase {
    store: Arc<dyn BillStore>,
    navigator: Arc<dyn Navigator>,
    session: Session,
    behavior: BehaviorConfig,
    state: NewBillState,
    draft: BillDraft,
    file_input: FileInput,
}

impl NewBillUseCase {
    pub fn new(store: Arc<dyn BillStore>, navigator: Arc<dyn Navigator>, session: Session) -> Self {
        Self {
            store,
            navigator,
            session,
            behavior: BehaviorConfig::default(),
            state: NewBillState::Empty,
            draft: BillDraft::new(),
            file_input: FileInput::default(),
        }
    }

    /// Apply behavior settings (store call timeout).
    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn state(&self) -> NewBillState {
        self.state
    }

    pub fn draft(&self) -> &BillDraft {
        &self.draft
    }

    pub fn file_input(&self) -> &FileInput {
        &self.file_input
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Handle a receipt chosen in the file input.
    ///
    /// A receipt with an unsupported extension clears the input, sets the
    /// validation message and never reaches the store. An accepted receipt
    /// is uploaded together with the session email.
    pub async fn select_file(&mut self, file: ReceiptFile) -> Result<&BillDraft, SelectFileError> {
        if matches!(self.state, NewBillState::Submitting | NewBillState::Done) {
            return Err(SelectFileError::InvalidState(self.state));
        }

        // An abandoned upload may have left the state at FileUploading
        let previous = if self.draft.is_ready() {
            NewBillState::FileReady
        } else {
            NewBillState::Empty
        };

        if file.format().is_none() {
            info!("Rejected receipt with unsupported format: {}", file.name());
            self.file_input.reject(INVALID_FORMAT_MESSAGE);
            self.state = previous;
            return Err(SelectFileError::InvalidFormat {
                file_name: file.name().to_string(),
            });
        }

        self.file_input.accept(file.name());
        self.state = NewBillState::FileUploading;

        let upload = ReceiptUpload::new(file, self.session.email());
        debug!(
            "Uploading receipt {} ({} bytes)",
            upload.file.name(),
            upload.file.bytes().len()
        );

        match with_timeout(self.behavior.timeout, self.store.create(&upload)).await {
            Ok(created) => {
                info!("Receipt {} stored as bill {}", upload.file.name(), created.key);
                self.draft.fill(created, upload.file.name());
                self.state = NewBillState::FileReady;
                Ok(&self.draft)
            }
            Err(e) => {
                warn!("Receipt upload failed: {}", e);
                self.state = previous;
                Err(SelectFileError::Store(e))
            }
        }
    }

    /// Handle the form submission.
    ///
    /// Navigates to the bills list only after the store confirmed the update.
    /// On failure the workflow stays ready so the user can submit again.
    pub async fn submit(&mut self, form: &BillForm) -> Result<Bill, SubmitBillError> {
        match self.state {
            NewBillState::FileReady => {}
            NewBillState::Empty => return Err(SubmitBillError::NoReceipt),
            NewBillState::FileUploading => return Err(SubmitBillError::UploadInProgress),
            NewBillState::Submitting => return Err(SubmitBillError::SubmissionInProgress),
            NewBillState::Done => return Err(SubmitBillError::AlreadySubmitted),
        }

        let bill_id = self
            .draft
            .bill_id()
            .ok_or(SubmitBillError::NoReceipt)?
            .to_string();
        let bill = form.assemble(&self.session, &self.draft)?;

        self.state = NewBillState::Submitting;
        debug!("Submitting bill {}", bill_id);

        match with_timeout(self.behavior.timeout, self.store.update(&bill, &bill_id)).await {
            Ok(()) => {
                info!("Bill {} submitted by {}", bill_id, bill.email());
                self.state = NewBillState::Done;
                self.navigator.navigate(Route::Bills);
                Ok(bill)
            }
            Err(e) => {
                warn!("Bill {} update failed: {}", bill_id, e);
                self.state = NewBillState::FileReady;
                Err(SubmitBillError::Store(e))
            }
        }
    }
}

/// Await a store call, bounded by `timeout` when one is configured.
async fn with_timeout<T>(
    timeout: Option<Duration>,
    call: impl Future<Output = Result<T, StoreError>>,
) -> Result<T, StoreError> {
    match timeout {
        Some(limit) => tokio::time::timeout(limit, call)
            .await
            .map_err(|_| StoreError::Timeout)?,
        None => call.await,
    }
}
