//! Bill subdomain
//!
//! - [`entities::Bill`]: an expense-report record, immutable once built
//! - [`draft::BillDraft`]: receipt reference held between upload and submission
//! - [`form::BillForm`]: raw form input and its assembly into a bill
//! - [`file_format`]: receipt extension validation
//! - [`receipt`]: chosen receipt files and the upload payload

pub mod draft;
pub mod entities;
pub mod file_format;
pub mod form;
pub mod receipt;
