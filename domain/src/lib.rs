//! Domain layer for billed
//!
//! This crate contains the expense-report entities, the new-bill form rules
//! and the receipt format validation. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Bill**: an expense record filed by an employee, always `pending` when created
//! - **BillDraft**: the receipt upload result, filled before the bill is submitted
//! - **Session**: the connected user, passed explicitly to use cases
//! - **Route**: the logical views the application navigates between

pub mod bill;
pub mod config;
pub mod core;
pub mod navigation;
pub mod session;

// Re-export commonly used types
pub use bill::{
    draft::BillDraft,
    entities::{Bill, BillStatus, ExpenseType},
    file_format::{
        ACCEPTED_FORMATS, INVALID_FORMAT_MESSAGE, ReceiptFormat, extension, file_name_from_path,
        is_accepted_format,
    },
    form::{BillForm, BillFormError, DEFAULT_PCT, parse_leading_int},
    receipt::{CreatedFile, ReceiptFile, ReceiptUpload},
};
pub use config::OutputFormat;
pub use crate::core::{
    error::DomainError,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use navigation::Route;
pub use session::{Session, UserType};
