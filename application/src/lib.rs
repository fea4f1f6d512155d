//! Application layer for billed
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    bill_store::{BillStore, StoreError},
    navigator::{Navigator, NoNavigation},
};
pub use use_cases::new_bill::{
    FileInput, NewBillState, NewBillUseCase, SelectFileError, SubmitBillError,
};
