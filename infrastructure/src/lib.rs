//! Infrastructure layer for billed
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod receipt;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileApiConfig, FileConfig, FileOutputConfig, FileOutputFormat,
    FileSessionConfig,
};
pub use receipt::{ReceiptReadError, ReceiptReader};
pub use store::{HttpBillStore, InMemoryBillStore};
