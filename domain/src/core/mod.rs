//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`validation::ConfigIssue`]: configuration issues with severity

pub mod error;
pub mod validation;
