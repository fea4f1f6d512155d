//! Presentation layer for billed
//!
//! This crate contains CLI definitions, the console navigator
//! and output formatters.

pub mod cli;
pub mod navigation;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, SubmitArgs};
pub use navigation::ConsoleNavigator;
pub use output::console::ConsoleFormatter;
