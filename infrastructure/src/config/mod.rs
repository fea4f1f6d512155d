//! Configuration file loading for billed
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./billed.toml` or `./.billed.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/billed/config.toml`
//! 4. Fallback: `~/.config/billed/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, FileApiConfig, FileConfig, FileOutputConfig,
    FileOutputFormat, FileSessionConfig,
};
pub use loader::ConfigLoader;
