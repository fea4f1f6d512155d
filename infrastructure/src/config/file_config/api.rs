//! Bill store API configuration from TOML (`[api]` section)

use billed_domain::{ConfigIssue, ConfigIssueCode, Severity};
use std::time::Duration;
use serde::{Deserialize, Serialize};

/// Default address of the bill store API
pub const DEFAULT_BASE_URL: &str = "http://localhost:5678";

/// Default time limit for one store call, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Raw API configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL of the bill store API
    pub base_url: String,
    /// Bearer token issued at login
    pub jwt: Option<String>,
    /// Timeout for each store call (seconds). `0` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            jwt: None,
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FileApiConfig {
    /// Validate the section, returning detected issues
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyValue {
                    field: "api.base_url".to_string(),
                },
                message: "api.base_url must not be empty".to_string(),
            });
        }

        issues
    }

    /// Time limit for one store call, `None` when `timeout_secs` is absent or 0
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
    }
}
