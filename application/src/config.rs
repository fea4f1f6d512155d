//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as bill store timeouts.

use std::time::Duration;

/// Application behavior configuration.
///
/// Controls runtime behavior of use cases like the time limit for a single
/// bill store call. Calls are never retried.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Maximum time to wait for a bill store response before timing out.
    pub timeout: Option<Duration>,
}
