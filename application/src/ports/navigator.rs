//! Navigation port
//!
//! Swaps the visible view. Navigation is synchronous and cannot fail.

use billed_domain::Route;
use tracing::debug;

/// Navigation collaborator
pub trait Navigator: Send + Sync {
    /// Replace the visible view with `route`
    fn navigate(&self, route: Route);
}

/// Navigator for headless runs: only logs the destination
pub struct NoNavigation;

impl Navigator for NoNavigation {
    fn navigate(&self, route: Route) {
        debug!("Navigation to {} ignored", route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_no_navigation_is_usable_as_port() {
        let navigator: Arc<dyn Navigator> = Arc::new(NoNavigation);
        navigator.navigate(Route::Bills);
        navigator.navigate(Route::NewBill);
    }
}
