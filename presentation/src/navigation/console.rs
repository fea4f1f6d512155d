//! Console navigator

use billed_application::Navigator;
use billed_domain::Route;
use colored::Colorize;
use std::sync::Mutex;
use tracing::info;

/// Navigator that tracks the current view and announces changes on stdout
pub struct ConsoleNavigator {
    current: Mutex<Route>,
}

impl ConsoleNavigator {
    /// Start on `route`
    pub fn new(route: Route) -> Self {
        Self {
            current: Mutex::new(route),
        }
    }

    /// View currently displayed
    pub fn current(&self) -> Route {
        match self.current.lock() {
            Ok(route) => *route,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl Default for ConsoleNavigator {
    fn default() -> Self {
        Self::new(Route::NewBill)
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: Route) {
        info!("Navigating to {} ({})", route.name(), route.path());
        match self.current.lock() {
            Ok(mut current) => *current = route,
            Err(poisoned) => *poisoned.into_inner() = route,
        }
        println!("{} {}", "→".cyan().bold(), route.name().bold());
    }
}
