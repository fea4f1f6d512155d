//! Logical destinations of the application

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A view the application can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Login, Route::Bills, Route::NewBill, Route::Dashboard];

    /// Hash path of the view
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
            Route::Dashboard => "#admin/dashboard",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Bills => "Bills",
            Route::NewBill => "NewBill",
            Route::Dashboard => "Dashboard",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl std::str::FromStr for Route {
    type Err = DomainError;

    /// Accepts either the route name (`Bills`) or its path (`#employee/bills`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Route::ALL
            .into_iter()
            .find(|r| r.path() == s || r.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownRoute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Bills.path(), "#employee/bills");
        assert_eq!(Route::NewBill.path(), "#employee/bill/new");
        assert_eq!(Route::Login.to_string(), "/");
    }

    #[test]
    fn test_route_parse_name_or_path() {
        assert_eq!("Bills".parse::<Route>().unwrap(), Route::Bills);
        assert_eq!("newbill".parse::<Route>().unwrap(), Route::NewBill);
        assert_eq!("#admin/dashboard".parse::<Route>().unwrap(), Route::Dashboard);
        assert!("#employee/unknown".parse::<Route>().is_err());
    }
}
