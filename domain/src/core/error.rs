//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid session: {0}")]
    InvalidSession(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Unknown user type: {0}")]
    UnknownUserType(String),

    #[error("Unknown expense type: {0}")]
    UnknownExpenseType(String),

    #[error("Unknown bill status: {0}")]
    UnknownBillStatus(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_session_display() {
        let error = DomainError::InvalidSession("email is empty".to_string());
        assert_eq!(error.to_string(), "Invalid session: email is empty");
    }

    #[test]
    fn test_unknown_route_display() {
        let error = DomainError::UnknownRoute("#nowhere".to_string());
        assert_eq!(error.to_string(), "Unknown route: #nowhere");
    }
}
