//! Session of the connected user
//!
//! The session is handed explicitly to the use cases that need the user's
//! identity; nothing reads it from ambient storage.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Kind of connected user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    #[default]
    Employee,
    Admin,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Employee => "Employee",
            UserType::Admin => "Admin",
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "employee" => Ok(UserType::Employee),
            "admin" => Ok(UserType::Admin),
            _ => Err(DomainError::UnknownUserType(s.to_string())),
        }
    }
}

/// Authenticated user context (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    email: String,
    user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    jwt: Option<String>,
}

impl Session {
    /// Create a session, rejecting a blank email
    pub fn new(email: impl Into<String>, user_type: UserType) -> Result<Self, DomainError> {
        let email = email.into().trim().to_string();
        if email.is_empty() {
            return Err(DomainError::InvalidSession("email is empty".to_string()));
        }
        Ok(Self {
            email,
            user_type,
            jwt: None,
        })
    }

    /// Shorthand for an employee session
    pub fn employee(email: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(email, UserType::Employee)
    }

    /// Attach the bearer token issued at login
    pub fn with_jwt(mut self, jwt: impl Into<String>) -> Self {
        self.jwt = Some(jwt.into());
        self
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn user_type(&self) -> UserType {
        self.user_type
    }

    pub fn jwt(&self) -> Option<&str> {
        self.jwt.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_email_rejected() {
        assert!(matches!(
            Session::employee("   "),
            Err(DomainError::InvalidSession(_))
        ));
    }

    #[test]
    fn test_email_is_trimmed() {
        let session = Session::employee(" employee@test.tld ").unwrap();
        assert_eq!(session.email(), "employee@test.tld");
        assert_eq!(session.user_type(), UserType::Employee);
        assert_eq!(session.jwt(), None);
    }

    #[test]
    fn test_with_jwt() {
        let session = Session::new("admin@test.tld", UserType::Admin)
            .unwrap()
            .with_jwt("token");
        assert_eq!(session.jwt(), Some("token"));
    }

    #[test]
    fn test_user_type_parse() {
        assert_eq!("employee".parse::<UserType>().unwrap(), UserType::Employee);
        assert_eq!("Admin".parse::<UserType>().unwrap(), UserType::Admin);
        assert!("guest".parse::<UserType>().is_err());
    }
}
