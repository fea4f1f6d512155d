//! Session configuration from TOML (`[session]` section)

use billed_domain::{ConfigIssue, ConfigIssueCode, Severity, UserType};
use serde::{Deserialize, Serialize};

/// Raw session configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Email of the connected user
    pub email: Option<String>,
    /// "Employee" or "Admin"
    pub user_type: String,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            email: None,
            user_type: UserType::Employee.to_string(),
        }
    }
}

impl FileSessionConfig {
    /// Parse the user type, falling back to `Employee` with a warning
    pub fn parse_user_type(&self) -> (UserType, Vec<ConfigIssue>) {
        match self.user_type.parse::<UserType>() {
            Ok(user_type) => (user_type, Vec::new()),
            Err(_) => (
                UserType::Employee,
                vec![ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "session.user_type".to_string(),
                        value: self.user_type.clone(),
                        valid_values: vec!["Employee".to_string(), "Admin".to_string()],
                    },
                    message: format!(
                        "session.user_type: unknown value '{}', falling back to 'Employee'",
                        self.user_type
                    ),
                }],
            ),
        }
    }
}
