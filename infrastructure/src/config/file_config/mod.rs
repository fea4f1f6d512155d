//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod output;
mod session;

pub use api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, FileApiConfig};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use session::FileSessionConfig;

use billed_application::BehaviorConfig;
use billed_domain::{ConfigIssue, DomainError, Session};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Bill store API settings
    pub api: FileApiConfig,
    /// Connected user
    pub session: FileSessionConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.api.validate());
        issues.extend(self.session.parse_user_type().1);
        issues
    }

    /// Behavior settings for the use cases
    pub fn behavior(&self) -> BehaviorConfig {
        BehaviorConfig {
            timeout: self.api.timeout(),
        }
    }

    /// Build the session of the connected user.
    ///
    /// `email_override` (from the command line) wins over `session.email`.
    /// The API token, if any, is attached to the session.
    pub fn build_session(&self, email_override: Option<&str>) -> Result<Session, DomainError> {
        let email = email_override
            .or(self.session.email.as_deref())
            .ok_or_else(|| DomainError::InvalidSession("no email configured".to_string()))?;
        let (user_type, _) = self.session.parse_user_type();

        let session = Session::new(email, user_type)?;
        Ok(match &self.api.jwt {
            Some(jwt) => session.with_jwt(jwt),
            None => session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billed_domain::{OutputFormat, UserType};
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[api]
base_url = "https://billed.example.com"
jwt = "secret-token"
timeout_secs = 10

[session]
email = "employee@test.tld"
user_type = "Employee"

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "https://billed.example.com");
        assert_eq!(config.api.jwt.as_deref(), Some("secret-token"));
        assert_eq!(config.api.timeout_secs, Some(10));
        assert_eq!(config.session.email.as_deref(), Some("employee@test.tld"));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: FileConfig = toml::from_str("[session]\nemail = \"a@a\"\n").unwrap();
        assert_eq!(config.api, FileApiConfig::default());
        assert_eq!(config.output, FileOutputConfig::default());
    }

    #[test]
    fn test_behavior_from_timeout() {
        let config = FileConfig::default();
        assert_eq!(config.behavior().timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_behavior_without_timeout() {
        let config: FileConfig = toml::from_str("[api]\ntimeout_secs = 0\n").unwrap();
        assert_eq!(config.behavior().timeout, None);
    }

    #[test]
    fn test_build_session_prefers_override() {
        let mut config = FileConfig::default();
        config.session.email = Some("config@test.tld".to_string());
        config.api.jwt = Some("token".to_string());

        let session = config.build_session(Some("cli@test.tld")).unwrap();
        assert_eq!(session.email(), "cli@test.tld");
        assert_eq!(session.jwt(), Some("token"));
        assert_eq!(session.user_type(), UserType::Employee);

        let session = config.build_session(None).unwrap();
        assert_eq!(session.email(), "config@test.tld");
    }

    #[test]
    fn test_build_session_without_email_fails() {
        let config = FileConfig::default();
        assert!(matches!(
            config.build_session(None),
            Err(DomainError::InvalidSession(_))
        ));
    }

    #[test]
    fn test_validate_collects_all_sections() {
        let mut config = FileConfig::default();
        config.api.base_url = String::new();
        config.session.user_type = "guest".to_string();
        assert_eq!(config.validate().len(), 2);
    }
}
