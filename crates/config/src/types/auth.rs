//! Authentication types for the OpenStack cloud-config.
//!
//! Responsibilities:
//! - Define the two mutually exclusive credential modes.
//!
//! Does NOT handle:
//! - Choosing between the modes (see `assembler`).
//! - Rendering credentials into the config file (see `render`).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Exactly one credential mode is populated per resolved config.

use secrecy::SecretString;
use std::fmt;

/// Credentials used by the cloud provider to talk to Keystone.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Application credential id/secret pair.
    ApplicationCredential { id: String, secret: SecretString },
    /// Username/password scoped to a project.
    Password {
        username: String,
        password: SecretString,
        project_name: String,
        project_id: String,
    },
}

impl Credentials {
    pub fn mode(&self) -> AuthMode {
        match self {
            Self::ApplicationCredential { .. } => AuthMode::ApplicationCredential,
            Self::Password { .. } => AuthMode::Password,
        }
    }
}

/// Which credential mode was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    ApplicationCredential,
    Password,
}

impl AuthMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ApplicationCredential => "application-credential",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_matches_variant() {
        let app = Credentials::ApplicationCredential {
            id: "cred-1".to_string(),
            secret: SecretString::new("s3cr3t".to_string().into()),
        };
        assert_eq!(app.mode(), AuthMode::ApplicationCredential);
        assert_eq!(app.mode().to_string(), "application-credential");
    }

    /// Debug output must not expose the application credential secret.
    #[test]
    fn test_application_credential_debug_does_not_expose_secret() {
        let credentials = Credentials::ApplicationCredential {
            id: "cred-1".to_string(),
            secret: SecretString::new("app-secret-789".to_string().into()),
        };

        let debug_output = format!("{:?}", credentials);

        assert!(!debug_output.contains("app-secret-789"));
        assert!(debug_output.contains("cred-1"));
    }

    /// Debug output must not expose the password, but keeps the username.
    #[test]
    fn test_password_debug_does_not_expose_password() {
        let credentials = Credentials::Password {
            username: "alice".to_string(),
            password: SecretString::new("session-password-456".to_string().into()),
            project_name: "proj1".to_string(),
            project_id: "id1".to_string(),
        };

        let debug_output = format!("{:?}", credentials);

        assert!(!debug_output.contains("session-password-456"));
        assert!(debug_output.contains("alice"));
        assert_eq!(credentials.mode(), AuthMode::Password);
    }
}
