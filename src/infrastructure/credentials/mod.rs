//! Credentials management infrastructure.
//!
//! The Salesforce login credential is a username/password/security-token
//! triple. The remote system imposes the assembly rule: the password sent on
//! the wire is the configured password with the security token appended.

use std::fmt;

use crate::domain::models::SalesforceConfig;

/// Login credentials for the Salesforce integration user.
#[derive(Clone)]
pub struct SalesforceCredentials {
    pub username: String,
    password: String,
    security_token: String,
}

impl SalesforceCredentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        security_token: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            security_token: security_token.into(),
        }
    }

    /// The wire password: configured password directly concatenated with the
    /// security token. Opaque contract of the remote login step; do not
    /// reinterpret.
    pub fn api_password(&self) -> String {
        format!("{}{}", self.password, self.security_token)
    }
}

impl From<&SalesforceConfig> for SalesforceCredentials {
    fn from(config: &SalesforceConfig) -> Self {
        Self::new(
            config.username.clone(),
            config.password.clone(),
            config.security_token.clone(),
        )
    }
}

// Secrets never reach the log stream, even from a stray debug print.
impl fmt::Debug for SalesforceCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SalesforceCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("security_token", &"[REDACTED]")
            .finish()
    }
}
