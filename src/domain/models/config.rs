use serde::{Deserialize, Serialize};

/// Main configuration structure for leadconvert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Queue store configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Salesforce endpoint and credentials
    #[serde(default)]
    pub salesforce: SalesforceConfig,

    /// Conversion policy
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Queue store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// Database URL (e.g. "sqlite:leadconvert.db")
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Maximum number of database connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_url() -> String {
    "sqlite:leadconvert.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

/// Salesforce endpoint and credential configuration.
///
/// The credential fields have no usable defaults: `validate()` rejects a
/// config that leaves them empty before any item is processed. The security
/// token may legitimately be empty (token-less logins from trusted networks).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SalesforceConfig {
    /// OAuth login host
    #[serde(default = "default_login_url")]
    pub login_url: String,

    /// REST API version segment (e.g. "v59.0")
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Connected-app consumer key
    #[serde(default)]
    pub client_id: String,

    /// Connected-app consumer secret
    #[serde(default)]
    pub client_secret: String,

    /// Integration user name
    #[serde(default)]
    pub username: String,

    /// Integration user password
    #[serde(default)]
    pub password: String,

    /// Security token, appended to the password at login
    #[serde(default)]
    pub security_token: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_login_url() -> String {
    "https://login.salesforce.com".to_string()
}

fn default_api_version() -> String {
    "v59.0".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for SalesforceConfig {
    fn default() -> Self {
        Self {
            login_url: default_login_url(),
            api_version: default_api_version(),
            client_id: String::new(),
            client_secret: String::new(),
            username: String::new(),
            password: String::new(),
            security_token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Conversion policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ConversionConfig {
    /// Whether the remote conversion should also create an Opportunity.
    /// Deferred upstream (DCI-7), so it is a switch rather than a policy.
    #[serde(default = "default_create_opportunity")]
    pub create_opportunity: bool,
}

const fn default_create_opportunity() -> bool {
    true
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            create_opportunity: default_create_opportunity(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
