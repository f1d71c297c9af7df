// Configuration module
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub github: GithubSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub security: SecuritySettings,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// Authentication settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    /// HS256 signing secret for bearer tokens
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Accepted token issuer
    #[serde(default = "default_issuer")]
    pub issuer: String,
    #[serde(default = "default_token_expiry_hours")]
    pub token_expiry_hours: i64,
}

/// GitHub lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubSettings {
    #[serde(default = "default_github_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_github_user_agent")]
    pub user_agent: String,
    /// Optional bearer token for a higher API rate limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default = "default_github_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_true")]
    pub log_to_console: bool,
    /// Optional log file path; appended to when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

/// Security settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecuritySettings {
    #[serde(default)]
    pub cors: CorsSettings,
}

/// CORS settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins; empty or "*" allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_workers() -> usize {
    2
}

fn default_jwt_secret() -> String {
    "devfolio-dev-secret-change-in-production".to_string()
}

fn default_issuer() -> String {
    "devfolio".to_string()
}

fn default_token_expiry_hours() -> i64 {
    24
}

fn default_github_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_github_user_agent() -> String {
    "devfolio".to_string()
}

fn default_github_timeout_seconds() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            issuer: default_issuer(),
            token_expiry_hours: default_token_expiry_hours(),
        }
    }
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_github_base_url(),
            user_agent: default_github_user_agent(),
            token: None,
            timeout_seconds: default_github_timeout_seconds(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_to_console: default_true(),
            log_file: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}
