use anyhow::{anyhow, Result};
use serde::Deserialize;

pub const DEFAULT_OAUTH_URL: &str = "https://public-api.wordpress.com/oauth2/token";
pub const DEFAULT_API_BASE_URL: &str = "https://public-api.wordpress.com/rest/v1.3";
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// ================================
/// Service configuration (YAML)
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    pub partner: PartnerConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SettingsConfig {
    pub http: Option<HttpConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Bounded request timeout for the token fetch and the
    /// provisioning/cancel calls.
    pub timeout_seconds: Option<u64>,
}

impl SettingsConfig {
    pub fn timeout_seconds(&self) -> u64 {
        self.http
            .as_ref()
            .and_then(|h| h.timeout_seconds)
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECONDS)
    }
}

/// Authorization and plan-management endpoints. Defaults target the
/// public WordPress.com partner API; tests point them at a mock server.
#[derive(Debug, Deserialize, Clone)]
pub struct EndpointsConfig {
    #[serde(default = "default_oauth_url")]
    pub oauth_url: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            oauth_url: default_oauth_url(),
            api_base_url: default_api_base_url(),
        }
    }
}

fn default_oauth_url() -> String {
    DEFAULT_OAUTH_URL.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Partner client credentials used for the client-credentials grant.
#[derive(Debug, Deserialize, Clone)]
pub struct PartnerConfig {
    pub client_id: CredentialValue,
    pub client_secret: CredentialValue,
}

/// A credential supplied inline or resolved from the environment at
/// startup.
#[derive(Deserialize, Clone)]
#[serde(untagged)]
pub enum CredentialValue {
    Literal { value: String },
    FromEnv { from_env: String },
}

impl CredentialValue {
    pub fn resolve(&self) -> Result<String> {
        match self {
            CredentialValue::Literal { value } => Ok(value.clone()),
            CredentialValue::FromEnv { from_env } => std::env::var(from_env)
                .map_err(|_| anyhow!("environment variable '{}' is not set", from_env)),
        }
    }
}

// values may be secrets; show only the variant
impl std::fmt::Debug for CredentialValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialValue::Literal { .. } => f
                .debug_struct("Literal")
                .field("value", &"[REDACTED]")
                .finish(),
            CredentialValue::FromEnv { from_env } => f
                .debug_struct("FromEnv")
                .field("from_env", from_env)
                .finish(),
        }
    }
}

/// Order record store location: one detail file per order id.
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub path: String,
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}
