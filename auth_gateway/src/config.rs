//! Central configuration for the auth_gateway crate

use std::env;

use thiserror::Error;

/// OAuth2 client id issued by Google
pub const ENV_CLIENT_ID: &str = "CLIENT_ID";
/// OAuth2 client secret issued by Google
pub const ENV_CLIENT_SECRET: &str = "CLIENT_SECRET";
/// Space-delimited, ordered list of redirect URLs the provider may send users back to
pub const ENV_REDIRECT_URLS: &str = "REDIRECT_URLS";
/// Space-delimited list of source IPs allowed to request an authorization URL
pub const ENV_RESTRICT_TO_IPS: &str = "RESTRICT_TO_IPS";
/// Space-delimited list of email suffixes allowed to log in, e.g. `@corp.example.com`
pub const ENV_RESTRICT_TO_DOMAINS: &str = "RESTRICT_TO_DOMAINS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required variable: {0}")]
    Missing(String),
}

/// Succeeds iff `value` is present and non-empty, handing back the borrowed string.
pub fn validate_required<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, ConfigError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(name.to_string())),
    }
}

/// Deployment configuration, loaded once and never mutated.
///
/// Values that are absent at load time stay absent here; the request that
/// needs them reports `MissingConfiguration` instead of the process refusing
/// to start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_urls: Vec<String>,
    pub restrict_to_ips: Option<Vec<String>>,
    pub restrict_to_domains: Option<Vec<String>>,
}

impl GatewayConfig {
    /// Load the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            client_id: lookup(ENV_CLIENT_ID).filter(|v| !v.is_empty()),
            client_secret: lookup(ENV_CLIENT_SECRET).filter(|v| !v.is_empty()),
            redirect_urls: split_list(lookup(ENV_REDIRECT_URLS)).unwrap_or_default(),
            restrict_to_ips: split_list(lookup(ENV_RESTRICT_TO_IPS)),
            restrict_to_domains: split_list(lookup(ENV_RESTRICT_TO_DOMAINS)),
        };

        tracing::debug!(
            "Loaded gateway config: {} redirect URL(s), IP restriction: {}, domain restriction: {}",
            config.redirect_urls.len(),
            config.restrict_to_ips.is_some(),
            config.restrict_to_domains.is_some()
        );
        config
    }

    pub fn client_id(&self) -> Result<&str, ConfigError> {
        validate_required(self.client_id.as_deref(), ENV_CLIENT_ID)
    }

    pub fn client_secret(&self) -> Result<&str, ConfigError> {
        validate_required(self.client_secret.as_deref(), ENV_CLIENT_SECRET)
    }
}

// Empty entries produced by repeated spaces are dropped.
fn split_list(value: Option<String>) -> Option<Vec<String>> {
    let items: Vec<String> = value?.split_whitespace().map(str::to_string).collect();
    if items.is_empty() { None } else { Some(items) }
}
