use std::{env, sync::LazyLock, time::Duration};

use super::errors::OAuth2Error;

/// Scope granting read access to the signed-in account's email address
pub const OAUTH2_USERINFO_EMAIL_SCOPE: &str = "https://www.googleapis.com/auth/userinfo.email";

pub(super) static OAUTH2_AUTH_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("OAUTH2_AUTH_URL")
        .ok()
        .unwrap_or("https://accounts.google.com/o/oauth2/v2/auth".to_string())
});

pub(super) static OAUTH2_TOKEN_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("OAUTH2_TOKEN_URL")
        .ok()
        .unwrap_or("https://oauth2.googleapis.com/token".to_string())
});

pub(super) static OAUTH2_USERINFO_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("OAUTH2_USERINFO_URL")
        .ok()
        .unwrap_or("https://www.googleapis.com/oauth2/v2/userinfo".to_string())
});

/// An access token this close to expiry is refreshed rather than reused
pub(super) const EAGER_REFRESH_THRESHOLD_MILLIS: i64 = 5 * 60 * 1000;

/// Provider endpoints used by the Google client.
///
/// `Default` reads `OAUTH2_AUTH_URL`, `OAUTH2_TOKEN_URL` and `OAUTH2_USERINFO_URL`,
/// falling back to Google's public endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuth2Endpoints {
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

impl Default for OAuth2Endpoints {
    fn default() -> Self {
        Self {
            auth_url: OAUTH2_AUTH_URL.clone(),
            token_url: OAUTH2_TOKEN_URL.clone(),
            userinfo_url: OAUTH2_USERINFO_URL.clone(),
        }
    }
}

/// Creates the HTTP client shared by every OAuth2 client handle.
///
/// - `timeout`: 30 seconds, so a stalled provider call fails the request
///   instead of hanging it.
/// - `pool_idle_timeout` / `pool_max_idle_per_host`: reqwest defaults, made
///   explicit. Warm instances keep their connections to the provider.
pub(super) fn get_client() -> Result<reqwest::Client, OAuth2Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(32)
        .build()
        .map_err(|e| OAuth2Error::HttpClient(e.to_string()))
}
