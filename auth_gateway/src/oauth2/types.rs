use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parameters an OAuth2 client handle is bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientParams {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
}

/// `offline` makes the provider issue a refresh token alongside the access token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessType {
    Online,
    Offline,
}

impl AccessType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUrlOptions {
    pub access_type: AccessType,
    pub scope: Vec<String>,
}

/// Tokens produced by exchanging an authorization code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Milliseconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// Credentials stored on a client handle. Every field is optional so a handle
/// can hold only a refresh token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub expiry_date: Option<i64>,
    pub id_token: Option<String>,
}

impl Credentials {
    pub fn from_refresh_token(refresh_token: impl Into<String>) -> Self {
        Self {
            refresh_token: Some(refresh_token.into()),
            ..Default::default()
        }
    }

    /// An access token is usable if present and not about to expire.
    /// A token without an expiry date is taken at face value.
    pub(crate) fn has_usable_access_token(&self, threshold_millis: i64) -> bool {
        match (&self.access_token, self.expiry_date) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(_), Some(expiry)) => expiry > Utc::now().timestamp_millis() + threshold_millis,
        }
    }
}

impl From<&TokenSet> for Credentials {
    fn from(tokens: &TokenSet) -> Self {
        Self {
            access_token: Some(tokens.access_token.clone()),
            refresh_token: tokens.refresh_token.clone(),
            expiry_date: tokens.expiry_date,
            id_token: tokens.id_token.clone(),
        }
    }
}

/// Result of asking a client for an access token.
///
/// `data` carries the provider's raw refresh response and is `None` when the
/// stored access token was reused without contacting the provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessTokenResult {
    pub token: Option<String>,
    pub data: Option<Map<String, Value>>,
}

// The user data we'll get back from Google for the userinfo.email scope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleUserInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub verified_email: Option<bool>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub hd: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct OidcTokenResponse {
    pub(crate) access_token: String,
    #[serde(default)]
    pub(crate) token_type: Option<String>,
    #[serde(default)]
    pub(crate) expires_in: Option<i64>,
    #[serde(default)]
    pub(crate) refresh_token: Option<String>,
    #[serde(default)]
    pub(crate) scope: Option<String>,
    #[serde(default)]
    pub(crate) id_token: Option<String>,
}

impl From<OidcTokenResponse> for TokenSet {
    fn from(response: OidcTokenResponse) -> Self {
        Self {
            expiry_date: response
                .expires_in
                .map(|secs| Utc::now().timestamp_millis() + secs * 1000),
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            id_token: response.id_token,
            token_type: response.token_type,
            scope: response.scope,
        }
    }
}
