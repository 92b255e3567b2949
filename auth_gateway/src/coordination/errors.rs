//! Error types surfaced at the handler boundary

use thiserror::Error;

use crate::admission::AdmissionError;
use crate::config::ConfigError;
use crate::oauth2::OAuth2Error;

/// Every way a gateway request can fail.
///
/// `DomainNotAllowed` is the one soft failure: the token handler turns it
/// into a successful response carrying `admitted = 0`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// A required server-side setting is absent
    #[error("Missing required configuration: {0}")]
    MissingConfiguration(String),

    /// The request origin matches no configured redirect URL
    #[error("Origin does not match supplied redirect URLs.")]
    OriginNotAllowed(Option<String>),

    /// The source IP is not a well-formed address
    #[error("Invalid IP")]
    InvalidIp(Option<String>),

    /// The source IP is well-formed but not on the allow-list
    #[error("IP not allowed")]
    IpNotAllowed(String),

    /// A required request field is absent
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// The request body is not a JSON object
    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    /// The authorization code exchange failed
    #[error("Token exchange failed: {0}")]
    ExchangeFailed(String),

    /// The refresh call failed or returned no usable data
    #[error("Token refresh failed: {0}")]
    RefreshFailed(String),

    /// The profile of the authenticated account could not be fetched
    #[error("Fetch user info failed: {0}")]
    UserInfoFailed(String),

    /// The authenticated account is outside every allowed domain
    #[error("The provided account is not in the domain: {0}")]
    DomainNotAllowed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Log the error and return self
    pub fn log(self) -> Self {
        match &self {
            Self::MissingConfiguration(name) => {
                tracing::error!("Missing required configuration: {}", name)
            }
            Self::OriginNotAllowed(origin) => {
                tracing::error!("Origin {:?} does not match any redirect URL", origin)
            }
            Self::InvalidIp(ip) => tracing::error!("Invalid IP: {:?}", ip),
            Self::IpNotAllowed(ip) => tracing::error!("IP not allowed: {}", ip),
            Self::MissingParameter(name) => tracing::error!("Missing required parameter: {}", name),
            Self::InvalidRequestBody(msg) => tracing::error!("Invalid request body: {}", msg),
            Self::ExchangeFailed(msg) => tracing::error!("Token exchange failed: {}", msg),
            Self::RefreshFailed(msg) => tracing::error!("Token refresh failed: {}", msg),
            Self::UserInfoFailed(msg) => tracing::error!("Fetch user info failed: {}", msg),
            Self::DomainNotAllowed(account) => {
                tracing::debug!("Account {} is not in an allowed domain", account)
            }
            Self::Internal(msg) => tracing::error!("Internal error: {}", msg),
        }
        self
    }
}

impl From<ConfigError> for GatewayError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Missing(name) => Self::MissingConfiguration(name),
        }
    }
}

impl From<AdmissionError> for GatewayError {
    fn from(err: AdmissionError) -> Self {
        match err {
            AdmissionError::OriginNotAllowed(origin) => Self::OriginNotAllowed(origin),
            AdmissionError::InvalidIp(ip) => Self::InvalidIp(ip),
            AdmissionError::IpNotAllowed(ip) => Self::IpNotAllowed(ip),
            AdmissionError::MissingAccount => Self::MissingParameter("account".to_string()),
            AdmissionError::DomainNotAllowed(account) => Self::DomainNotAllowed(account),
            AdmissionError::Config(e) => e.into(),
        }
    }
}

impl From<OAuth2Error> for GatewayError {
    fn from(err: OAuth2Error) -> Self {
        match err {
            OAuth2Error::Config(e) => e.into(),
            OAuth2Error::TokenExchange(msg) => Self::ExchangeFailed(msg),
            OAuth2Error::TokenRefresh(msg) => Self::RefreshFailed(msg),
            OAuth2Error::NoRefreshToken => {
                Self::RefreshFailed("No refresh token is set".to_string())
            }
            OAuth2Error::FetchUserInfo(msg) => Self::UserInfoFailed(msg),
            OAuth2Error::HttpClient(msg) | OAuth2Error::AuthUrl(msg) => Self::Internal(msg),
        }
    }
}
