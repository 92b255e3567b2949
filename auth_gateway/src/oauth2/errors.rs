use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OAuth2Error {
    #[error("Http client error: {0}")]
    HttpClient(String),

    #[error("Authorization URL error: {0}")]
    AuthUrl(String),

    #[error("Token exchange error: {0}")]
    TokenExchange(String),

    #[error("Token refresh error: {0}")]
    TokenRefresh(String),

    #[error("No refresh token is set")]
    NoRefreshToken,

    #[error("Fetch user info error: {0}")]
    FetchUserInfo(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
