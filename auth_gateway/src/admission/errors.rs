use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdmissionError {
    #[error("Origin does not match supplied redirect URLs: {0:?}")]
    OriginNotAllowed(Option<String>),

    #[error("Invalid IP: {0:?}")]
    InvalidIp(Option<String>),

    #[error("IP not allowed: {0}")]
    IpNotAllowed(String),

    #[error("Account is a required parameter")]
    MissingAccount,

    #[error("The provided account is not in the domain: {0}")]
    DomainNotAllowed(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
