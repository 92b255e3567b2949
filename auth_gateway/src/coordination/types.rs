use serde::Serialize;
use serde_json::{Map, Value};

use crate::oauth2::TokenSet;

/// Provider payload returned by a refresh; the `id_token` is what callers are after
pub type RefreshedToken = Map<String, Value>;

/// Result of a completed code exchange.
///
/// Both variants are successful responses; a denied login is how the caller
/// tells "wrong account" apart from "request failed".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenOutcome {
    Admitted(AdmittedTokens),
    Denied(DeniedLogin),
}

impl TokenOutcome {
    pub fn admitted(tokens: TokenSet, email: Option<String>) -> Self {
        Self::Admitted(AdmittedTokens {
            tokens,
            admitted: 1,
            email,
        })
    }

    pub fn denied(error_message: impl Into<String>) -> Self {
        Self::Denied(DeniedLogin {
            admitted: 0,
            error_message: error_message.into(),
        })
    }

    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdmittedTokens {
    #[serde(flatten)]
    pub tokens: TokenSet,
    pub admitted: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeniedLogin {
    pub admitted: u8,
    pub error_message: String,
}
