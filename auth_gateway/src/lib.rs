//! Server side of a "Login with Google" flow for browser clients.
//!
//! Three operations back the flow:
//!
//! - [`generate_auth_url_core`] builds the provider authorization URL for the
//!   caller's origin.
//! - [`generate_token_core`] exchanges an authorization code for tokens and
//!   admits or denies the account by its email domain.
//! - [`refresh_token_core`] trades a refresh token for a fresh token payload.
//!
//! Each operation takes an [`AuthGateway`], which owns the deployment
//! configuration and a cached OAuth2 client, plus an [`InboundRequest`]
//! describing the caller. HTTP framing is left to the embedding service.

mod admission;
mod config;
mod coordination;
mod oauth2;

#[cfg(test)]
mod test_utils;

pub use admission::{
    AdmissionError, check_account_domain, check_source_ip, resolve_redirect_url,
};
pub use config::{
    ConfigError, ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_REDIRECT_URLS, ENV_RESTRICT_TO_DOMAINS,
    ENV_RESTRICT_TO_IPS, GatewayConfig, validate_required,
};
pub use coordination::{
    AdmittedTokens, AuthGateway, DeniedLogin, GatewayError, InboundRequest, RefreshedToken,
    TokenOutcome, generate_auth_url_core, generate_token_core, refresh_token_core,
};
pub use oauth2::{
    AccessTokenResult, AccessType, AuthUrlOptions, ClientParams, ClientProvider, Credentials,
    GoogleClientFactory, GoogleOAuth2Client, GoogleUserInfo, OAUTH2_USERINFO_EMAIL_SCOPE,
    OAuth2Client, OAuth2ClientFactory, OAuth2Endpoints, OAuth2Error, TokenSet,
};
