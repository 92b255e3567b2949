mod config;
mod errors;
mod main;
mod types;

pub use config::{OAUTH2_USERINFO_EMAIL_SCOPE, OAuth2Endpoints};
pub use errors::OAuth2Error;
pub use main::{
    ClientProvider, GoogleClientFactory, GoogleOAuth2Client, OAuth2Client, OAuth2ClientFactory,
};
pub use types::{
    AccessTokenResult, AccessType, AuthUrlOptions, ClientParams, Credentials, GoogleUserInfo,
    TokenSet,
};

pub(crate) use types::OidcTokenResponse;
