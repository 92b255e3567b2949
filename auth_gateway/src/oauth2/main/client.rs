use async_trait::async_trait;

use crate::oauth2::errors::OAuth2Error;
use crate::oauth2::types::{
    AccessTokenResult, AuthUrlOptions, ClientParams, Credentials, GoogleUserInfo, TokenSet,
};

/// A handle on the provider's OAuth2 endpoints, bound to one set of
/// [`ClientParams`].
///
/// Handles are cheap to clone. Each clone carries its own credentials, so a
/// clone handed to one request never sees credentials set by another.
#[async_trait]
pub trait OAuth2Client: Clone + Send + Sync + 'static {
    fn params(&self) -> &ClientParams;

    /// Build the URL the user is sent to for consent.
    fn generate_auth_url(&self, options: &AuthUrlOptions) -> Result<String, OAuth2Error>;

    /// Exchange an authorization code for tokens.
    async fn get_token(&self, code: &str) -> Result<TokenSet, OAuth2Error>;

    fn set_credentials(&mut self, credentials: Credentials);

    fn credentials(&self) -> &Credentials;

    /// Return a usable access token, refreshing it with the stored refresh
    /// token when no usable access token is stored.
    async fn get_access_token(&mut self) -> Result<AccessTokenResult, OAuth2Error>;

    /// Fetch the profile of the account the stored access token belongs to.
    async fn get_user_info(&self) -> Result<GoogleUserInfo, OAuth2Error>;
}

/// Builds client handles for [`super::ClientProvider`].
pub trait OAuth2ClientFactory: Send + Sync + 'static {
    type Client: OAuth2Client;

    fn build(&self, params: ClientParams) -> Self::Client;
}
