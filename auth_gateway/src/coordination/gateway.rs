use crate::admission::resolve_redirect_url;
use crate::config::GatewayConfig;
use crate::oauth2::{ClientProvider, GoogleClientFactory, OAuth2ClientFactory, OAuth2Error};

use super::errors::GatewayError;
use super::request::InboundRequest;

/// State shared by every handler invocation: the deployment configuration and
/// the client cache.
pub struct AuthGateway<F: OAuth2ClientFactory> {
    config: GatewayConfig,
    clients: ClientProvider<F>,
}

impl AuthGateway<GoogleClientFactory> {
    /// Gateway talking to the provider endpoints configured in the environment
    pub fn google(config: GatewayConfig) -> Result<Self, OAuth2Error> {
        Ok(Self::new(config, GoogleClientFactory::new()?))
    }
}

impl<F: OAuth2ClientFactory> AuthGateway<F> {
    pub fn new(config: GatewayConfig, factory: F) -> Self {
        Self {
            config,
            clients: ClientProvider::new(factory),
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn clients(&self) -> &ClientProvider<F> {
        &self.clients
    }

    pub(crate) fn redirect_url_for<'a>(
        &'a self,
        request: &InboundRequest,
    ) -> Result<&'a str, GatewayError> {
        Ok(resolve_redirect_url(
            &self.config.redirect_urls,
            request.origin.as_deref(),
        )?)
    }

    pub(crate) async fn client_for(&self, redirect_url: &str) -> Result<F::Client, GatewayError> {
        Ok(self.clients.obtain(&self.config, redirect_url).await?)
    }
}
