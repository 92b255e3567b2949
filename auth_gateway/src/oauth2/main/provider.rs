use tokio::sync::Mutex;

use crate::config::GatewayConfig;
use crate::oauth2::errors::OAuth2Error;
use crate::oauth2::types::ClientParams;

use super::client::{OAuth2Client, OAuth2ClientFactory};

/// Caches the most recently built client handle.
///
/// Warm instances serving the same redirect URL reuse the cached handle and
/// its connection pool. A handle is reused only while its client id, client
/// secret and redirect URL all match what the current request needs; any
/// difference rebuilds it.
pub struct ClientProvider<F: OAuth2ClientFactory> {
    factory: F,
    cached: Mutex<Option<F::Client>>,
}

impl<F: OAuth2ClientFactory> ClientProvider<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            cached: Mutex::new(None),
        }
    }

    /// Obtain a client handle bound to `redirect_url`.
    ///
    /// The returned handle is a clone, so credentials set on it stay private
    /// to the caller.
    pub async fn obtain(
        &self,
        config: &GatewayConfig,
        redirect_url: &str,
    ) -> Result<F::Client, OAuth2Error> {
        let mut cached = self.cached.lock().await;

        if let Some(client) = cached.as_ref() {
            if params_match(client.params(), config, redirect_url) {
                tracing::debug!("OAuth2 client is already instantiated");
                return Ok(client.clone());
            }
            tracing::debug!("Cached OAuth2 client does not match, rebuilding");
        }

        let params = ClientParams {
            client_id: config.client_id()?.to_string(),
            client_secret: config.client_secret()?.to_string(),
            redirect_url: redirect_url.to_string(),
        };

        let client = self.factory.build(params);
        *cached = Some(client.clone());
        Ok(client)
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }
}

fn params_match(params: &ClientParams, config: &GatewayConfig, redirect_url: &str) -> bool {
    config.client_id.as_deref() == Some(params.client_id.as_str())
        && config.client_secret.as_deref() == Some(params.client_secret.as_str())
        && params.redirect_url == redirect_url
}
