use crate::admission::check_source_ip;
use crate::oauth2::{
    AccessType, AuthUrlOptions, OAUTH2_USERINFO_EMAIL_SCOPE, OAuth2Client, OAuth2ClientFactory,
};

use super::errors::GatewayError;
use super::gateway::AuthGateway;
use super::request::InboundRequest;

/// Build the authorization URL for a "Login with Google" button.
///
/// Offline access is requested so the code exchange also yields a refresh
/// token, and the scope is limited to the account's email address.
pub async fn generate_auth_url_core<F: OAuth2ClientFactory>(
    gateway: &AuthGateway<F>,
    request: &InboundRequest,
) -> Result<String, GatewayError> {
    tracing::info!(
        "Received generateauthurl request: origin={:?} source_ip={:?}",
        request.origin,
        request.source_ip
    );

    generate_auth_url(gateway, request)
        .await
        .map_err(GatewayError::log)
}

async fn generate_auth_url<F: OAuth2ClientFactory>(
    gateway: &AuthGateway<F>,
    request: &InboundRequest,
) -> Result<String, GatewayError> {
    let redirect_url = gateway.redirect_url_for(request)?;

    check_source_ip(
        gateway.config().restrict_to_ips.as_deref(),
        request.source_ip.as_deref(),
    )?;

    let client = gateway.client_for(redirect_url).await?;

    let auth_url = client.generate_auth_url(&AuthUrlOptions {
        access_type: AccessType::Offline,
        scope: vec![OAUTH2_USERINFO_EMAIL_SCOPE.to_string()],
    })?;

    Ok(auth_url)
}
