use crate::oauth2::{Credentials, OAuth2Client, OAuth2ClientFactory};

use super::errors::GatewayError;
use super::gateway::AuthGateway;
use super::request::{InboundRequest, RequestBody};
use super::types::RefreshedToken;

/// Refresh an access token from the caller's refresh token.
///
/// `accessToken` must be present in the body but is never used: storing it
/// would let the client hand it straight back instead of refreshing.
pub async fn refresh_token_core<F: OAuth2ClientFactory>(
    gateway: &AuthGateway<F>,
    request: &InboundRequest,
) -> Result<RefreshedToken, GatewayError> {
    tracing::info!("Received refreshtoken request: origin={:?}", request.origin);

    refresh_token(gateway, request)
        .await
        .map_err(GatewayError::log)
}

async fn refresh_token<F: OAuth2ClientFactory>(
    gateway: &AuthGateway<F>,
    request: &InboundRequest,
) -> Result<RefreshedToken, GatewayError> {
    let body = RequestBody::parse(request.body.as_deref())?;

    let redirect_url = gateway.redirect_url_for(request)?;
    let mut client = gateway.client_for(redirect_url).await?;

    let fields = body.require(&["refreshToken", "accessToken"])?;
    tracing::debug!("refreshtoken: refreshToken and accessToken provided");

    client.set_credentials(Credentials::from_refresh_token(fields[0]));

    let result = client.get_access_token().await?;
    let data = result.data.ok_or_else(|| {
        GatewayError::RefreshFailed("The refresh token returned contains no data.".to_string())
    })?;

    tracing::debug!("refreshtoken: returned keys {:?}", data.keys());
    Ok(data)
}
