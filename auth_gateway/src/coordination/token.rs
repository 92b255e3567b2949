use crate::admission::check_account_domain;
use crate::oauth2::{Credentials, OAuth2Client, OAuth2ClientFactory};

use super::errors::GatewayError;
use super::gateway::AuthGateway;
use super::request::{InboundRequest, RequestBody};
use super::types::TokenOutcome;

/// Exchange an authorization code for tokens and decide whether the account
/// behind them may log in.
///
/// An account outside the allowed domains is not an error: the outcome is
/// `TokenOutcome::Denied`, carried by a successful response.
pub async fn generate_token_core<F: OAuth2ClientFactory>(
    gateway: &AuthGateway<F>,
    request: &InboundRequest,
) -> Result<TokenOutcome, GatewayError> {
    tracing::info!(
        "Received generatetoken request: origin={:?}",
        request.origin
    );

    generate_token(gateway, request)
        .await
        .map_err(GatewayError::log)
}

async fn generate_token<F: OAuth2ClientFactory>(
    gateway: &AuthGateway<F>,
    request: &InboundRequest,
) -> Result<TokenOutcome, GatewayError> {
    let body = RequestBody::parse(request.body.as_deref())?;

    let redirect_url = gateway.redirect_url_for(request)?;
    let mut client = gateway.client_for(redirect_url).await?;

    let code = body.require_field("code")?;
    tracing::debug!("generatetoken: code provided");

    let tokens = client.get_token(code).await?;
    client.set_credentials(Credentials::from(&tokens));

    let user_info = client.get_user_info().await?;
    let domains = gateway.config().restrict_to_domains.as_deref();

    match check_account_domain(domains, user_info.email.as_deref()) {
        Ok(()) => {
            tracing::debug!("Login admitted: {:?}", user_info.email);
            Ok(TokenOutcome::admitted(tokens, user_info.email))
        }
        Err(e) => {
            GatewayError::from(e).log();
            Ok(TokenOutcome::denied(denial_message(domains)))
        }
    }
}

fn denial_message(domains: Option<&[String]>) -> String {
    let domains = domains.map(|d| d.join(" or ")).unwrap_or_default();
    format!(
        "Access denied. Please log out of your Google account in this browser and log back in using your {domains} account."
    )
}
