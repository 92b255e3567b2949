use std::sync::Arc;

use axum::{Json, extract::State};
use http::StatusCode;

use auth_gateway::{
    AuthGateway, InboundRequest, OAuth2ClientFactory, RefreshedToken, TokenOutcome,
    generate_auth_url_core, generate_token_core, refresh_token_core,
};

use super::error::IntoResponseError;
use super::extractor::RequestMeta;

pub(super) type GatewayState<F> = State<Arc<AuthGateway<F>>>;

fn inbound(meta: RequestMeta, body: Option<String>) -> InboundRequest {
    InboundRequest::new(
        meta.origin,
        meta.source_ip,
        body.filter(|b| !b.is_empty()),
    )
}

pub(super) async fn generate_auth_url<F: OAuth2ClientFactory>(
    State(gateway): GatewayState<F>,
    meta: RequestMeta,
) -> Result<String, (StatusCode, String)> {
    generate_auth_url_core(&gateway, &inbound(meta, None))
        .await
        .into_response_error()
}

pub(super) async fn generate_token<F: OAuth2ClientFactory>(
    State(gateway): GatewayState<F>,
    meta: RequestMeta,
    body: String,
) -> Result<Json<TokenOutcome>, (StatusCode, String)> {
    let outcome = generate_token_core(&gateway, &inbound(meta, Some(body)))
        .await
        .into_response_error()?;
    Ok(Json(outcome))
}

pub(super) async fn refresh_token<F: OAuth2ClientFactory>(
    State(gateway): GatewayState<F>,
    meta: RequestMeta,
    body: String,
) -> Result<Json<RefreshedToken>, (StatusCode, String)> {
    let data = refresh_token_core(&gateway, &inbound(meta, Some(body)))
        .await
        .into_response_error()?;
    Ok(Json(data))
}
