//! Router for the gateway endpoints

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use auth_gateway::{AuthGateway, OAuth2ClientFactory};

use super::handlers::{generate_auth_url, generate_token, refresh_token};

/// Create a router for the three gateway endpoints
///
/// The endpoints are relative to wherever the router is nested:
/// - GET  /generateauthurl
/// - POST /generatetoken
/// - POST /refreshtoken
pub fn gateway_router<F: OAuth2ClientFactory>(gateway: AuthGateway<F>) -> Router {
    gateway_router_no_trace(gateway).layer(
        TraceLayer::new_for_http()
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(true),
            )
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as `gateway_router()` but without the HTTP tracing middleware
pub fn gateway_router_no_trace<F: OAuth2ClientFactory>(gateway: AuthGateway<F>) -> Router {
    Router::new()
        .route("/generateauthurl", get(generate_auth_url::<F>))
        .route("/generatetoken", post(generate_token::<F>))
        .route("/refreshtoken", post(refresh_token::<F>))
        .with_state(Arc::new(gateway))
}
