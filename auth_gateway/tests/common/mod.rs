pub mod mock_google;

pub use mock_google::MockGoogle;

use auth_gateway::{AuthGateway, GatewayConfig, GoogleClientFactory, InboundRequest};

pub const APP_ORIGIN: &str = "https://app.example.com";
pub const APP_REDIRECT_URL: &str = "https://app.example.com/login";

/// Gateway wired to `provider`, with an optional domain restriction
pub fn gateway_for(
    provider: &MockGoogle,
    restrict_to_domains: Option<&str>,
) -> AuthGateway<GoogleClientFactory> {
    let config = GatewayConfig::from_lookup(|name| match name {
        "CLIENT_ID" => Some("integration-client-id".to_string()),
        "CLIENT_SECRET" => Some("integration-client-secret".to_string()),
        "REDIRECT_URLS" => Some(format!(
            "{APP_REDIRECT_URL} https://admin.example.com/callback"
        )),
        "RESTRICT_TO_DOMAINS" => restrict_to_domains.map(str::to_string),
        _ => None,
    });
    let factory = GoogleClientFactory::with_endpoints(provider.endpoints())
        .expect("reqwest client should build");
    AuthGateway::new(config, factory)
}

pub fn request(body: Option<&str>) -> InboundRequest {
    InboundRequest::new(
        Some(APP_ORIGIN.to_string()),
        Some("198.51.100.20".to_string()),
        body.map(str::to_string),
    )
}
