//! Provider stand-in for router tests

use async_trait::async_trait;
use serde_json::{Value, json};

use auth_gateway::{
    AccessTokenResult, AuthUrlOptions, ClientParams, Credentials, GatewayConfig, GoogleUserInfo,
    OAuth2Client, OAuth2ClientFactory, OAuth2Error, TokenSet,
};

pub(crate) fn test_config() -> GatewayConfig {
    GatewayConfig {
        client_id: Some("router-client-id".to_string()),
        client_secret: Some("router-client-secret".to_string()),
        redirect_urls: vec!["https://app.example.com/login".to_string()],
        ..Default::default()
    }
}

/// Builds clients that answer every provider call successfully
#[derive(Clone)]
pub(crate) struct StubFactory;

impl OAuth2ClientFactory for StubFactory {
    type Client = StubClient;

    fn build(&self, params: ClientParams) -> StubClient {
        StubClient {
            params,
            credentials: Credentials::default(),
        }
    }
}

#[derive(Clone)]
pub(crate) struct StubClient {
    params: ClientParams,
    credentials: Credentials,
}

#[async_trait]
impl OAuth2Client for StubClient {
    fn params(&self) -> &ClientParams {
        &self.params
    }

    fn generate_auth_url(&self, options: &AuthUrlOptions) -> Result<String, OAuth2Error> {
        Ok(format!(
            "https://accounts.example.com/auth?access_type={}&redirect_uri={}",
            options.access_type.as_str(),
            self.params.redirect_url
        ))
    }

    async fn get_token(&self, _code: &str) -> Result<TokenSet, OAuth2Error> {
        Ok(TokenSet {
            access_token: "stub-access-token".to_string(),
            refresh_token: Some("stub-refresh-token".to_string()),
            expiry_date: Some(1_700_000_000_000),
            ..Default::default()
        })
    }

    fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = credentials;
    }

    fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    async fn get_access_token(&mut self) -> Result<AccessTokenResult, OAuth2Error> {
        let Value::Object(data) = json!({
            "access_token": "stub-refreshed-token",
            "expires_in": 3599,
            "id_token": "stub.id.token"
        }) else {
            unreachable!("json! object literal");
        };
        Ok(AccessTokenResult {
            token: Some("stub-refreshed-token".to_string()),
            data: Some(data),
        })
    }

    async fn get_user_info(&self) -> Result<GoogleUserInfo, OAuth2Error> {
        Ok(GoogleUserInfo {
            email: Some("user@example.com".to_string()),
            ..Default::default()
        })
    }
}
