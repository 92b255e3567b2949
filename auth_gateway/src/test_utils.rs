//! Test doubles for the OAuth2 client seam
//!
//! `MockFactory` hands out `MockClient` handles whose provider responses are
//! scripted through `MockBehavior`. Every build is counted and every set of
//! credentials presented to the refresh call is recorded, so tests can assert
//! on cache reuse and on exactly what the handlers stored.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::config::GatewayConfig;
use crate::coordination::InboundRequest;
use crate::oauth2::{
    AccessTokenResult, AuthUrlOptions, ClientParams, Credentials, GoogleUserInfo, OAuth2Client,
    OAuth2ClientFactory, OAuth2Error, TokenSet,
};

/// Complete configuration serving two web clients, with no restrictions
pub(crate) fn test_config() -> GatewayConfig {
    GatewayConfig {
        client_id: Some("test-client-id".to_string()),
        client_secret: Some("test-client-secret".to_string()),
        redirect_urls: vec![
            "https://app.example.com/login".to_string(),
            "https://admin.example.com/callback".to_string(),
        ],
        restrict_to_ips: None,
        restrict_to_domains: None,
    }
}

pub(crate) fn test_request(origin: Option<&str>, body: Option<&str>) -> InboundRequest {
    InboundRequest::new(
        origin.map(str::to_string),
        Some("203.0.113.7".to_string()),
        body.map(str::to_string),
    )
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MockBehavior {
    /// `None` makes the code exchange fail
    pub(crate) token: Option<TokenSet>,
    pub(crate) email: Option<String>,
    pub(crate) user_info_fails: bool,
    /// Raw refresh payload; `None` means the provider sent back no data
    pub(crate) refresh_data: Option<Map<String, Value>>,
    pub(crate) refresh_fails: bool,
}

#[derive(Clone, Default)]
pub(crate) struct MockFactory {
    behavior: Arc<MockBehavior>,
    builds: Arc<AtomicUsize>,
    refresh_credentials: Arc<Mutex<Vec<Credentials>>>,
}

impl MockFactory {
    pub(crate) fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior: Arc::new(behavior),
            ..Default::default()
        }
    }

    pub(crate) fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    /// Credentials each refresh call was made with, oldest first
    pub(crate) fn refresh_credentials(&self) -> Vec<Credentials> {
        self.refresh_credentials
            .lock()
            .expect("recorder lock")
            .clone()
    }
}

impl OAuth2ClientFactory for MockFactory {
    type Client = MockClient;

    fn build(&self, params: ClientParams) -> MockClient {
        let build_id = self.builds.fetch_add(1, Ordering::SeqCst) + 1;
        MockClient {
            params,
            behavior: Arc::clone(&self.behavior),
            credentials: Credentials::default(),
            refresh_credentials: Arc::clone(&self.refresh_credentials),
            build_id,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct MockClient {
    params: ClientParams,
    behavior: Arc<MockBehavior>,
    credentials: Credentials,
    refresh_credentials: Arc<Mutex<Vec<Credentials>>>,
    pub(crate) build_id: usize,
}

#[async_trait]
impl OAuth2Client for MockClient {
    fn params(&self) -> &ClientParams {
        &self.params
    }

    fn generate_auth_url(&self, options: &AuthUrlOptions) -> Result<String, OAuth2Error> {
        Ok(format!(
            "https://accounts.example.com/auth?access_type={}&scope={}&client_id={}&redirect_uri={}",
            options.access_type.as_str(),
            options.scope.join(" "),
            self.params.client_id,
            self.params.redirect_url
        ))
    }

    async fn get_token(&self, code: &str) -> Result<TokenSet, OAuth2Error> {
        self.behavior
            .token
            .clone()
            .ok_or_else(|| OAuth2Error::TokenExchange(format!("invalid_grant for {code}")))
    }

    fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = credentials;
    }

    fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    async fn get_access_token(&mut self) -> Result<AccessTokenResult, OAuth2Error> {
        self.refresh_credentials
            .lock()
            .expect("recorder lock")
            .push(self.credentials.clone());

        if self.behavior.refresh_fails {
            return Err(OAuth2Error::TokenRefresh("400 Bad Request".to_string()));
        }
        if self.credentials.access_token.is_some() {
            return Ok(AccessTokenResult {
                token: self.credentials.access_token.clone(),
                data: None,
            });
        }
        if self.credentials.refresh_token.is_none() {
            return Err(OAuth2Error::NoRefreshToken);
        }

        let data = self.behavior.refresh_data.clone();
        let token = data
            .as_ref()
            .and_then(|d| d.get("access_token"))
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(AccessTokenResult { token, data })
    }

    async fn get_user_info(&self) -> Result<GoogleUserInfo, OAuth2Error> {
        if self.credentials.access_token.is_none() {
            return Err(OAuth2Error::FetchUserInfo(
                "No access token is set".to_string(),
            ));
        }
        if self.behavior.user_info_fails {
            return Err(OAuth2Error::FetchUserInfo("401 Unauthorized".to_string()));
        }
        Ok(GoogleUserInfo {
            id: Some("1234567890".to_string()),
            email: self.behavior.email.clone(),
            verified_email: Some(true),
            ..Default::default()
        })
    }
}
