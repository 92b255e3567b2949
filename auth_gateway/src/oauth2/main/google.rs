use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use url::Url;

use crate::oauth2::OidcTokenResponse;
use crate::oauth2::config::{EAGER_REFRESH_THRESHOLD_MILLIS, OAuth2Endpoints, get_client};
use crate::oauth2::errors::OAuth2Error;
use crate::oauth2::types::{
    AccessTokenResult, AuthUrlOptions, ClientParams, Credentials, GoogleUserInfo, TokenSet,
};

use super::client::{OAuth2Client, OAuth2ClientFactory};

/// OAuth2 client for Google's authorization, token and userinfo endpoints
#[derive(Debug, Clone)]
pub struct GoogleOAuth2Client {
    params: ClientParams,
    endpoints: Arc<OAuth2Endpoints>,
    http: reqwest::Client,
    credentials: Credentials,
}

impl GoogleOAuth2Client {
    async fn post_token_form(
        &self,
        form: &[(&str, &str)],
    ) -> Result<(reqwest::StatusCode, String), reqwest::Error> {
        let response = self
            .http
            .post(self.endpoints.token_url.as_str())
            .form(form)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }
}

#[async_trait]
impl OAuth2Client for GoogleOAuth2Client {
    fn params(&self) -> &ClientParams {
        &self.params
    }

    fn generate_auth_url(&self, options: &AuthUrlOptions) -> Result<String, OAuth2Error> {
        let scope = options.scope.join(" ");
        let url = Url::parse_with_params(
            &self.endpoints.auth_url,
            &[
                ("access_type", options.access_type.as_str()),
                ("scope", scope.as_str()),
                ("response_type", "code"),
                ("client_id", self.params.client_id.as_str()),
                ("redirect_uri", self.params.redirect_url.as_str()),
            ],
        )
        .map_err(|e| OAuth2Error::AuthUrl(e.to_string()))?;

        tracing::debug!("Auth URL: {:#?}", url.as_str());
        Ok(url.into())
    }

    async fn get_token(&self, code: &str) -> Result<TokenSet, OAuth2Error> {
        let (status, body) = self
            .post_token_form(&[
                ("code", code),
                ("client_id", self.params.client_id.as_str()),
                ("client_secret", self.params.client_secret.as_str()),
                ("redirect_uri", self.params.redirect_url.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .await
            .map_err(|e| OAuth2Error::TokenExchange(e.to_string()))?;

        if !status.is_success() {
            tracing::error!("Token Exchange Response: {} {}", status, body);
            return Err(OAuth2Error::TokenExchange(status.to_string()));
        }

        let response: OidcTokenResponse = serde_json::from_str(&body)
            .map_err(|e| OAuth2Error::TokenExchange(e.to_string()))?;
        tracing::debug!("Token response: {:#?}", response);

        Ok(response.into())
    }

    fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = credentials;
    }

    fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    async fn get_access_token(&mut self) -> Result<AccessTokenResult, OAuth2Error> {
        if self
            .credentials
            .has_usable_access_token(EAGER_REFRESH_THRESHOLD_MILLIS)
        {
            tracing::debug!("Stored access token is still valid, not refreshing");
            return Ok(AccessTokenResult {
                token: self.credentials.access_token.clone(),
                data: None,
            });
        }

        let refresh_token = self
            .credentials
            .refresh_token
            .clone()
            .ok_or(OAuth2Error::NoRefreshToken)?;

        let (status, body) = self
            .post_token_form(&[
                ("refresh_token", refresh_token.as_str()),
                ("client_id", self.params.client_id.as_str()),
                ("client_secret", self.params.client_secret.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .await
            .map_err(|e| OAuth2Error::TokenRefresh(e.to_string()))?;

        if !status.is_success() {
            tracing::error!("Token Refresh Response: {} {}", status, body);
            return Err(OAuth2Error::TokenRefresh(status.to_string()));
        }

        let data = match serde_json::from_str::<Value>(&body) {
            Ok(Value::Object(map)) if !map.is_empty() => Some(map),
            Ok(other) => {
                tracing::debug!("Refresh response carried no data: {:#?}", other);
                None
            }
            Err(e) => return Err(OAuth2Error::TokenRefresh(e.to_string())),
        };

        if let Some(map) = &data {
            apply_refresh_response(&mut self.credentials, map);
        }

        Ok(AccessTokenResult {
            token: self.credentials.access_token.clone(),
            data,
        })
    }

    async fn get_user_info(&self) -> Result<GoogleUserInfo, OAuth2Error> {
        let access_token = self
            .credentials
            .access_token
            .as_deref()
            .ok_or_else(|| OAuth2Error::FetchUserInfo("No access token is set".to_string()))?;

        let response = self
            .http
            .get(self.endpoints.userinfo_url.as_str())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| OAuth2Error::FetchUserInfo(e.to_string()))?;

        if !response.status().is_success() {
            tracing::error!("Userinfo Response: {:#?}", response);
            return Err(OAuth2Error::FetchUserInfo(response.status().to_string()));
        }

        let user_info: GoogleUserInfo = response
            .json()
            .await
            .map_err(|e| OAuth2Error::FetchUserInfo(e.to_string()))?;

        tracing::debug!("User data: {:#?}", user_info);
        Ok(user_info)
    }
}

fn apply_refresh_response(credentials: &mut Credentials, data: &Map<String, Value>) {
    if let Some(token) = data.get("access_token").and_then(Value::as_str) {
        credentials.access_token = Some(token.to_string());
    }
    if let Some(secs) = data.get("expires_in").and_then(Value::as_i64) {
        credentials.expiry_date = Some(Utc::now().timestamp_millis() + secs * 1000);
    }
    if let Some(id_token) = data.get("id_token").and_then(Value::as_str) {
        credentials.id_token = Some(id_token.to_string());
    }
}

/// Builds [`GoogleOAuth2Client`] handles that share one HTTP connection pool
#[derive(Debug, Clone)]
pub struct GoogleClientFactory {
    http: reqwest::Client,
    endpoints: Arc<OAuth2Endpoints>,
}

impl GoogleClientFactory {
    /// Factory for the endpoints configured in the environment
    pub fn new() -> Result<Self, OAuth2Error> {
        Self::with_endpoints(OAuth2Endpoints::default())
    }

    pub fn with_endpoints(endpoints: OAuth2Endpoints) -> Result<Self, OAuth2Error> {
        Ok(Self {
            http: get_client()?,
            endpoints: Arc::new(endpoints),
        })
    }
}

impl OAuth2ClientFactory for GoogleClientFactory {
    type Client = GoogleOAuth2Client;

    fn build(&self, params: ClientParams) -> GoogleOAuth2Client {
        tracing::debug!(
            "Building Google OAuth2 client for redirect URL {}",
            params.redirect_url
        );
        GoogleOAuth2Client {
            params,
            endpoints: Arc::clone(&self.endpoints),
            http: self.http.clone(),
            credentials: Credentials::default(),
        }
    }
}
