//! In-process stand-in for Google's token and userinfo endpoints
//!
//! Each test starts its own server on an ephemeral port, so tests never share
//! state and can run in parallel.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Form, Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use auth_gateway::OAuth2Endpoints;

pub const VALID_CODE: &str = "valid-code";
pub const ISSUED_ACCESS_TOKEN: &str = "mock-access-token";
pub const ISSUED_REFRESH_TOKEN: &str = "mock-refresh-token";
pub const REFRESHED_ACCESS_TOKEN: &str = "mock-refreshed-access-token";
pub const REFRESHED_ID_TOKEN: &str = "mock.refreshed.id-token";
/// Refresh token for which the provider answers with an empty object
pub const EMPTY_REFRESH_TOKEN: &str = "empty-refresh-token";

#[derive(Clone)]
struct MockState {
    email: String,
    token_requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

pub struct MockGoogle {
    pub base_url: String,
    token_requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl MockGoogle {
    /// Start a mock provider whose signed-in account is `email`
    pub async fn start(email: &str) -> Self {
        let state = MockState {
            email: email.to_string(),
            token_requests: Arc::new(Mutex::new(Vec::new())),
        };
        let token_requests = Arc::clone(&state.token_requests);

        let app = Router::new()
            .route("/token", post(token))
            .route("/userinfo", get(userinfo))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock provider");
        let addr = listener.local_addr().expect("mock provider address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("mock provider stopped");
        });

        Self {
            base_url: format!("http://{addr}"),
            token_requests,
        }
    }

    pub fn endpoints(&self) -> OAuth2Endpoints {
        OAuth2Endpoints {
            auth_url: "https://accounts.example.com/o/oauth2/v2/auth".to_string(),
            token_url: format!("{}/token", self.base_url),
            userinfo_url: format!("{}/userinfo", self.base_url),
        }
    }

    /// Form bodies posted to the token endpoint, oldest first
    pub fn token_requests(&self) -> Vec<HashMap<String, String>> {
        self.token_requests.lock().expect("recorder lock").clone()
    }
}

async fn token(
    State(state): State<MockState>,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state
        .token_requests
        .lock()
        .expect("recorder lock")
        .push(form.clone());

    let field = |name: &str| form.get(name).map(String::as_str);

    match (field("grant_type"), field("code"), field("refresh_token")) {
        (Some("authorization_code"), Some(VALID_CODE), _) => (
            StatusCode::OK,
            Json(json!({
                "access_token": ISSUED_ACCESS_TOKEN,
                "expires_in": 3599,
                "refresh_token": ISSUED_REFRESH_TOKEN,
                "scope": "https://www.googleapis.com/auth/userinfo.email",
                "token_type": "Bearer",
                "id_token": "mock.issued.id-token"
            })),
        ),
        (Some("refresh_token"), _, Some(ISSUED_REFRESH_TOKEN)) => (
            StatusCode::OK,
            Json(json!({
                "access_token": REFRESHED_ACCESS_TOKEN,
                "expires_in": 3599,
                "scope": "https://www.googleapis.com/auth/userinfo.email",
                "token_type": "Bearer",
                "id_token": REFRESHED_ID_TOKEN
            })),
        ),
        (Some("refresh_token"), _, Some(EMPTY_REFRESH_TOKEN)) => (StatusCode::OK, Json(json!({}))),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_grant" })),
        ),
    }
}

async fn userinfo(State(state): State<MockState>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let expected = format!("Bearer {ISSUED_ACCESS_TOKEN}");
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected);

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "invalid_token" })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "id": "1234567890",
            "email": state.email,
            "verified_email": true,
            "picture": "https://example.com/photo.jpg"
        })),
    )
}
