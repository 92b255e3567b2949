mod auth_url;
mod errors;
mod gateway;
mod refresh;
mod request;
mod token;
mod types;

pub use auth_url::generate_auth_url_core;
pub use errors::GatewayError;
pub use gateway::AuthGateway;
pub use refresh::refresh_token_core;
pub use request::InboundRequest;
pub use token::generate_token_core;
pub use types::{AdmittedTokens, DeniedLogin, RefreshedToken, TokenOutcome};
