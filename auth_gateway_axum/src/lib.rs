//! Axum integration for the auth-gateway handlers
//!
//! ```no_run
//! use auth_gateway::{AuthGateway, GatewayConfig};
//! use auth_gateway_axum::{GATEWAY_ROUTE_PREFIX, gateway_router};
//!
//! # fn build() -> Result<axum::Router, auth_gateway::OAuth2Error> {
//! let gateway = AuthGateway::google(GatewayConfig::from_env())?;
//! let app = axum::Router::new().nest(GATEWAY_ROUTE_PREFIX.as_str(), gateway_router(gateway));
//! # Ok(app)
//! # }
//! ```

mod config;
mod error;
mod extractor;
mod handlers;
mod router;

#[cfg(test)]
mod test_utils;

pub use config::{GATEWAY_ROUTE_PREFIX, GATEWAY_TRUST_FORWARDED_FOR};
pub use extractor::RequestMeta;
pub use router::{gateway_router, gateway_router_no_trace};

pub use auth_gateway::{AuthGateway, GatewayConfig, GatewayError};
