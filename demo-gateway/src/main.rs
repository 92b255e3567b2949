use std::env;

use axum::Router;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth_gateway_axum::{AuthGateway, GATEWAY_ROUTE_PREFIX, GatewayConfig, gateway_router};

mod server;

const DEFAULT_PORT: u16 = 3001;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}=debug,auth_gateway=debug,auth_gateway_axum=debug,tower_http=info",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from_env();
    let gateway = AuthGateway::google(config)?;

    let app = Router::new().nest(GATEWAY_ROUTE_PREFIX.as_str(), gateway_router(gateway));

    let port = match env::var("PORT") {
        Ok(value) => value.parse()?,
        Err(_) => DEFAULT_PORT,
    };

    server::serve(port, app).await?;
    Ok(())
}
