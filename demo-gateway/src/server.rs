use std::{net::SocketAddr, time::Duration};

use axum::Router;
use axum_server::Handle;

/// Serve `app` until Ctrl-C, recording peer addresses for source-IP checks
pub(crate) async fn serve(port: u16, app: Router) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let handle = Handle::new();

    tokio::spawn(shutdown_on_ctrl_c(handle.clone()));

    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service_with_connect_info::<SocketAddr>())
        .await
}

async fn shutdown_on_ctrl_c(handle: Handle) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        return;
    }
    tracing::info!("Shutting down");
    handle.graceful_shutdown(Some(Duration::from_secs(10)));
}
