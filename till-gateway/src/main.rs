//! Entry point for the `till-gateway` HTTP server.

use std::sync::Arc;

use clap::Parser;
use till_core::ReceiptProcessor;
use till_gateway::{config::GatewayConfig, logging, routes::create_router};
use tracing::info;

#[tokio::main]
async fn main() {
    let config = GatewayConfig::parse();
    logging::init(&config.log_filter);

    let processor = Arc::new(ReceiptProcessor::new());
    let app = create_router(processor);

    let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %config.listen_addr, "till-gateway listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
