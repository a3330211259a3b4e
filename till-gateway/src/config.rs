//! Command-line and environment configuration for the gateway binary.

use std::net::SocketAddr;

use clap::Parser;

/// Address the gateway binds when nothing else is configured.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings, taken from flags first and environment second.
#[derive(Debug, Clone, Parser)]
#[command(name = "till-gateway", version, about = "Receipt points HTTP service")]
pub struct GatewayConfig {
    /// Socket address to listen on.
    #[arg(long, env = "TILL_LISTEN_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Default `tracing` filter directive; `RUST_LOG` takes precedence.
    #[arg(long, env = "TILL_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}
