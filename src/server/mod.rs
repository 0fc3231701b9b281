//! Stdio tool server.
//!
//! Both binaries run the same [`ToolServer`] over stdin/stdout; they differ only in
//! the [`ToolHandler`](crate::tools::ToolHandler) they plug in.

pub mod dispatcher;
pub mod protocol;
pub mod transport;

pub use dispatcher::ToolServer;
pub use protocol::{RpcError, RpcResponse, TextContent};

use crate::tools::ToolHandler;
use anyhow::Result;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr. `RUST_LOG` takes precedence over `default_level`.
///
/// Stdout carries the protocol, so nothing else may be written there.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run `server` over stdin/stdout until stdin is closed.
pub async fn run_server<H: ToolHandler>(server: ToolServer<H>) -> Result<()> {
    let handler = server.handler();
    tracing::info!(
        "{} serving {} tools on stdio",
        handler.server_name(),
        handler.tools().len()
    );

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    transport::serve(&server, stdin, stdout).await?;

    tracing::info!("{} input closed", handler.server_name());
    Ok(())
}
