//! Bitcoin financial data server - main entry point.

use anyhow::Result;
use crypto_mcp::server::{init_tracing, run_server};
use crypto_mcp::{Config, FinancialDataProvider, FinancialTools, HttpConnector, Metrics, ToolServer};
use tracing::{error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_tracing("error");
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logging goes to stderr; stdout is the protocol channel
    init_tracing(&config.log_level);

    if config.financial_api_key.is_none() {
        warn!("FINANCIAL_DATASETS_API_KEY not set; price tools will report data as unavailable");
    }
    info!(
        "Starting financial server with API URL: {}",
        config.financial_api_url
    );

    let metrics = Metrics::new();
    let connector = HttpConnector::new(config.request_timeout, metrics.clone());
    let provider = FinancialDataProvider::from_config(&config, connector);
    let server = ToolServer::new(FinancialTools::new(provider));

    info!("Cache TTL: {} seconds", config.cache_ttl_secs);
    run_server(server).await?;

    info!("Shutdown complete: {:?}", metrics.summary());
    Ok(())
}
