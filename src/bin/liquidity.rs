//! DEX liquidity server - main entry point.

use anyhow::Result;
use crypto_mcp::server::{init_tracing, run_server};
use crypto_mcp::{Config, HttpConnector, LiquidityDataProvider, LiquidityTools, Metrics, ToolServer};
use tracing::{error, info};

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

    info!(
        "Starting liquidity server with DexScreener: {}, CoinGecko: {}",
        config.dexscreener_api_url, config.coingecko_api_url
    );

    let metrics = Metrics::new();
    let connector = HttpConnector::new(config.request_timeout, metrics.clone());
    let provider = LiquidityDataProvider::from_config(&config, connector);
    let server = ToolServer::new(LiquidityTools::new(provider));

    info!("Cache TTL: {} seconds", config.cache_ttl_secs);
    run_server(server).await?;

    info!("Shutdown complete: {:?}", metrics.summary());
    Ok(())
}
