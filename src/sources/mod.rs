//! Upstream market-data APIs.
//!
//! Each source turns one upstream endpoint into normalized records. Sources report
//! failures as [`UpstreamError`](crate::error::UpstreamError); deciding what a
//! failure means for the caller is left to the data providers.

mod coingecko;
mod dexscreener;
mod financial_datasets;

pub use coingecko::CoinGeckoApi;
pub use dexscreener::DexScreenerApi;
pub use financial_datasets::FinancialDatasetsApi;

use crate::client::HttpSession;
use crate::error::UpstreamResult;
use crate::models::{LiquidityPool, PricePoint};
use async_trait::async_trait;
use serde_json::Value;

/// Source of Bitcoin prices.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Latest BTC-USD market data.
    async fn current_price(&self, session: &HttpSession) -> UpstreamResult<PricePoint>;

    /// Daily BTC-USD market data between two `YYYY-MM-DD` dates.
    async fn historical_prices(
        &self,
        session: &HttpSession,
        start_date: &str,
        end_date: &str,
    ) -> UpstreamResult<Vec<PricePoint>>;
}

/// Source of liquidity pools for a network.
#[async_trait]
pub trait PoolSource: Send + Sync {
    /// Human-readable source name for logs.
    fn name(&self) -> &'static str;

    /// All pools the source reports for `network`.
    async fn fetch_pools(
        &self,
        session: &HttpSession,
        network: &str,
    ) -> UpstreamResult<Vec<LiquidityPool>>;
}

/// Parse the `pairs` array of a pair-API payload. Entries that are not objects are
/// skipped with a warning; a missing or malformed `pairs` field yields no pools.
pub(crate) fn parse_pairs(body: &Value, network: &str, source: &str) -> Vec<LiquidityPool> {
    let Some(pairs) = body.get("pairs").and_then(Value::as_array) else {
        tracing::debug!("{} payload has no pairs array", source);
        return Vec::new();
    };

    pairs
        .iter()
        .filter_map(|pair| {
            let pool = LiquidityPool::from_pair(pair, network);
            if pool.is_none() {
                tracing::warn!("Error parsing pool data from {}: {}", source, pair);
            }
            pool
        })
        .collect()
}
