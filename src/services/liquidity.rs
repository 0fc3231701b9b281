//! DEX liquidity pool provider.

use super::log_upstream_failure;
use crate::aggregation::{compare_by_dex, filter_by_token, rank_pools, summarize_network};
use crate::cache::TimedCache;
use crate::client::{HttpConnector, HttpSession};
use crate::config::Config;
use crate::models::{DexComparison, LiquidityPool, NetworkInfo};
use crate::networks::KNOWN_NETWORKS;
use crate::sources::{CoinGeckoApi, DexScreenerApi, PoolSource};
use futures::future::join_all;
use std::sync::Arc;

/// Pools fetched per network when building the network overview.
const NETWORK_SUMMARY_LIMIT: usize = 10;

/// Pools scanned by token search and comparison.
const TOKEN_SEARCH_LIMIT: usize = 100;

/// Ranking used by the overview and the token search.
const DEFAULT_SORT: &str = "tvl";

/// Fetches liquidity pools from every configured source and ranks them.
pub struct LiquidityDataProvider {
    sources: Vec<Arc<dyn PoolSource>>,
    connector: HttpConnector,
    pool_cache: TimedCache<String, Vec<LiquidityPool>>,
}

impl LiquidityDataProvider {
    /// Create a provider. Pools from earlier sources come first in combined results.
    pub fn new(
        sources: Vec<Arc<dyn PoolSource>>,
        connector: HttpConnector,
        cache_ttl_secs: u64,
    ) -> Self {
        let pool_cache = TimedCache::new(cache_ttl_secs).with_metrics(connector.metrics().clone());

        Self {
            sources,
            connector,
            pool_cache,
        }
    }

    /// Provider backed by DexScreener and CoinGecko as configured.
    pub fn from_config(config: &Config, connector: HttpConnector) -> Self {
        let sources: Vec<Arc<dyn PoolSource>> = vec![
            Arc::new(DexScreenerApi::new(config.dexscreener_api_url.clone())),
            Arc::new(CoinGeckoApi::new(config.coingecko_api_url.clone())),
        ];
        Self::new(sources, connector, config.cache_ttl_secs)
    }

    /// Open the HTTP session for one tool call.
    pub fn open_session(&self) -> HttpSession {
        self.connector.open()
    }

    /// Top `limit` pools of `network` ranked by `sort_by`.
    ///
    /// Cached under `{network}_{sort_by}_{limit}`, empty results included.
    pub async fn network_pools(
        &self,
        session: &HttpSession,
        network: &str,
        sort_by: &str,
        limit: usize,
    ) -> Vec<LiquidityPool> {
        let key = format!("{}_{}_{}", network, sort_by, limit);

        self.pool_cache
            .get_or_fetch(key, || async move {
                let pools = self.fetch_all_pools(session, network).await;
                rank_pools(pools, sort_by, limit)
            })
            .await
    }

    /// Every known network with totals over its top pools, in table order.
    pub async fn available_networks(&self, session: &HttpSession) -> Vec<NetworkInfo> {
        let summaries = KNOWN_NETWORKS.iter().map(|network| async move {
            let pools = self
                .network_pools(session, network.name, DEFAULT_SORT, NETWORK_SUMMARY_LIMIT)
                .await;
            summarize_network(network, &pools)
        });

        join_all(summaries).await
    }

    /// Pools of `network` where either token symbol contains `token_symbol`.
    pub async fn search_pools_by_token(
        &self,
        session: &HttpSession,
        token_symbol: &str,
        network: &str,
    ) -> Vec<LiquidityPool> {
        let pools = self
            .network_pools(session, network, DEFAULT_SORT, TOKEN_SEARCH_LIMIT)
            .await;
        filter_by_token(&pools, token_symbol)
    }

    /// Token search results grouped by exchange.
    pub async fn pool_comparison(
        &self,
        session: &HttpSession,
        token_symbol: &str,
        network: &str,
    ) -> Vec<DexComparison> {
        let pools = self
            .search_pools_by_token(session, token_symbol, network)
            .await;
        compare_by_dex(&pools)
    }

    /// Query every source concurrently and concatenate in source order. A failing
    /// source contributes nothing.
    async fn fetch_all_pools(&self, session: &HttpSession, network: &str) -> Vec<LiquidityPool> {
        let fetches = self.sources.iter().map(|source| async move {
            match source.fetch_pools(session, network).await {
                Ok(pools) => pools,
                Err(e) => {
                    log_upstream_failure(&format!("{} pools fetch for {}", source.name(), network), &e);
                    Vec::new()
                }
            }
        });

        join_all(fetches).await.into_iter().flatten().collect()
    }
}
