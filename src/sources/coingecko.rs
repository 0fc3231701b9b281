//! CoinGecko token-pairs API.
//!
//! CoinGecko names networks differently from DexScreener; the mapping lives in
//! [`crate::networks`].

use super::{parse_pairs, PoolSource};
use crate::client::{build_url, HttpSession, UpstreamRequest};
use crate::error::UpstreamResult;
use crate::models::LiquidityPool;
use crate::networks;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct CoinGeckoApi {
    base_url: String,
}

impl CoinGeckoApi {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }
}

#[async_trait]
impl PoolSource for CoinGeckoApi {
    fn name(&self) -> &'static str {
        "CoinGecko"
    }

    async fn fetch_pools(
        &self,
        session: &HttpSession,
        network: &str,
    ) -> UpstreamResult<Vec<LiquidityPool>> {
        let gecko_id = networks::gecko_id(network);
        let path = format!("/api/v3/dex/tokens/{}", urlencoding::encode(gecko_id));
        let body = session
            .get_json(UpstreamRequest::get(build_url(&self.base_url, &path)))
            .await?;

        // Pools keep the caller's network name, not the CoinGecko id
        Ok(parse_pairs(&body, network, self.name()))
    }
}
