//! DexScreener pairs API.

use super::{parse_pairs, PoolSource};
use crate::client::{build_url, HttpSession, UpstreamRequest};
use crate::error::UpstreamResult;
use crate::models::LiquidityPool;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct DexScreenerApi {
    base_url: String,
}

impl DexScreenerApi {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }
}

#[async_trait]
impl PoolSource for DexScreenerApi {
    fn name(&self) -> &'static str {
        "DexScreener"
    }

    async fn fetch_pools(
        &self,
        session: &HttpSession,
        network: &str,
    ) -> UpstreamResult<Vec<LiquidityPool>> {
        let path = format!("/latest/dex/tokens/{}", urlencoding::encode(network));
        let body = session
            .get_json(UpstreamRequest::get(build_url(&self.base_url, &path)))
            .await?;

        Ok(parse_pairs(&body, network, self.name()))
    }
}
