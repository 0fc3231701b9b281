//! Liquidity pool tools.

use super::catalog::{catalog_json, ArgDefault, ArgKind, ArgSpec, ToolSpec};
use super::{Arguments, ToolHandler};
use crate::error::{ToolError, ToolResult};
use crate::formatting::liquidity::{
    format_comparison, format_networks, format_pools, format_token_search,
};
use crate::services::LiquidityDataProvider;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde_json::Value;

pub const GET_NETWORK_POOLS: &str = "get_network_pools";
pub const GET_AVAILABLE_NETWORKS: &str = "get_available_networks";
pub const SEARCH_POOLS_BY_TOKEN: &str = "search_pools_by_token";
pub const GET_POOL_COMPARISON: &str = "get_pool_comparison";

const DEFAULT_NETWORK: &str = "ethereum";
const DEFAULT_SORT_BY: &str = "tvl";
const DEFAULT_LIMIT: usize = 20;

pub static LIQUIDITY_TOOLS: [ToolSpec; 4] = [
    ToolSpec {
        name: GET_NETWORK_POOLS,
        description: "Get liquidity pools for a specific network",
        args: &[
            ArgSpec::optional(
                "network",
                ArgKind::String,
                "Network name (ethereum, bsc, polygon, etc.)",
                ArgDefault::Str(DEFAULT_NETWORK),
            ),
            ArgSpec::optional(
                "sort_by",
                ArgKind::String,
                "Sort by: tvl, volume_usd, apy, fees_24h",
                ArgDefault::Str(DEFAULT_SORT_BY),
            ),
            ArgSpec::optional(
                "limit",
                ArgKind::Integer,
                "Number of pools to return",
                ArgDefault::Int(DEFAULT_LIMIT as i64),
            ),
        ],
    },
    ToolSpec {
        name: GET_AVAILABLE_NETWORKS,
        description: "Get list of available networks with basic stats",
        args: &[],
    },
    ToolSpec {
        name: SEARCH_POOLS_BY_TOKEN,
        description: "Search for pools containing a specific token",
        args: &[
            ArgSpec::required("token_symbol", ArgKind::String, "Token symbol to search for"),
            ArgSpec::optional(
                "network",
                ArgKind::String,
                "Network name",
                ArgDefault::Str(DEFAULT_NETWORK),
            ),
        ],
    },
    ToolSpec {
        name: GET_POOL_COMPARISON,
        description: "Compare pools across different DEXes for a token",
        args: &[
            ArgSpec::required("token_symbol", ArgKind::String, "Token symbol to compare"),
            ArgSpec::optional(
                "network",
                ArgKind::String,
                "Network name",
                ArgDefault::Str(DEFAULT_NETWORK),
            ),
        ],
    },
];

static CATALOG: Lazy<Value> = Lazy::new(|| catalog_json(&LIQUIDITY_TOOLS));

/// Tools of the liquidity server.
pub struct LiquidityTools {
    provider: LiquidityDataProvider,
}

impl LiquidityTools {
    pub fn new(provider: LiquidityDataProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ToolHandler for LiquidityTools {
    fn server_name(&self) -> &'static str {
        "crypto-liquidity-mcp"
    }

    fn tools(&self) -> &'static [ToolSpec] {
        &LIQUIDITY_TOOLS
    }

    fn catalog(&self) -> &Value {
        &CATALOG
    }

    async fn call(&self, name: &str, arguments: &Arguments) -> ToolResult<String> {
        match name {
            GET_NETWORK_POOLS => {
                let network = arguments.str_or("network", DEFAULT_NETWORK)?;
                let sort_by = arguments.str_or("sort_by", DEFAULT_SORT_BY)?;
                let limit = arguments.usize_or("limit", DEFAULT_LIMIT)?;

                let session = self.provider.open_session();
                let pools = self
                    .provider
                    .network_pools(&session, &network, &sort_by, limit)
                    .await;
                Ok(format_pools(&pools, &network, &sort_by))
            }
            GET_AVAILABLE_NETWORKS => {
                let session = self.provider.open_session();
                let networks = self.provider.available_networks(&session).await;
                Ok(format_networks(&networks))
            }
            SEARCH_POOLS_BY_TOKEN => {
                let token_symbol = arguments.required_str("token_symbol")?;
                let network = arguments.str_or("network", DEFAULT_NETWORK)?;

                let session = self.provider.open_session();
                let pools = self
                    .provider
                    .search_pools_by_token(&session, &token_symbol, &network)
                    .await;
                Ok(format_token_search(&pools, &token_symbol, &network))
            }
            GET_POOL_COMPARISON => {
                let token_symbol = arguments.required_str("token_symbol")?;
                let network = arguments.str_or("network", DEFAULT_NETWORK)?;

                let session = self.provider.open_session();
                let comparison = self
                    .provider
                    .pool_comparison(&session, &token_symbol, &network)
                    .await;
                Ok(format_comparison(&comparison, &token_symbol, &network))
            }
            other => Err(ToolError::ToolNotFound(other.to_string())),
        }
    }
}
