//! Liquidity pool and network records.

use super::{number_field, string_field};
use serde_json::Value;

/// Dex label used when a pair does not name its exchange.
pub const UNKNOWN_DEX: &str = "Unknown";

/// A liquidity pool as reported by one of the pair APIs.
#[derive(Debug, Clone, PartialEq)]
pub struct LiquidityPool {
    pub network: String,
    pub dex: String,
    pub token0: String,
    pub token1: String,
    pub token0_symbol: String,
    pub token1_symbol: String,
    pub liquidity_usd: f64,
    pub volume_24h: f64,
    pub fees_24h: f64,
    /// Annualised yield derived from trailing 24h fees, see [`LiquidityPool::derive_apy`]
    pub apy: f64,
    /// Same as `liquidity_usd`
    pub tvl: f64,
    pub price_change_24h: f64,
    pub pool_address: String,
    pub pair_address: String,
}

impl LiquidityPool {
    /// Build a pool from one pair record tagged with `network`.
    ///
    /// Returns `None` when the record is not a JSON object.
    pub fn from_pair(pair: &Value, network: &str) -> Option<Self> {
        if !pair.is_object() {
            return None;
        }

        let base = nested(pair, "baseToken");
        let quote = nested(pair, "quoteToken");

        let liquidity_usd = number_field(nested(pair, "liquidity"), "usd");
        let volume_24h = number_field(nested(pair, "volume"), "h24");
        let fees_24h = number_field(nested(pair, "fees"), "h24");
        let pair_address = string_field(pair, "pairAddress");

        let dex = pair
            .get("dexId")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_DEX)
            .to_string();

        Some(Self {
            network: network.to_string(),
            dex,
            token0: string_field(base, "address"),
            token1: string_field(quote, "address"),
            token0_symbol: string_field(base, "symbol"),
            token1_symbol: string_field(quote, "symbol"),
            liquidity_usd,
            volume_24h,
            fees_24h,
            apy: Self::derive_apy(liquidity_usd, fees_24h),
            tvl: liquidity_usd,
            price_change_24h: number_field(nested(pair, "priceChange"), "h24"),
            pool_address: pair_address.clone(),
            pair_address,
        })
    }

    /// `(fees / liquidity) * 365 * 100` when both are positive, else `0`.
    pub fn derive_apy(liquidity_usd: f64, fees_24h: f64) -> f64 {
        if liquidity_usd > 0.0 && fees_24h > 0.0 {
            (fees_24h / liquidity_usd) * 365.0 * 100.0
        } else {
            0.0
        }
    }

    /// `TOKEN0/TOKEN1` label.
    pub fn pair_label(&self) -> String {
        format!("{}/{}", self.token0_symbol, self.token1_symbol)
    }
}

static NULL: Value = Value::Null;

fn nested<'a>(record: &'a Value, field: &str) -> &'a Value {
    record.get(field).unwrap_or(&NULL)
}

/// Summary of one supported network.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkInfo {
    pub name: String,
    /// EVM chain id, `0` for non-EVM networks
    pub chain_id: u64,
    pub tvl: f64,
    pub pool_count: usize,
    pub volume_24h: f64,
}

/// Per-exchange summary of the pools that matched a token search.
#[derive(Debug, Clone, PartialEq)]
pub struct DexComparison {
    pub dex: String,
    /// The first pool with the highest tvl on this exchange
    pub best_pool: LiquidityPool,
    pub total_pools: usize,
    pub total_tvl: f64,
    pub total_volume: f64,
}
