//! Ranking, searching and grouping of liquidity pools.

use crate::models::{DexComparison, LiquidityPool, NetworkInfo};
use crate::networks::NetworkDescriptor;
use std::collections::HashMap;

/// Metric a pool list can be ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PoolSortKey {
    Tvl,
    VolumeUsd,
    Apy,
    Fees24h,
}

impl PoolSortKey {
    /// Parse the `sort_by` argument. Unknown names yield `None`.
    fn parse(name: &str) -> Option<Self> {
        match name {
            "tvl" => Some(Self::Tvl),
            "volume_usd" => Some(Self::VolumeUsd),
            "apy" => Some(Self::Apy),
            "fees_24h" => Some(Self::Fees24h),
            _ => None,
        }
    }

    fn metric(&self, pool: &LiquidityPool) -> f64 {
        match self {
            Self::Tvl => pool.tvl,
            Self::VolumeUsd => pool.volume_24h,
            Self::Apy => pool.apy,
            Self::Fees24h => pool.fees_24h,
        }
    }
}

/// Sort `pools` descending by `sort_by` and keep the first `limit`.
///
/// The sort is stable, so pools with equal metrics keep their upstream order. An
/// unrecognised `sort_by` leaves the order untouched and only truncates.
pub fn rank_pools(mut pools: Vec<LiquidityPool>, sort_by: &str, limit: usize) -> Vec<LiquidityPool> {
    if let Some(key) = PoolSortKey::parse(sort_by) {
        pools.sort_by(|a, b| key.metric(b).total_cmp(&key.metric(a)));
    }
    pools.truncate(limit);
    pools
}

/// Pools where either token symbol contains `token_symbol`, ignoring case.
pub fn filter_by_token(pools: &[LiquidityPool], token_symbol: &str) -> Vec<LiquidityPool> {
    let needle = token_symbol.to_uppercase();

    pools
        .iter()
        .filter(|pool| {
            pool.token0_symbol.to_uppercase().contains(&needle)
                || pool.token1_symbol.to_uppercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Group pools by exchange, in the order each exchange first appears.
pub fn compare_by_dex(pools: &[LiquidityPool]) -> Vec<DexComparison> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut comparisons: Vec<DexComparison> = Vec::new();

    for pool in pools {
        match index.get(pool.dex.as_str()) {
            Some(&position) => {
                let entry = &mut comparisons[position];
                // strict comparison keeps the first pool among equals
                if pool.tvl > entry.best_pool.tvl {
                    entry.best_pool = pool.clone();
                }
                entry.total_pools += 1;
                entry.total_tvl += pool.tvl;
                entry.total_volume += pool.volume_24h;
            }
            None => {
                index.insert(pool.dex.as_str(), comparisons.len());
                comparisons.push(DexComparison {
                    dex: pool.dex.clone(),
                    best_pool: pool.clone(),
                    total_pools: 1,
                    total_tvl: pool.tvl,
                    total_volume: pool.volume_24h,
                });
            }
        }
    }

    comparisons
}

/// Summarize a network from its top pools. An empty slice leaves the totals at zero.
pub fn summarize_network(network: &NetworkDescriptor, pools: &[LiquidityPool]) -> NetworkInfo {
    NetworkInfo {
        name: network.name.to_string(),
        chain_id: network.chain_id,
        tvl: pools.iter().fold(0.0, |total, p| total + p.tvl),
        pool_count: pools.len(),
        volume_24h: pools.iter().fold(0.0, |total, p| total + p.volume_24h),
    }
}
