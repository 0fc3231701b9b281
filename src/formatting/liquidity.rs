//! Liquidity pool reports.

use super::{pct, signed_pct, truncate_chars, usd};
use crate::models::{DexComparison, LiquidityPool, NetworkInfo};

const MAX_LISTED_POOLS: usize = 20;
const MAX_SEARCH_RESULTS: usize = 10;
const ADDRESS_PREFIX_CHARS: usize = 10;

pub fn format_pools(pools: &[LiquidityPool], network: &str, sort_by: &str) -> String {
    if pools.is_empty() {
        return format!("Nenhum pool de liquidez encontrado para {}.", network);
    }

    let mut out = format!(
        "🏊 **Pools de Liquidez - {}** (Ordenado por {})\n\n",
        network.to_uppercase(),
        sort_by
    );

    for (rank, pool) in pools.iter().take(MAX_LISTED_POOLS).enumerate() {
        out.push_str(&format!("**{}. {}** ({})\n", rank + 1, pool.pair_label(), pool.dex));
        out.push_str(&format!("   💰 TVL: {}\n", usd(pool.tvl, 0)));
        out.push_str(&format!("   📊 Volume 24h: {}\n", usd(pool.volume_24h, 0)));
        out.push_str(&format!("   💸 Taxas 24h: {}\n", usd(pool.fees_24h, 2)));
        out.push_str(&format!("   📈 APY: {}\n", pct(pool.apy)));
        out.push_str(&format!("   📉 Variação 24h: {}\n", signed_pct(pool.price_change_24h)));
        out.push_str(&format!(
            "   🔗 Pool: {}...\n\n",
            truncate_chars(&pool.pool_address, ADDRESS_PREFIX_CHARS)
        ));
    }

    out
}

pub fn format_networks(networks: &[NetworkInfo]) -> String {
    let mut out = String::from("🌐 **Redes Disponíveis para Análise de Liquidez**\n\n");

    for network in networks {
        out.push_str(&format!("**{}**\n", network.name.to_uppercase()));
        out.push_str(&format!("   🔗 Chain ID: {}\n", network.chain_id));
        out.push_str(&format!("   💰 TVL Total: {}\n", usd(network.tvl, 0)));
        out.push_str(&format!("   🏊 Pools: {}\n", network.pool_count));
        out.push_str(&format!("   📊 Volume 24h: {}\n\n", usd(network.volume_24h, 0)));
    }

    out
}

pub fn format_token_search(pools: &[LiquidityPool], token_symbol: &str, network: &str) -> String {
    if pools.is_empty() {
        return format!("Nenhum pool encontrado para {} em {}.", token_symbol, network);
    }

    let mut out = format!(
        "🔍 **Pools para {} em {}**\n\n",
        token_symbol,
        network.to_uppercase()
    );

    for (rank, pool) in pools.iter().take(MAX_SEARCH_RESULTS).enumerate() {
        out.push_str(&format!("**{}. {}** ({})\n", rank + 1, pool.pair_label(), pool.dex));
        out.push_str(&format!("   💰 TVL: {}\n", usd(pool.tvl, 0)));
        out.push_str(&format!("   📊 Volume 24h: {}\n", usd(pool.volume_24h, 0)));
        out.push_str(&format!("   📈 APY: {}\n", pct(pool.apy)));
        out.push_str(&format!("   📉 Variação 24h: {}\n\n", signed_pct(pool.price_change_24h)));
    }

    out
}

pub fn format_comparison(comparison: &[DexComparison], token_symbol: &str, network: &str) -> String {
    if comparison.is_empty() {
        return format!(
            "Nenhuma comparação disponível para {} em {}.",
            token_symbol, network
        );
    }

    let mut out = format!(
        "⚖️ **Comparação de DEXes para {} em {}**\n\n",
        token_symbol,
        network.to_uppercase()
    );

    for entry in comparison {
        let pool = &entry.best_pool;
        out.push_str(&format!("**{}**\n", entry.dex.to_uppercase()));
        out.push_str(&format!("   🏆 Melhor Pool: {}\n", pool.pair_label()));
        out.push_str(&format!("   💰 TVL: {}\n", usd(pool.tvl, 0)));
        out.push_str(&format!("   📊 Volume 24h: {}\n", usd(pool.volume_24h, 0)));
        out.push_str(&format!("   📈 APY: {}\n", pct(pool.apy)));
        out.push_str(&format!("   🏊 Total Pools: {}\n", entry.total_pools));
        out.push_str(&format!("   💰 TVL Total: {}\n\n", usd(entry.total_tvl, 0)));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(dex: &str, base: &str, tvl: f64) -> LiquidityPool {
        LiquidityPool {
            network: "ethereum".to_string(),
            dex: dex.to_string(),
            token0: "0xC02a".to_string(),
            token1: "0xA0b8".to_string(),
            token0_symbol: base.to_string(),
            token1_symbol: "USDC".to_string(),
            liquidity_usd: tvl,
            volume_24h: 2_500_000.0,
            fees_24h: 7_500.5,
            apy: 27.376,
            tvl,
            price_change_24h: -1.234,
            pool_address: "0x88e6A0c2dDD26FEEb64F039a2c41296FcB3f5640".to_string(),
            pair_address: "0x88e6A0c2dDD26FEEb64F039a2c41296FcB3f5640".to_string(),
        }
    }

    #[test]
    fn test_pools_report() {
        let text = format_pools(&[pool("uniswap", "WETH", 10_000_000.0)], "ethereum", "tvl");

        assert!(text.starts_with("🏊 **Pools de Liquidez - ETHEREUM** (Ordenado por tvl)\n\n"));
        assert!(text.contains("**1. WETH/USDC** (uniswap)\n"));
        assert!(text.contains("   💰 TVL: $10,000,000\n"));
        assert!(text.contains("   📊 Volume 24h: $2,500,000\n"));
        assert!(text.contains("   💸 Taxas 24h: $7,500.50\n"));
        assert!(text.contains("   📈 APY: 27.38%\n"));
        assert!(text.contains("   📉 Variação 24h: -1.23%\n"));
        assert!(text.ends_with("   🔗 Pool: 0x88e6A0c2...\n\n"));
    }

    #[test]
    fn test_pools_report_lists_at_most_twenty() {
        let pools: Vec<LiquidityPool> = (0..25).map(|_| pool("uniswap", "WETH", 1.0)).collect();
        let text = format_pools(&pools, "base", "apy");

        assert!(text.contains("**20. WETH/USDC**"));
        assert!(!text.contains("**21. "));
    }

    #[test]
    fn test_networks_report() {
        let networks = vec![NetworkInfo {
            name: "arbitrum".to_string(),
            chain_id: 42161,
            tvl: 1_234_567.0,
            pool_count: 10,
            volume_24h: 0.0,
        }];

        let text = format_networks(&networks);
        assert_eq!(
            text,
            "🌐 **Redes Disponíveis para Análise de Liquidez**\n\n\
             **ARBITRUM**\n\
             \x20  🔗 Chain ID: 42161\n\
             \x20  💰 TVL Total: $1,234,567\n\
             \x20  🏊 Pools: 10\n\
             \x20  📊 Volume 24h: $0\n\n"
        );
    }

    #[test]
    fn test_token_search_report() {
        let pools: Vec<LiquidityPool> = (0..12).map(|_| pool("curve", "stETH", 5.0)).collect();
        let text = format_token_search(&pools, "eth", "ethereum");

        assert!(text.starts_with("🔍 **Pools para eth em ETHEREUM**\n\n"));
        assert!(text.contains("**10. stETH/USDC** (curve)\n"));
        assert!(!text.contains("**11. "));
        assert!(!text.contains("Taxas"));
    }

    #[test]
    fn test_comparison_report() {
        let comparison = vec![DexComparison {
            dex: "uniswap".to_string(),
            best_pool: pool("uniswap", "WETH", 3_000.0),
            total_pools: 3,
            total_tvl: 4_500.0,
            total_volume: 0.0,
        }];

        let text = format_comparison(&comparison, "WETH", "polygon");
        assert!(text.starts_with("⚖️ **Comparação de DEXes para WETH em POLYGON**\n\n"));
        assert!(text.contains("**UNISWAP**\n"));
        assert!(text.contains("   🏆 Melhor Pool: WETH/USDC\n"));
        assert!(text.contains("   🏊 Total Pools: 3\n"));
        assert!(text.ends_with("   💰 TVL Total: $4,500\n\n"));
    }

    #[test]
    fn test_empty_messages_name_the_query() {
        assert_eq!(format_pools(&[], "fantom", "tvl"), "Nenhum pool de liquidez encontrado para fantom.");
        assert_eq!(
            format_token_search(&[], "PEPE", "bsc"),
            "Nenhum pool encontrado para PEPE em bsc."
        );
        assert_eq!(
            format_comparison(&[], "PEPE", "bsc"),
            "Nenhuma comparação disponível para PEPE em bsc."
        );
    }
}
