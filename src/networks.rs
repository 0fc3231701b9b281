//! Networks the liquidity server knows about.

/// Static description of a supported network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkDescriptor {
    /// Name used by clients and by the DexScreener API
    pub name: &'static str,
    /// Identifier of the network on the CoinGecko API
    pub gecko_id: &'static str,
    /// EVM chain id, `0` for non-EVM networks
    pub chain_id: u64,
}

/// The networks reported by `get_available_networks`, in display order.
pub static KNOWN_NETWORKS: [NetworkDescriptor; 11] = [
    NetworkDescriptor { name: "ethereum", gecko_id: "ethereum", chain_id: 1 },
    NetworkDescriptor { name: "bsc", gecko_id: "binance-smart-chain", chain_id: 56 },
    NetworkDescriptor { name: "polygon", gecko_id: "polygon-pos", chain_id: 137 },
    NetworkDescriptor { name: "arbitrum", gecko_id: "arbitrum-one", chain_id: 42161 },
    NetworkDescriptor { name: "optimism", gecko_id: "optimistic-ethereum", chain_id: 10 },
    NetworkDescriptor { name: "base", gecko_id: "base", chain_id: 8453 },
    NetworkDescriptor { name: "solana", gecko_id: "solana", chain_id: 0 },
    NetworkDescriptor { name: "avalanche", gecko_id: "avalanche", chain_id: 43114 },
    NetworkDescriptor { name: "fantom", gecko_id: "fantom", chain_id: 250 },
    NetworkDescriptor { name: "aptos", gecko_id: "aptos", chain_id: 0 },
    NetworkDescriptor { name: "sui", gecko_id: "sui", chain_id: 0 },
];

/// Look up a known network by name.
pub fn find(name: &str) -> Option<&'static NetworkDescriptor> {
    KNOWN_NETWORKS.iter().find(|network| network.name == name)
}

/// CoinGecko identifier for `network`; unknown names pass through unchanged.
pub fn gecko_id(network: &str) -> &str {
    find(network).map_or(network, |descriptor| descriptor.gecko_id)
}
