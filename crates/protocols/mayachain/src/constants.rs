//! Mayachain Constants
//!
//! Chain support tables, swap source labels and fixed protocol values.

use swapdesk_core::{ChainId, KnownChainId};

/// CACAO decimals on Mayachain
pub const MAYA_PRECISION: u32 = 10;

/// Outbound fee, in CACAO base units
pub const MAYACHAIN_OUTBOUND_FEE_CACAO_UNIT: &str = "200000000";

/// Maximum OP_RETURN memo size on UTXO chains
pub const BTC_MAXIMUM_BYTES_LENGTH: usize = 80;

/// Chains whose assets can be sold through Mayachain
pub const SELL_SUPPORTED_CHAIN_IDS: &[(KnownChainId, bool)] = &[
    (KnownChainId::EthereumMainnet, true),
    (KnownChainId::BitcoinMainnet, true),
    (KnownChainId::ArbitrumMainnet, true),
    (KnownChainId::ThorchainMainnet, true),
    (KnownChainId::DashMainnet, true),
    (KnownChainId::MayachainMainnet, true),
];

/// Chains whose assets can be bought through Mayachain
pub const BUY_SUPPORTED_CHAIN_IDS: &[(KnownChainId, bool)] = &[
    (KnownChainId::EthereumMainnet, true),
    (KnownChainId::BitcoinMainnet, true),
    (KnownChainId::ArbitrumMainnet, true),
    (KnownChainId::ThorchainMainnet, true),
    (KnownChainId::DashMainnet, true),
    (KnownChainId::MayachainMainnet, true),
];

/// Swap source labels shown next to a quote
pub mod swap_sources {
    pub const MAYACHAIN_STREAM_SWAP_SOURCE: &str = "MAYAChain • Streaming";
    pub const MAYACHAIN_LONGTAIL_SWAP_SOURCE: &str = "MAYAChain • Long-tail";
    pub const MAYACHAIN_LONGTAIL_STREAMING_SWAP_SOURCE: &str = "MAYAChain • Long-tail streaming";
}

fn is_enabled(table: &[(KnownChainId, bool)], chain_id: &ChainId) -> bool {
    table
        .iter()
        .any(|(known, enabled)| *enabled && known.as_str() == chain_id.as_str())
}

pub fn is_sell_supported(chain_id: &ChainId) -> bool {
    is_enabled(SELL_SUPPORTED_CHAIN_IDS, chain_id)
}

pub fn is_buy_supported(chain_id: &ChainId) -> bool {
    is_enabled(BUY_SUPPORTED_CHAIN_IDS, chain_id)
}

/// Supported chain ids per side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedChainIds {
    pub sell: Vec<ChainId>,
    pub buy: Vec<ChainId>,
}

fn enabled_chains(table: &[(KnownChainId, bool)]) -> Vec<ChainId> {
    table
        .iter()
        .filter(|(_, enabled)| *enabled)
        .map(|(known, _)| ChainId::from(*known))
        .collect()
}

pub fn mayachain_supported_chain_ids() -> SupportedChainIds {
    SupportedChainIds {
        sell: enabled_chains(SELL_SUPPORTED_CHAIN_IDS),
        buy: enabled_chains(BUY_SUPPORTED_CHAIN_IDS),
    }
}

/// Memo size limit for a chain. `None` means unbounded.
pub fn max_bytes_length_by_chain_id(chain_id: &ChainId) -> Option<usize> {
    if chain_id.is_utxo() {
        return Some(BTC_MAXIMUM_BYTES_LENGTH);
    }
    None
}
