//! Pool asset notation helpers
//!
//! Mayanode names pools `CHAIN.SYMBOL` for native assets and
//! `CHAIN.SYMBOL-CONTRACT` for tokens.

use swapdesk_core::{asset_namespaces, AssetId, ChainId, KnownChainId};

/// Native pool assets and the asset ids they stand for
const NATIVE_POOL_ASSETS: &[(&str, KnownChainId)] = &[
    ("BTC.BTC", KnownChainId::BitcoinMainnet),
    ("ETH.ETH", KnownChainId::EthereumMainnet),
    ("ARB.ETH", KnownChainId::ArbitrumMainnet),
    ("DASH.DASH", KnownChainId::DashMainnet),
    ("THOR.RUNE", KnownChainId::ThorchainMainnet),
    ("MAYA.CACAO", KnownChainId::MayachainMainnet),
];

/// Pool chain prefixes that carry ERC-20 tokens
const TOKEN_POOL_CHAINS: &[(&str, KnownChainId)] = &[
    ("ETH", KnownChainId::EthereumMainnet),
    ("ARB", KnownChainId::ArbitrumMainnet),
];

/// Map a pool asset (e.g. `ETH.USDC-0XA0B8...`) to its asset id.
///
/// Returns `None` for pools on chains or asset types we do not support.
pub fn pool_asset_id_to_asset_id(pool_asset: &str) -> Option<AssetId> {
    let normalized = pool_asset.trim().to_ascii_uppercase();

    if let Some((_, chain)) = NATIVE_POOL_ASSETS
        .iter()
        .find(|(pool, _)| *pool == normalized)
    {
        return Some(chain.fee_asset_id());
    }

    let (chain_prefix, symbol_and_contract) = normalized.split_once('.')?;
    let (_, contract) = symbol_and_contract.split_once('-')?;
    let (_, chain) = TOKEN_POOL_CHAINS
        .iter()
        .find(|(prefix, _)| *prefix == chain_prefix)?;

    let address = contract.to_ascii_lowercase();
    if !is_evm_address(&address) {
        return None;
    }

    Some(AssetId::from_parts(
        &ChainId::from(*chain),
        asset_namespaces::ERC20,
        &address,
    ))
}

fn is_evm_address(address: &str) -> bool {
    address
        .strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
