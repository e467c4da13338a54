//! Mayachain Swapper Implementation
//!
//! Resolves which assets can be traded through Mayachain from the live pool
//! list and hands transactions to the wallet for signing and broadcast.

pub mod constants;
pub mod longtail;
pub mod pool_assets;
pub mod state;
pub mod supported_assets;
pub mod swapper;

// Re-exports
pub use constants::{
    is_buy_supported, is_sell_supported, max_bytes_length_by_chain_id,
    mayachain_supported_chain_ids, swap_sources, SupportedChainIds, MAYA_PRECISION,
    MAYACHAIN_OUTBOUND_FEE_CACAO_UNIT,
};
pub use longtail::longtail_asset_ids;
pub use pool_assets::pool_asset_id_to_asset_id;
pub use state::{PoolSnapshot, SupportedAssets};
pub use supported_assets::{
    fetch_pool_snapshot, get_supported_assets, resolve_supported_assets, MayanodePoolSource,
    PoolSource,
};
pub use swapper::MayachainSwapper;
