//! Supported-asset resolution
//!
//! Turns the node's pool list (plus the optional long-tail list) into the
//! sellable and buyable asset sets.

use std::sync::Arc;

use async_trait::async_trait;
use node_client::{MayanodeClient, MayanodePool};
use swapdesk_core::{constants::MAYACHAIN_ASSET_ID, AssetId, SwapperConfig};

use crate::constants::{is_buy_supported, is_sell_supported};
use crate::longtail::longtail_asset_ids;
use crate::pool_assets::pool_asset_id_to_asset_id;
use crate::state::{PoolSnapshot, SupportedAssets};

/// Where pool lists come from
#[async_trait]
pub trait PoolSource: Send + Sync {
    async fn fetch_pools(&self, config: &SwapperConfig) -> node_client::Result<Vec<MayanodePool>>;
}

#[async_trait]
impl<T: PoolSource + ?Sized> PoolSource for Arc<T> {
    async fn fetch_pools(&self, config: &SwapperConfig) -> node_client::Result<Vec<MayanodePool>> {
        (**self).fetch_pools(config).await
    }
}

/// Pool source backed by the Mayanode REST API
#[derive(Debug, Clone, Copy, Default)]
pub struct MayanodePoolSource;

#[async_trait]
impl PoolSource for MayanodePoolSource {
    async fn fetch_pools(&self, config: &SwapperConfig) -> node_client::Result<Vec<MayanodePool>> {
        MayanodeClient::new(config)?.get_pools().await
    }
}

/// Fetch the pool list, degrading any failure to [`PoolSnapshot::Unavailable`]
pub async fn fetch_pool_snapshot(source: &dyn PoolSource, config: &SwapperConfig) -> PoolSnapshot {
    match source.fetch_pools(config).await {
        Ok(pools) => PoolSnapshot::Fetched(pools),
        Err(e) => {
            tracing::warn!(
                node_url = %config.mayachain_node_url,
                "Failed to fetch Mayachain pools: {}, continuing without pools",
                e
            );
            PoolSnapshot::Unavailable
        }
    }
}

/// Asset ids of the available, mappable pools in the snapshot
pub fn pool_derived_asset_ids(snapshot: &PoolSnapshot) -> Vec<AssetId> {
    snapshot
        .pools()
        .iter()
        .filter(|pool| pool.is_available())
        .filter_map(|pool| {
            let asset_id = pool_asset_id_to_asset_id(&pool.asset);
            if asset_id.is_none() {
                tracing::debug!(pool = %pool.asset, "Dropping unmappable pool asset");
            }
            asset_id
        })
        .collect()
}

/// Build the supported sets from a pool snapshot and an optional long-tail list.
///
/// Long-tail tokens come first, then pool assets. Each asset is checked against
/// the sell and buy chain tables independently.
pub fn resolve_supported_assets(
    snapshot: &PoolSnapshot,
    longtail: Option<Vec<AssetId>>,
) -> SupportedAssets {
    let base = AssetId::new(MAYACHAIN_ASSET_ID);
    let mut supported = SupportedAssets {
        sell: vec![base.clone()],
        buy: vec![base],
    };

    let pool_assets = pool_derived_asset_ids(snapshot);
    let all_assets = match longtail {
        Some(mut tokens) => {
            tokens.extend(pool_assets);
            tokens
        }
        None => pool_assets,
    };

    for asset_id in all_assets {
        let chain_id = match asset_id.chain_id() {
            Ok(chain_id) => chain_id,
            Err(e) => {
                tracing::warn!(asset_id = %asset_id, error = %e, "Skipping asset with invalid id");
                continue;
            }
        };

        if is_sell_supported(&chain_id) {
            supported.sell.push(asset_id.clone());
        }
        if is_buy_supported(&chain_id) {
            supported.buy.push(asset_id);
        }
    }

    supported
}

/// Resolve the supported assets for `config`.
///
/// Never fails: an unreachable node yields only the long-tail and base assets.
pub async fn get_supported_assets(source: &dyn PoolSource, config: &SwapperConfig) -> SupportedAssets {
    let snapshot = fetch_pool_snapshot(source, config).await;

    let longtail = if config.mayachain_longtail_enabled {
        match longtail_asset_ids() {
            Ok(tokens) => Some(tokens),
            Err(e) => {
                tracing::error!("Long-tail token list unusable: {}", e);
                Some(Vec::new())
            }
        }
    } else {
        None
    };

    let supported = resolve_supported_assets(&snapshot, longtail);

    tracing::info!(
        pools = snapshot.pools().len(),
        pools_unavailable = snapshot.is_unavailable(),
        longtail_enabled = config.mayachain_longtail_enabled,
        sellable = supported.sell.len(),
        buyable = supported.buy.len(),
        "Resolved Mayachain supported assets"
    );

    supported
}
