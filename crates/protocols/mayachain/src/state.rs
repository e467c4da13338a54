//! Mayachain State Types

use node_client::MayanodePool;
use serde::{Deserialize, Serialize};
use swapdesk_core::AssetId;

/// Result of asking the node for its pool list.
///
/// An unreachable node is an expected condition and resolves to no pools.
#[derive(Debug, Clone)]
pub enum PoolSnapshot {
    Fetched(Vec<MayanodePool>),
    Unavailable,
}

impl PoolSnapshot {
    pub fn pools(&self) -> &[MayanodePool] {
        match self {
            Self::Fetched(pools) => pools,
            Self::Unavailable => &[],
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

/// Sellable and buyable asset ids. Both always start with CACAO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedAssets {
    pub sell: Vec<AssetId>,
    pub buy: Vec<AssetId>,
}

impl SupportedAssets {
    pub fn is_sellable(&self, asset_id: &AssetId) -> bool {
        self.sell.contains(asset_id)
    }

    pub fn is_buyable(&self, asset_id: &AssetId) -> bool {
        self.buy.contains(asset_id)
    }

    /// Candidates that are valid buy targets when selling `sell_asset_id`.
    ///
    /// Empty when the sell asset itself is not sellable. Candidate order is kept.
    pub fn filter_buy_assets<'a>(
        &self,
        candidates: impl IntoIterator<Item = &'a AssetId>,
        sell_asset_id: &AssetId,
    ) -> Vec<AssetId> {
        if !self.is_sellable(sell_asset_id) {
            return Vec::new();
        }

        candidates
            .into_iter()
            .filter(|asset_id| self.is_buyable(asset_id) && *asset_id != sell_asset_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<AssetId> {
        raw.iter().map(|id| AssetId::new(*id)).collect()
    }

    fn supported() -> SupportedAssets {
        SupportedAssets {
            sell: ids(&["maya", "btc", "eth"]),
            buy: ids(&["maya", "btc", "eth", "dash"]),
        }
    }

    #[test]
    fn test_filter_requires_sellable_sell_asset() {
        let candidates = ids(&["maya", "btc", "eth", "dash"]);
        let result = supported().filter_buy_assets(&candidates, &AssetId::new("dash"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_excludes_sell_asset_and_unbuyable() {
        let candidates = ids(&["btc", "usdc", "dash", "eth"]);
        let result = supported().filter_buy_assets(&candidates, &AssetId::new("btc"));
        assert_eq!(result, ids(&["dash", "eth"]));
        assert!(!result.contains(&AssetId::new("btc")));
    }

    #[test]
    fn test_snapshot_unavailable_has_no_pools() {
        let snapshot = PoolSnapshot::Unavailable;
        assert!(snapshot.pools().is_empty());
        assert!(snapshot.is_unavailable());
    }
}
