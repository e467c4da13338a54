//! Mayachain swapper
//!
//! Asset filtering is backed by the node's pool list on every call; there is
//! no caching layer here. Transaction execution is handed straight to the
//! wallet's sign-and-broadcast collaborator.

use async_trait::async_trait;
use swapdesk_core::{
    Asset, AssetId, BuyAssetBySellIdInput, CosmosSdkSignDoc, Result, SignAndBroadcast, Swapper,
    SwapperConfig, SwapperName, TxId, UtxoSignTx,
};

use crate::state::SupportedAssets;
use crate::supported_assets::{get_supported_assets, MayanodePoolSource, PoolSource};

pub struct MayachainSwapper<S = MayanodePoolSource> {
    pool_source: S,
}

impl MayachainSwapper {
    pub fn new() -> Self {
        Self {
            pool_source: MayanodePoolSource,
        }
    }
}

impl Default for MayachainSwapper {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PoolSource> MayachainSwapper<S> {
    /// Use a custom pool source (e.g. a cached or test source)
    pub fn with_pool_source(pool_source: S) -> Self {
        Self { pool_source }
    }

    /// Both supported sets in one pool fetch
    pub async fn supported_assets(&self, config: &SwapperConfig) -> SupportedAssets {
        get_supported_assets(&self.pool_source, config).await
    }
}

#[async_trait]
impl<S: PoolSource> Swapper for MayachainSwapper<S> {
    fn name(&self) -> SwapperName {
        SwapperName::Mayachain
    }

    async fn execute_cosmos_sdk_transaction(
        &self,
        tx: CosmosSdkSignDoc,
        executor: &dyn SignAndBroadcast<CosmosSdkSignDoc>,
    ) -> Result<TxId> {
        executor.sign_and_broadcast(tx).await
    }

    async fn execute_utxo_transaction(
        &self,
        tx: UtxoSignTx,
        executor: &dyn SignAndBroadcast<UtxoSignTx>,
    ) -> Result<TxId> {
        executor.sign_and_broadcast(tx).await
    }

    async fn filter_asset_ids_by_sellable(
        &self,
        _assets: &[Asset],
        config: &SwapperConfig,
    ) -> Vec<AssetId> {
        self.supported_assets(config).await.sell
    }

    async fn filter_buy_assets_by_sell_asset_id(
        &self,
        input: BuyAssetBySellIdInput<'_>,
    ) -> Vec<AssetId> {
        let supported = self.supported_assets(input.config).await;
        supported.filter_buy_assets(
            input.assets.iter().map(|asset| &asset.asset_id),
            &input.sell_asset.asset_id,
        )
    }
}
