//! Swapper contract shared by all swapper backends
//!
//! A swapper decides which assets it can trade and hands unsigned transactions
//! to a wallet-provided [`SignAndBroadcast`] collaborator. It never signs,
//! validates, or retries on its own.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Asset, AssetId, Result, SwapperConfig, SwapperName, TxId};

/// Unsigned EVM transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvmTransactionRequest {
    pub chain_id: u64,
    pub from: String,
    pub to: String,
    /// Wei, decimal string
    pub value: String,
    /// Hex calldata
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<String>,
}

/// Amino-style Cosmos SDK sign document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosmosSdkSignDoc {
    pub chain_id: String,
    pub account_number: String,
    pub sequence: String,
    pub fee: serde_json::Value,
    pub msgs: Vec<serde_json::Value>,
    #[serde(default)]
    pub memo: String,
}

/// Unsigned UTXO transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoSignTx {
    pub coin: String,
    pub inputs: Vec<serde_json::Value>,
    pub outputs: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op_return_data: Option<String>,
}

/// Wallet-side collaborator that signs a payload and broadcasts it
#[async_trait]
pub trait SignAndBroadcast<Tx: Send + 'static>: Send + Sync {
    async fn sign_and_broadcast(&self, tx: Tx) -> Result<TxId>;
}

/// Input for [`Swapper::filter_buy_assets_by_sell_asset_id`]
#[derive(Debug, Clone, Copy)]
pub struct BuyAssetBySellIdInput<'a> {
    pub assets: &'a [Asset],
    pub sell_asset: &'a Asset,
    pub config: &'a SwapperConfig,
}

#[async_trait]
pub trait Swapper: Send + Sync {
    fn name(&self) -> SwapperName;

    async fn execute_evm_transaction(
        &self,
        tx: EvmTransactionRequest,
        executor: &dyn SignAndBroadcast<EvmTransactionRequest>,
    ) -> Result<TxId> {
        executor.sign_and_broadcast(tx).await
    }

    async fn execute_cosmos_sdk_transaction(
        &self,
        tx: CosmosSdkSignDoc,
        executor: &dyn SignAndBroadcast<CosmosSdkSignDoc>,
    ) -> Result<TxId>;

    async fn execute_utxo_transaction(
        &self,
        tx: UtxoSignTx,
        executor: &dyn SignAndBroadcast<UtxoSignTx>,
    ) -> Result<TxId>;

    /// Asset ids this swapper can sell. `assets` is accepted for interface parity.
    async fn filter_asset_ids_by_sellable(
        &self,
        assets: &[Asset],
        config: &SwapperConfig,
    ) -> Vec<AssetId>;

    /// Candidates that can be bought with `input.sell_asset`
    async fn filter_buy_assets_by_sell_asset_id(
        &self,
        input: BuyAssetBySellIdInput<'_>,
    ) -> Vec<AssetId>;
}
