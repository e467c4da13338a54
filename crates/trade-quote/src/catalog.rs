//! Asset catalog and trade form context
//!
//! Everything the comparison needs from the rest of the application is passed
//! in through these two types.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use swapdesk_core::{Asset, AssetId, ChainId, KnownChainId};

/// Fee assets per chain and user-currency prices per asset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCatalog {
    #[serde(default)]
    fee_assets: HashMap<ChainId, Asset>,
    #[serde(default)]
    prices: HashMap<AssetId, Decimal>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-filled with the native fee asset of every known chain
    pub fn with_known_fee_assets() -> Self {
        let mut catalog = Self::new();
        for chain in KnownChainId::ALL {
            let (symbol, name, precision) = native_asset_info(chain);
            catalog.insert_fee_asset(Asset {
                asset_id: chain.fee_asset_id(),
                chain_id: ChainId::from(chain),
                symbol: symbol.to_string(),
                name: name.to_string(),
                precision,
            });
        }
        catalog
    }

    pub fn insert_fee_asset(&mut self, asset: Asset) {
        self.fee_assets.insert(asset.chain_id.clone(), asset);
    }

    pub fn insert_price(&mut self, asset_id: AssetId, price: Decimal) {
        self.prices.insert(asset_id, price);
    }

    pub fn with_prices(mut self, prices: impl IntoIterator<Item = (AssetId, Decimal)>) -> Self {
        self.prices.extend(prices);
        self
    }

    pub fn fee_asset_by_chain_id(&self, chain_id: &ChainId) -> Option<&Asset> {
        self.fee_assets.get(chain_id)
    }

    /// Fee asset of the chain `asset_id` lives on
    pub fn fee_asset_by_asset_id(&self, asset_id: &AssetId) -> Option<&Asset> {
        let chain_id = asset_id.chain_id().ok()?;
        self.fee_asset_by_chain_id(&chain_id)
    }

    /// User-currency price; assets without market data are worth zero
    pub fn price(&self, asset_id: &AssetId) -> Decimal {
        self.prices.get(asset_id).copied().unwrap_or(Decimal::ZERO)
    }
}

fn native_asset_info(chain: KnownChainId) -> (&'static str, &'static str, u32) {
    match chain {
        KnownChainId::EthereumMainnet => ("ETH", "Ethereum", 18),
        KnownChainId::ArbitrumMainnet => ("ETH", "Ethereum", 18),
        KnownChainId::BitcoinMainnet => ("BTC", "Bitcoin", 8),
        KnownChainId::DashMainnet => ("DASH", "Dash", 8),
        KnownChainId::ThorchainMainnet => ("RUNE", "THORChain", 8),
        KnownChainId::MayachainMainnet => ("CACAO", "CACAO", 10),
    }
}

/// State of the trade form the quotes are compared for
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteContext {
    /// Chain of the asset being sold; its fee asset must be in the catalog
    pub sell_asset_chain_id: ChainId,
    /// Amount typed by the user, display units
    #[serde(default)]
    pub sell_amount_crypto_precision: String,
    /// Custom slippage set by the user, if any
    #[serde(default)]
    pub user_slippage_percentage_decimal: Option<String>,
    #[serde(default)]
    pub buy_asset_price: Option<Decimal>,
    #[serde(default = "default_true")]
    pub is_trading_active: bool,
    #[serde(default)]
    pub is_loading: bool,
}

fn default_true() -> bool {
    true
}

impl QuoteContext {
    pub fn new(sell_asset_chain_id: ChainId, sell_amount_crypto_precision: impl Into<String>) -> Self {
        Self {
            sell_asset_chain_id,
            sell_amount_crypto_precision: sell_amount_crypto_precision.into(),
            user_slippage_percentage_decimal: None,
            buy_asset_price: None,
            is_trading_active: true,
            is_loading: false,
        }
    }
}
