//! Quote model as returned by the quote API
//!
//! Amounts stay in base units as decimal strings; conversion happens in
//! [`crate::amounts`]. Nothing in this crate mutates a quote.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use swapdesk_core::{Asset, AssetId, SwapperName};

/// Protocol fee charged by a step, keyed by the fee asset in [`FeeData`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolFee {
    pub amount_crypto_base_unit: String,
    pub asset: Asset,
    #[serde(default)]
    pub requires_balance: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeData {
    /// Paid in the fee asset of the step's sell chain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_fee_crypto_base_unit: Option<String>,
    #[serde(default)]
    pub protocol_fees: HashMap<AssetId, ProtocolFee>,
}

/// One hop of a trade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeQuoteStep {
    /// Route label, e.g. "MAYAChain • Streaming"
    pub source: String,
    pub sell_asset: Asset,
    pub buy_asset: Asset,
    pub sell_amount_including_protocol_fees_crypto_base_unit: String,
    pub buy_amount_after_fees_crypto_base_unit: String,
    #[serde(default)]
    pub fee_data: FeeData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_execution_time_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeQuote {
    pub id: String,
    pub steps: Vec<TradeQuoteStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slippage_tolerance_percentage_decimal: Option<String>,
}

impl TradeQuote {
    pub fn first_step(&self) -> Option<&TradeQuoteStep> {
        self.steps.first()
    }

    pub fn last_step(&self) -> Option<&TradeQuoteStep> {
        self.steps.last()
    }
}

/// Reason a quote could not be produced or executed.
///
/// Covers both the swapper's own errors and the checks the trade form runs
/// on top of a quote. Kinds this build does not know deserialize as
/// [`QuoteErrorKind::Unrecognized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteErrorKind {
    // Trade form checks
    UnknownError,
    TradingInactiveOnSellChain,
    TradingInactiveOnBuyChain,
    SmartContractWalletNotSupported,
    NoReceiveAddress,
    SellAssetNotSupportedByWallet,
    IntermediaryAssetNotSupportedByWallet,
    InsufficientSellAssetBalance,
    InsufficientFirstHopFeeAssetBalance,
    InsufficientSecondHopFeeAssetBalance,
    QuoteSellAmountInvalid,

    // Swapper errors
    UnknownSwapperError,
    UnsupportedChain,
    CrossChainNotSupported,
    UnsupportedTradePair,
    TradingHalted,
    SellAmountBelowMinimum,
    SellAmountBelowTradeFee,
    InsufficientFundsForProtocolFee,
    NoRouteFound,
    RateLimitExceeded,
    QueryFailed,
    FinalQuoteMaxSlippageExceeded,

    #[serde(other)]
    Unrecognized,
}

impl QuoteErrorKind {
    /// Generic failures that do not warrant showing the swapper card
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::UnknownError | Self::UnknownSwapperError)
    }
}

/// Error attached to a quote, with kind-specific metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteErrorEntry {
    pub error: QuoteErrorKind,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl QuoteErrorEntry {
    pub fn new(error: QuoteErrorKind) -> Self {
        Self {
            error,
            metadata: serde_json::Map::new(),
        }
    }

    pub fn with_metadata(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

/// A swapper's answer to a quote request, as compared on the trade form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiQuote {
    pub id: String,
    pub swapper_name: SwapperName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<TradeQuote>,
    #[serde(default)]
    pub errors: Vec<QuoteErrorEntry>,
    /// Overall value ranking metric; higher is better
    pub input_output_ratio: f64,
}

impl ApiQuote {
    /// A quote is usable when it exists and carries no errors
    pub fn is_valid(&self) -> bool {
        self.quote.is_some() && self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_quote_with_unrecognized_error() {
        let json = r#"{
            "id": "q1",
            "swapperName": "MAYAChain",
            "errors": [{ "error": "SomethingNew" }],
            "inputOutputRatio": 0.5
        }"#;
        let quote: ApiQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.swapper_name, SwapperName::Mayachain);
        assert!(quote.quote.is_none());
        assert_eq!(quote.errors[0].error, QuoteErrorKind::Unrecognized);
        assert!(!quote.is_valid());
    }

    #[test]
    fn test_unknown_kinds() {
        assert!(QuoteErrorKind::UnknownError.is_unknown());
        assert!(QuoteErrorKind::UnknownSwapperError.is_unknown());
        assert!(!QuoteErrorKind::Unrecognized.is_unknown());
        assert!(!QuoteErrorKind::TradingHalted.is_unknown());
    }
}
