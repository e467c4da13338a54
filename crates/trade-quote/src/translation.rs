//! Quote error to user-facing message mapping
//!
//! Produces a translation key plus interpolation parameters taken from the
//! error's metadata. Rendering the message is left to the client.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::types::{QuoteErrorEntry, QuoteErrorKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteErrorTranslation {
    pub key: &'static str,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub params: Map<String, Value>,
}

impl QuoteErrorTranslation {
    fn new(key: &'static str) -> Self {
        Self {
            key,
            params: Map::new(),
        }
    }

    /// Copy `names` from the error metadata into the parameters
    fn with_params(mut self, metadata: &Map<String, Value>, names: &[&str]) -> Self {
        for name in names {
            if let Some(value) = metadata.get(*name) {
                self.params.insert(name.to_string(), value.clone());
            }
        }
        self
    }
}

/// Translation used when a quote is missing without any error attached
pub fn default_error_translation() -> QuoteErrorTranslation {
    translate_quote_error(&QuoteErrorEntry::new(QuoteErrorKind::UnknownError))
}

pub fn translate_quote_error(entry: &QuoteErrorEntry) -> QuoteErrorTranslation {
    use QuoteErrorKind::*;

    let metadata = &entry.metadata;
    match entry.error {
        UnknownError | UnknownSwapperError | Unrecognized => {
            QuoteErrorTranslation::new("trade.errors.quoteError")
        }
        TradingInactiveOnSellChain | TradingInactiveOnBuyChain => {
            QuoteErrorTranslation::new("trade.errors.tradingNotActiveForChain")
                .with_params(metadata, &["chainName"])
        }
        SmartContractWalletNotSupported => {
            QuoteErrorTranslation::new("trade.errors.smartContractWalletNotSupported")
        }
        NoReceiveAddress => QuoteErrorTranslation::new("trade.errors.noReceiveAddress")
            .with_params(metadata, &["assetSymbol"]),
        SellAssetNotSupportedByWallet => {
            QuoteErrorTranslation::new("trade.errors.assetNotSupportedByWallet")
                .with_params(metadata, &["assetSymbol"])
        }
        IntermediaryAssetNotSupportedByWallet => {
            QuoteErrorTranslation::new("trade.errors.intermediaryAssetNotSupportedByWallet")
                .with_params(metadata, &["assetSymbol", "chainSymbol"])
        }
        InsufficientSellAssetBalance => QuoteErrorTranslation::new("common.insufficientFunds"),
        InsufficientFirstHopFeeAssetBalance | InsufficientSecondHopFeeAssetBalance => {
            QuoteErrorTranslation::new("common.insufficientAmountForGas")
                .with_params(metadata, &["assetSymbol", "chainSymbol"])
        }
        QuoteSellAmountInvalid => QuoteErrorTranslation::new("trade.errors.sellAmountInvalid"),
        UnsupportedChain => QuoteErrorTranslation::new("trade.errors.unsupportedChain"),
        CrossChainNotSupported => QuoteErrorTranslation::new("trade.errors.crossChainNotSupported"),
        UnsupportedTradePair => QuoteErrorTranslation::new("trade.errors.unsupportedTradePair"),
        TradingHalted => QuoteErrorTranslation::new("trade.errors.tradingNotActiveNoAssetSymbol"),
        SellAmountBelowMinimum => QuoteErrorTranslation::new("trade.errors.amountTooSmall")
            .with_params(metadata, &["minAmountCryptoHuman", "symbol"]),
        SellAmountBelowTradeFee => {
            QuoteErrorTranslation::new("trade.errors.sellAmountBelowTradeFee")
        }
        InsufficientFundsForProtocolFee => {
            QuoteErrorTranslation::new("trade.errors.insufficientFundsForProtocolFee")
                .with_params(metadata, &["symbol", "chainName"])
        }
        NoRouteFound => QuoteErrorTranslation::new("trade.errors.noRouteFound"),
        RateLimitExceeded => QuoteErrorTranslation::new("trade.errors.rateLimitExceeded"),
        QueryFailed => QuoteErrorTranslation::new("trade.errors.quoteError"),
        FinalQuoteMaxSlippageExceeded => {
            QuoteErrorTranslation::new("trade.errors.maxSlippageExceededWithPercentage")
                .with_params(metadata, &["slippagePercentage"])
        }
    }
}
