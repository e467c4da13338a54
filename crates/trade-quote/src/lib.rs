//! Trade Quote Comparison
//!
//! Ranks competing swapper quotes, derives what each quote card displays and
//! tracks the quote selected for execution.
//!
//! All functions here are synchronous and pure. State the comparison depends
//! on (market prices, fee assets, the trade form) is passed in explicitly via
//! [`AssetCatalog`] and [`QuoteContext`].

pub mod amounts;
pub mod catalog;
pub mod display;
pub mod errors;
pub mod ranking;
pub mod slice;
pub mod translation;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-exports
pub use amounts::{
    bn_or_zero, buy_amount_after_fees_crypto_precision, from_base_unit,
    total_network_fee_user_currency_precision,
};
pub use catalog::{AssetCatalog, QuoteContext};
pub use display::{
    display_ranked_quotes, quote_display, quote_tag, QuoteComparison, QuoteTag, SlippageDisplay,
    TagInput, TradeQuoteDisplay,
};
pub use errors::QuoteError;
pub use ranking::{rank_quotes, RankedQuotes};
pub use slice::{SelectionOutcome, TradeQuoteSlice};
pub use translation::{translate_quote_error, QuoteErrorTranslation};
pub use types::{
    ApiQuote, FeeData, ProtocolFee, QuoteErrorEntry, QuoteErrorKind, TradeQuote, TradeQuoteStep,
};
