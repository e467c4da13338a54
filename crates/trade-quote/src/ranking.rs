//! Quote ranking
//!
//! Orders competing quotes and derives the "best" reference values every
//! other quote is compared against.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::amounts::buy_amount_after_fees_crypto_precision;
use crate::types::ApiQuote;

/// Quotes in display order plus the best quote's reference values
#[derive(Debug, Clone, Default)]
pub struct RankedQuotes {
    pub quotes: Vec<ApiQuote>,
    pub best_total_receive_amount_crypto_precision: Option<Decimal>,
    pub best_input_output_ratio: Option<f64>,
}

impl RankedQuotes {
    /// First valid quote, if any
    pub fn best(&self) -> Option<&ApiQuote> {
        self.quotes.first().filter(|quote| quote.is_valid())
    }

    pub fn is_best(&self, quote_id: &str) -> bool {
        self.best().is_some_and(|best| best.id == quote_id)
    }

    pub fn get(&self, quote_id: &str) -> Option<&ApiQuote> {
        self.quotes.iter().find(|quote| quote.id == quote_id)
    }
}

/// Valid quotes first by descending input/output ratio, then the rest in
/// their original order.
pub fn rank_quotes(mut quotes: Vec<ApiQuote>) -> RankedQuotes {
    quotes.sort_by(|a, b| match (a.is_valid(), b.is_valid()) {
        (true, true) => rank_ratio(b).total_cmp(&rank_ratio(a)),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    });

    let best = quotes.first().filter(|quote| quote.is_valid());
    let best_total_receive_amount_crypto_precision = best
        .and_then(|quote| quote.quote.as_ref())
        .map(buy_amount_after_fees_crypto_precision);
    let best_input_output_ratio = best.map(|quote| quote.input_output_ratio);

    tracing::debug!(
        quotes = quotes.len(),
        best = best.map(|quote| quote.id.as_str()),
        "Ranked trade quotes"
    );

    RankedQuotes {
        quotes,
        best_total_receive_amount_crypto_precision,
        best_input_output_ratio,
    }
}

/// Ratio used for ordering; NaN ranks below every real ratio
fn rank_ratio(quote: &ApiQuote) -> f64 {
    if quote.input_output_ratio.is_nan() {
        f64::NEG_INFINITY
    } else {
        quote.input_output_ratio
    }
}
