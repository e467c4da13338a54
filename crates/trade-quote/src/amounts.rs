//! Amount conversion and fee totals
//!
//! Pure decimal math, no I/O.
//!
//! # Units
//!
//! - Base unit: integer string in the asset's smallest unit (wei, sats, ...)
//! - Crypto precision: base unit scaled down by the asset's precision
//! - User currency: crypto precision times the asset's market price
//!
//! Unparseable amounts are treated as zero.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::catalog::AssetCatalog;
use crate::errors::{QuoteError, Result};
use crate::types::TradeQuote;

/// Largest precision an asset can declare (ERC-20 `decimals` is a uint8)
pub const MAX_PRECISION: u32 = u8::MAX as u32;

/// Significant digits a `Decimal` holds without overflowing its mantissa
const DECIMAL_DIGITS: usize = 28;

/// Parse a decimal string, falling back to zero
pub fn bn_or_zero(value: &str) -> Decimal {
    let value = value.trim();
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .unwrap_or(Decimal::ZERO)
}

/// Convert a base unit amount to crypto precision.
///
/// Integer amounts are scaled as text, so base unit values far beyond
/// `Decimal::MAX` (e.g. 1e29 wei) still convert. Fraction digits past the
/// mantissa are truncated.
pub fn from_base_unit(amount: &str, precision: u32) -> Decimal {
    if precision > MAX_PRECISION {
        tracing::warn!(precision, "Asset precision out of range, treating amount as zero");
        return Decimal::ZERO;
    }

    let amount = amount.trim();
    match shift_integer(amount, precision as usize) {
        Some(value) => value,
        None => scale_down(bn_or_zero(amount), precision),
    }
}

/// Move the decimal point of an integer string `precision` places left.
/// `None` if `amount` is not a plain integer.
fn shift_integer(amount: &str, precision: usize) -> Option<Decimal> {
    let (negative, digits) = match amount.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, amount.strip_prefix('+').unwrap_or(amount)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let padded = format!("{:0>width$}", digits, width = precision + 1);
    let (whole, fraction) = padded.split_at(padded.len() - precision);
    let whole = whole.trim_start_matches('0');
    let fraction = fraction.trim_end_matches('0');

    if whole.len() > DECIMAL_DIGITS {
        tracing::warn!(amount, precision, "Amount exceeds decimal range, saturating");
        return Some(if negative { Decimal::MIN } else { Decimal::MAX });
    }
    let fraction = &fraction[..fraction.len().min(DECIMAL_DIGITS - whole.len())];

    let mut text = String::with_capacity(whole.len() + fraction.len() + 3);
    if negative {
        text.push('-');
    }
    text.push_str(if whole.is_empty() { "0" } else { whole });
    if !fraction.is_empty() {
        text.push('.');
        text.push_str(fraction);
    }
    Decimal::from_str(&text).ok().map(|value| value.normalize())
}

/// Divide a parsed (non-integer) amount by `10^precision`
fn scale_down(value: Decimal, precision: u32) -> Decimal {
    let mut scaled = value;
    match value.scale().checked_add(precision).map(|scale| scaled.set_scale(scale)) {
        Some(Ok(())) => scaled.normalize(),
        // Scale would exceed 28 digits; divide instead and accept the rounding
        _ => (0..precision).fold(value, |acc, _| acc / Decimal::TEN),
    }
}

/// What the user receives after all hops, in buy asset precision
pub fn buy_amount_after_fees_crypto_precision(quote: &TradeQuote) -> Decimal {
    match quote.last_step() {
        Some(step) => from_base_unit(
            &step.buy_amount_after_fees_crypto_base_unit,
            step.buy_asset.precision,
        ),
        None => Decimal::ZERO,
    }
}

/// Network fees of every hop, valued in the user's currency.
///
/// Each hop pays in the fee asset of its sell asset's chain. A hop whose fee
/// asset is not in the catalog is an error.
pub fn total_network_fee_user_currency_precision(
    quote: &TradeQuote,
    catalog: &AssetCatalog,
) -> Result<Decimal> {
    quote.steps.iter().try_fold(Decimal::ZERO, |acc, step| {
        let fee_asset = catalog
            .fee_asset_by_asset_id(&step.sell_asset.asset_id)
            .ok_or_else(|| QuoteError::MissingFeeAsset {
                asset_id: step.sell_asset.asset_id.to_string(),
            })?;

        let fee_crypto_precision = from_base_unit(
            step.fee_data
                .network_fee_crypto_base_unit
                .as_deref()
                .unwrap_or("0"),
            fee_asset.precision,
        );

        Ok(acc + fee_crypto_precision * catalog.price(&fee_asset.asset_id))
    })
}
