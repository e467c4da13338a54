//! Per-quote display metrics and tagging
//!
//! Everything a quote card shows is derived here from the quote, the best
//! reference values of its ranking, the trade form context and the asset
//! catalog.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use swapdesk_core::SwapperName;

use crate::amounts::{
    bn_or_zero, buy_amount_after_fees_crypto_precision, total_network_fee_user_currency_precision,
};
use crate::catalog::{AssetCatalog, QuoteContext};
use crate::errors::{QuoteError, Result};
use crate::ranking::RankedQuotes;
use crate::translation::{default_error_translation, translate_quote_error, QuoteErrorTranslation};
use crate::types::ApiQuote;

/// Header tag of a quote card, highest priority first
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuoteTag {
    Error { translation: QuoteErrorTranslation },
    /// Amount entered but nothing positive to receive
    NegativeRatio,
    Best,
    /// `-(1 - ratio / best_ratio)`, absent without a best ratio
    OverallDifference { value: Option<f64> },
}

/// Slippage hint shown on a quote card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum SlippageDisplay {
    /// The user set a custom slippage the swapper did not honour
    NotApplied {
        user_slippage_percentage_decimal: String,
        quoted_slippage_percentage_decimal: Option<String>,
        swapper_name: SwapperName,
    },
    Quoted { slippage_percentage_decimal: String },
}

/// Inputs to [`quote_tag`]
#[derive(Debug, Clone, Copy)]
pub struct TagInput<'a> {
    pub quote: &'a ApiQuote,
    pub is_best: bool,
    pub is_amount_entered: bool,
    pub has_amount_with_positive_receive: bool,
    pub overall_difference: Option<f64>,
}

/// Classify a quote into exactly one tag.
///
/// Errors always win, then the negative ratio warning, then best, then the
/// overall difference to the best quote.
pub fn quote_tag(input: TagInput<'_>) -> QuoteTag {
    let first_error = input.quote.errors.first();

    if input.quote.quote.is_none() || first_error.is_some() {
        let translation = first_error
            .map(translate_quote_error)
            .unwrap_or_else(default_error_translation);
        return QuoteTag::Error { translation };
    }

    if !input.has_amount_with_positive_receive && input.is_amount_entered {
        return QuoteTag::NegativeRatio;
    }

    if input.is_best {
        return QuoteTag::Best;
    }

    QuoteTag::OverallDifference {
        value: input.overall_difference,
    }
}

/// `-(1 - ratio / best_ratio)`; none without a non-zero best ratio
pub fn overall_difference_decimal_percentage(ratio: f64, best_ratio: Option<f64>) -> Option<f64> {
    match best_ratio {
        Some(best) if best != 0.0 => Some(-(1.0 - ratio / best)),
        _ => None,
    }
}

/// `1 - receive / best_receive`; none without a non-zero best receive amount
pub fn amount_difference_decimal_percentage(
    receive: Decimal,
    best_receive: Option<Decimal>,
) -> Option<f64> {
    let ratio = receive.checked_div(best_receive?)?;
    (Decimal::ONE - ratio).to_f64()
}

fn slippage_display(quote: &ApiQuote, user_slippage: Option<&str>) -> Option<SlippageDisplay> {
    let trade_quote = quote.quote.as_ref()?;
    let quoted = trade_quote.slippage_tolerance_percentage_decimal.as_deref();

    match user_slippage {
        Some(user) if quoted.map(bn_or_zero) != Some(bn_or_zero(user)) => {
            Some(SlippageDisplay::NotApplied {
                user_slippage_percentage_decimal: user.to_string(),
                quoted_slippage_percentage_decimal: quoted.map(str::to_string),
                swapper_name: quote.swapper_name,
            })
        }
        _ => quoted.map(|slippage| SlippageDisplay::Quoted {
            slippage_percentage_decimal: slippage.to_string(),
        }),
    }
}

/// Everything a quote card renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeQuoteDisplay {
    pub id: String,
    pub swapper_name: SwapperName,
    /// First hop's route label, or the swapper name
    pub title: String,
    pub tag: QuoteTag,
    pub is_best: bool,
    pub is_active: bool,
    pub is_expanded: bool,
    pub is_disabled: bool,
    pub is_actionable: bool,
    pub show_swapper: bool,
    pub has_amount_with_positive_receive: bool,
    pub num_hops: usize,
    pub total_receive_amount_crypto_precision: Decimal,
    pub total_receive_amount_fiat_precision: Decimal,
    pub network_fee_user_currency_precision: Option<Decimal>,
    pub quote_amount_difference_decimal_percentage: Option<f64>,
    pub quote_overall_difference_decimal_percentage: Option<f64>,
    pub total_estimated_execution_time_ms: Option<u64>,
    pub slippage: Option<SlippageDisplay>,
}

/// One quote's position among its competitors
#[derive(Debug, Clone, Copy)]
pub struct QuoteComparison<'a> {
    pub quote: &'a ApiQuote,
    pub is_best: bool,
    pub is_active: bool,
    pub best_total_receive_amount_crypto_precision: Option<Decimal>,
    pub best_input_output_ratio: Option<f64>,
}

/// Derive the card for one quote.
///
/// Fails when the catalog has no fee asset for the sell chain or for a hop's
/// sell asset.
pub fn quote_display(
    comparison: QuoteComparison<'_>,
    context: &QuoteContext,
    catalog: &AssetCatalog,
) -> Result<TradeQuoteDisplay> {
    let QuoteComparison {
        quote: api_quote,
        is_best,
        is_active,
        ..
    } = comparison;

    if catalog
        .fee_asset_by_chain_id(&context.sell_asset_chain_id)
        .is_none()
    {
        return Err(QuoteError::MissingChainFeeAsset {
            chain_id: context.sell_asset_chain_id.to_string(),
        });
    }

    let trade_quote = api_quote.quote.as_ref();

    let network_fee_user_currency_precision = trade_quote
        .map(|quote| total_network_fee_user_currency_precision(quote, catalog))
        .transpose()?;

    let total_receive_amount_crypto_precision = trade_quote
        .map(buy_amount_after_fees_crypto_precision)
        .unwrap_or(Decimal::ZERO);
    let total_receive_amount_fiat_precision = total_receive_amount_crypto_precision
        * context.buy_asset_price.unwrap_or(Decimal::ZERO);

    let quote_amount_difference_decimal_percentage = trade_quote.and_then(|_| {
        amount_difference_decimal_percentage(
            total_receive_amount_crypto_precision,
            comparison.best_total_receive_amount_crypto_precision,
        )
    });
    let quote_overall_difference_decimal_percentage = trade_quote.and_then(|_| {
        overall_difference_decimal_percentage(
            api_quote.input_output_ratio,
            comparison.best_input_output_ratio,
        )
    });

    let is_amount_entered = bn_or_zero(&context.sell_amount_crypto_precision) > Decimal::ZERO;
    let has_negative_ratio = is_amount_entered && api_quote.input_output_ratio <= 0.0;
    let has_amount_with_positive_receive = is_amount_entered
        && !has_negative_ratio
        && total_receive_amount_crypto_precision > Decimal::ZERO;

    let tag = quote_tag(TagInput {
        quote: api_quote,
        is_best,
        is_amount_entered,
        has_amount_with_positive_receive,
        overall_difference: quote_overall_difference_decimal_percentage,
    });

    let show_swapper = trade_quote.is_some()
        || !api_quote
            .errors
            .first()
            .is_some_and(|entry| entry.error.is_unknown());

    let title = trade_quote
        .and_then(|quote| quote.first_step())
        .map(|step| step.source.clone())
        .unwrap_or_else(|| api_quote.swapper_name.to_string());

    Ok(TradeQuoteDisplay {
        id: api_quote.id.clone(),
        swapper_name: api_quote.swapper_name,
        title,
        tag,
        is_best,
        is_active,
        is_expanded: is_best || is_active,
        is_disabled: trade_quote.is_none() || context.is_loading,
        is_actionable: context.is_trading_active
            && has_amount_with_positive_receive
            && api_quote.errors.is_empty(),
        show_swapper,
        has_amount_with_positive_receive,
        num_hops: trade_quote.map_or(0, |quote| quote.steps.len()),
        total_receive_amount_crypto_precision,
        total_receive_amount_fiat_precision,
        network_fee_user_currency_precision,
        quote_amount_difference_decimal_percentage,
        quote_overall_difference_decimal_percentage,
        total_estimated_execution_time_ms: trade_quote.map(|quote| {
            quote
                .steps
                .iter()
                .map(|step| step.estimated_execution_time_ms.unwrap_or(0))
                .sum()
        }),
        slippage: slippage_display(api_quote, context.user_slippage_percentage_decimal.as_deref()),
    })
}

/// Cards for a whole ranking, in ranking order
pub fn display_ranked_quotes(
    ranked: &RankedQuotes,
    active_quote_id: Option<&str>,
    context: &QuoteContext,
    catalog: &AssetCatalog,
) -> Result<Vec<TradeQuoteDisplay>> {
    ranked
        .quotes
        .iter()
        .map(|quote| {
            quote_display(
                QuoteComparison {
                    quote,
                    is_best: ranked.is_best(&quote.id),
                    is_active: active_quote_id == Some(quote.id.as_str()),
                    best_total_receive_amount_crypto_precision: ranked
                        .best_total_receive_amount_crypto_precision,
                    best_input_output_ratio: ranked.best_input_output_ratio,
                },
                context,
                catalog,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::rank_quotes;
    use crate::test_utils::{asset, errored_quote, valid_quote, BTC, ETH};
    use crate::types::{QuoteErrorEntry, QuoteErrorKind};
    use std::str::FromStr;
    use swapdesk_core::{AssetId, ChainId};

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn context(sell_amount: &str) -> QuoteContext {
        QuoteContext {
            buy_asset_price: Some(dec("60000")),
            ..QuoteContext::new(ChainId::new("eip155:1"), sell_amount)
        }
    }

    fn catalog() -> AssetCatalog {
        AssetCatalog::with_known_fee_assets()
            .with_prices([(AssetId::new(ETH), dec("3000")), (AssetId::new(BTC), dec("60000"))])
    }

    fn comparison(quote: &ApiQuote, is_best: bool, is_active: bool) -> QuoteComparison<'_> {
        QuoteComparison {
            quote,
            is_best,
            is_active,
            best_total_receive_amount_crypto_precision: Some(dec("0.05")),
            best_input_output_ratio: Some(1.0),
        }
    }

    #[test]
    fn test_overall_difference() {
        let diff = overall_difference_decimal_percentage(0.95, Some(1.0)).unwrap();
        assert!((diff - -0.05).abs() < 1e-12);
        assert_eq!(overall_difference_decimal_percentage(0.95, Some(0.0)), None);
        assert_eq!(overall_difference_decimal_percentage(0.95, None), None);
    }

    #[test]
    fn test_amount_difference() {
        let diff = amount_difference_decimal_percentage(dec("0.04"), Some(dec("0.05"))).unwrap();
        assert!((diff - 0.2).abs() < 1e-12);
        assert_eq!(amount_difference_decimal_percentage(dec("1"), Some(Decimal::ZERO)), None);
        assert_eq!(amount_difference_decimal_percentage(dec("1"), None), None);
    }

    #[test]
    fn test_error_tag_wins_over_everything() {
        let mut quote = valid_quote("q", 1.0, "5000000");
        quote.errors = vec![QuoteErrorEntry::new(QuoteErrorKind::TradingHalted)];

        for (is_best, is_amount_entered, positive) in
            [(true, true, true), (false, false, false), (true, true, false)]
        {
            let tag = quote_tag(TagInput {
                quote: &quote,
                is_best,
                is_amount_entered,
                has_amount_with_positive_receive: positive,
                overall_difference: Some(0.0),
            });
            assert!(matches!(
                tag,
                QuoteTag::Error { ref translation } if translation.key == "trade.errors.tradingNotActiveNoAssetSymbol"
            ));
        }
    }

    #[test]
    fn test_missing_quote_without_errors_is_unknown_error() {
        let mut quote = errored_quote("q");
        quote.errors.clear();
        let tag = quote_tag(TagInput {
            quote: &quote,
            is_best: false,
            is_amount_entered: true,
            has_amount_with_positive_receive: false,
            overall_difference: None,
        });
        assert_eq!(
            tag,
            QuoteTag::Error {
                translation: default_error_translation()
            }
        );
    }

    #[test]
    fn test_best_and_overall_difference_tags() {
        let best = valid_quote("best", 1.0, "5000000");
        let other = valid_quote("other", 0.95, "4750000");

        let best_display = quote_display(comparison(&best, true, false), &context("1"), &catalog()).unwrap();
        assert_eq!(best_display.tag, QuoteTag::Best);
        assert!(best_display.is_expanded);

        let other_display =
            quote_display(comparison(&other, false, false), &context("1"), &catalog()).unwrap();
        match other_display.tag {
            QuoteTag::OverallDifference { value: Some(value) } => {
                assert!((value - -0.05).abs() < 1e-12)
            }
            tag => panic!("unexpected tag {:?}", tag),
        }
        assert!(!other_display.is_expanded);
        assert!((other_display.quote_amount_difference_decimal_percentage.unwrap() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_negative_ratio_tag() {
        let zero_receive = valid_quote("zero", 0.5, "0");
        let display = quote_display(comparison(&zero_receive, true, false), &context("1"), &catalog()).unwrap();
        assert_eq!(display.tag, QuoteTag::NegativeRatio);
        assert!(!display.is_actionable);

        let negative_ratio = valid_quote("neg", -0.1, "5000000");
        let display = quote_display(comparison(&negative_ratio, true, false), &context("1"), &catalog()).unwrap();
        assert_eq!(display.tag, QuoteTag::NegativeRatio);

        // Without an amount the warning does not apply
        let display = quote_display(comparison(&negative_ratio, true, false), &context("0"), &catalog()).unwrap();
        assert_eq!(display.tag, QuoteTag::Best);
    }

    #[test]
    fn test_large_receive_amount_is_best() {
        let mut quote = valid_quote("whale", 1.0, "0");
        if let Some(step) = quote.quote.as_mut().and_then(|q| q.steps.last_mut()) {
            step.buy_asset = asset(ETH, "ETH", 18);
            step.buy_amount_after_fees_crypto_base_unit = "100000000000000000000000000000".into();
        }

        let display = quote_display(comparison(&quote, true, false), &context("1"), &catalog()).unwrap();
        assert_eq!(display.total_receive_amount_crypto_precision, dec("100000000000"));
        assert!(display.has_amount_with_positive_receive);
        assert_eq!(display.tag, QuoteTag::Best);
        assert!(display.is_actionable);
    }

    #[test]
    fn test_display_metrics() {
        let mut quote = valid_quote("q", 1.0, "5000000");
        if let Some(trade_quote) = quote.quote.as_mut() {
            trade_quote.slippage_tolerance_percentage_decimal = Some("0.01".into());
        }

        let display = quote_display(comparison(&quote, true, true), &context("1"), &catalog()).unwrap();
        assert_eq!(display.title, "MAYAChain");
        assert_eq!(display.total_receive_amount_crypto_precision, dec("0.05"));
        assert_eq!(display.total_receive_amount_fiat_precision, dec("3000"));
        // 0.002 ETH at 3000
        assert_eq!(display.network_fee_user_currency_precision, Some(dec("6")));
        assert_eq!(display.total_estimated_execution_time_ms, Some(600_000));
        assert_eq!(display.num_hops, 1);
        assert!(display.is_actionable);
        assert!(!display.is_disabled);
        assert_eq!(
            display.slippage,
            Some(SlippageDisplay::Quoted {
                slippage_percentage_decimal: "0.01".into()
            })
        );
    }

    #[test]
    fn test_user_slippage_not_applied() {
        let quote = valid_quote("q", 1.0, "5000000");
        let mut ctx = context("1");
        ctx.user_slippage_percentage_decimal = Some("0.005".into());

        let display = quote_display(comparison(&quote, true, false), &ctx, &catalog()).unwrap();
        assert_eq!(
            display.slippage,
            Some(SlippageDisplay::NotApplied {
                user_slippage_percentage_decimal: "0.005".into(),
                quoted_slippage_percentage_decimal: None,
                swapper_name: SwapperName::Mayachain,
            })
        );
    }

    #[test]
    fn test_errored_quote_card() {
        let quote = errored_quote("e");
        let mut ctx = context("1");
        ctx.is_loading = false;

        let display = quote_display(comparison(&quote, false, false), &ctx, &catalog()).unwrap();
        assert_eq!(display.title, "THORChain");
        assert!(display.is_disabled);
        assert!(display.show_swapper);
        assert!(display.network_fee_user_currency_precision.is_none());
        assert!(display.total_estimated_execution_time_ms.is_none());
        assert_eq!(display.total_receive_amount_crypto_precision, Decimal::ZERO);

        let mut unknown = errored_quote("u");
        unknown.errors = vec![QuoteErrorEntry::new(QuoteErrorKind::UnknownSwapperError)];
        let display = quote_display(comparison(&unknown, false, false), &ctx, &catalog()).unwrap();
        assert!(!display.show_swapper);
    }

    #[test]
    fn test_missing_sell_chain_fee_asset_fails() {
        let quote = valid_quote("q", 1.0, "5000000");
        let ctx = QuoteContext::new(ChainId::new("eip155:56"), "1");
        let err = quote_display(comparison(&quote, true, false), &ctx, &catalog()).unwrap_err();
        assert_eq!(
            err,
            QuoteError::MissingChainFeeAsset {
                chain_id: "eip155:56".into()
            }
        );
    }

    #[test]
    fn test_display_ranked_quotes() {
        let ranked = rank_quotes(vec![
            valid_quote("b", 0.95, "4750000"),
            errored_quote("e"),
            valid_quote("a", 1.0, "5000000"),
        ]);
        let cards = display_ranked_quotes(&ranked, Some("b"), &context("1"), &catalog()).unwrap();

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].id, "a");
        assert_eq!(cards[0].tag, QuoteTag::Best);
        assert!(cards[1].is_active);
        assert!(cards[1].is_expanded);
        assert!(matches!(cards[2].tag, QuoteTag::Error { .. }));
    }
}
