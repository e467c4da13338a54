//! Quote fixtures shared by the unit tests

use swapdesk_core::{Asset, AssetId, SwapperName};

use crate::types::{ApiQuote, FeeData, QuoteErrorEntry, QuoteErrorKind, TradeQuote, TradeQuoteStep};

pub const BTC: &str = "bip122:000000000019d6689c085ae165831e93/slip44:0";
pub const ETH: &str = "eip155:1/slip44:60";

pub fn asset(asset_id: &str, symbol: &str, precision: u32) -> Asset {
    let asset_id = AssetId::new(asset_id);
    Asset {
        chain_id: asset_id.chain_id().unwrap(),
        asset_id,
        symbol: symbol.to_string(),
        name: symbol.to_string(),
        precision,
    }
}

/// ETH -> BTC quote receiving `buy_amount_sats`
pub fn trade_quote(id: &str, buy_amount_sats: &str) -> TradeQuote {
    TradeQuote {
        id: id.to_string(),
        steps: vec![TradeQuoteStep {
            source: "MAYAChain".into(),
            sell_asset: asset(ETH, "ETH", 18),
            buy_asset: asset(BTC, "BTC", 8),
            sell_amount_including_protocol_fees_crypto_base_unit: "1000000000000000000".into(),
            buy_amount_after_fees_crypto_base_unit: buy_amount_sats.into(),
            fee_data: FeeData {
                network_fee_crypto_base_unit: Some("2000000000000000".into()),
                protocol_fees: Default::default(),
            },
            estimated_execution_time_ms: Some(600_000),
        }],
        slippage_tolerance_percentage_decimal: None,
    }
}

pub fn valid_quote(id: &str, ratio: f64, buy_amount_sats: &str) -> ApiQuote {
    ApiQuote {
        id: id.to_string(),
        swapper_name: SwapperName::Mayachain,
        quote: Some(trade_quote(id, buy_amount_sats)),
        errors: vec![],
        input_output_ratio: ratio,
    }
}

pub fn errored_quote(id: &str) -> ApiQuote {
    ApiQuote {
        id: id.to_string(),
        swapper_name: SwapperName::Thorchain,
        quote: None,
        errors: vec![QuoteErrorEntry::new(QuoteErrorKind::NoRouteFound)],
        input_output_ratio: 0.0,
    }
}
