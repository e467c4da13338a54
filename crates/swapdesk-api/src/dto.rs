//! Data Transfer Objects for API requests and responses

use std::collections::HashMap;

use axum::{http::StatusCode, Json};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use swapdesk_core::{Asset, AssetId};
use trade_quote::{ApiQuote, QuoteContext, SelectionOutcome, TradeQuoteDisplay};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Sellable and buyable assets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportedAssetsResponse {
    pub sell: Vec<AssetId>,
    pub buy: Vec<AssetId>,
}

/// Buy-side filter request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyableAssetsRequest {
    /// Candidate buy assets
    pub assets: Vec<Asset>,
    pub sell_asset_id: AssetId,
}

/// Quote comparison request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareQuotesRequest {
    pub quotes: Vec<ApiQuote>,
    pub context: QuoteContext,
    /// User-currency prices by asset id
    #[serde(default)]
    pub prices: HashMap<AssetId, Decimal>,
}

/// Ranked quote cards
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareQuotesResponse {
    pub quotes: Vec<TradeQuoteDisplay>,
    pub best_quote_id: Option<String>,
    pub active_quote_id: Option<String>,
}

/// Quote selection result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectQuoteResponse {
    pub outcome: SelectionOutcome,
    pub active_quote_id: Option<String>,
}

/// ERC-20 allowance request; missing fields are reported as errors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowanceRequest {
    #[serde(default)]
    pub asset_id: Option<AssetId>,
    #[serde(default)]
    pub spender: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
}

/// rFOX unstaking request count query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnstakingRequestCountQuery {
    #[serde(default)]
    pub address: Option<String>,
}

/// Pending unstaking requests as a decimal string; null when skipped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnstakingRequestCountResponse {
    pub count: Option<String>,
}

/// Generic API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("internal_error", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("not_found", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("bad_request", message)
    }

    /// Pair with an HTTP status, falling back to 500 for unknown codes
    pub fn with_status(self, status: u16) -> (StatusCode, Json<ApiError>) {
        (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(self),
        )
    }
}

impl From<swapdesk_core::Error> for ApiError {
    fn from(e: swapdesk_core::Error) -> Self {
        Self::new(e.error_code(), e.to_string())
    }
}

impl From<trade_quote::QuoteError> for ApiError {
    fn from(e: trade_quote::QuoteError) -> Self {
        Self::new(e.error_code(), e.to_string())
    }
}
