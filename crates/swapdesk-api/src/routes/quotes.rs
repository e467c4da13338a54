//! Trade quote comparison and selection endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use trade_quote::{display_ranked_quotes, rank_quotes, ApiQuote, AssetCatalog};

use crate::dto::{ApiError, CompareQuotesRequest, CompareQuotesResponse, SelectQuoteResponse};
use crate::AppState;

/// Create quote routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/compare", post(compare_quotes))
        .route("/:id/select", post(select_quote))
        .route("/active", get(get_active_quote))
}

/// POST /quotes/compare - Rank quotes and derive their display cards
///
/// The ranking replaces the previous one and becomes the basis for selection.
pub async fn compare_quotes(
    State(state): State<AppState>,
    Json(request): Json<CompareQuotesRequest>,
) -> Result<Json<CompareQuotesResponse>, (StatusCode, Json<ApiError>)> {
    let catalog = AssetCatalog::with_known_fee_assets().with_prices(request.prices);
    let ranked = rank_quotes(request.quotes);

    let mut board = state.quotes().write().await;
    let active_quote_id = board.active_quote_id();

    let cards = display_ranked_quotes(
        &ranked,
        active_quote_id.as_deref(),
        &request.context,
        &catalog,
    )
    .map_err(|e| {
        tracing::error!("Quote comparison failed: {}", e);
        let status = e.status_code();
        ApiError::from(e).with_status(status)
    })?;

    let best_quote_id = ranked.best().map(|quote| quote.id.clone());
    board.ranked = ranked;

    Ok(Json(CompareQuotesResponse {
        quotes: cards,
        best_quote_id,
        active_quote_id,
    }))
}

/// POST /quotes/:id/select - Toggle the active quote
pub async fn select_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SelectQuoteResponse>, (StatusCode, Json<ApiError>)> {
    let mut board = state.quotes().write().await;

    let quote = board.ranked.get(&id).cloned().ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Quote {} not found", id))),
        )
    })?;
    let is_best = board.ranked.is_best(&id);

    let outcome = board.slice.select_quote(&quote, is_best);
    tracing::debug!(quote_id = %id, is_best, ?outcome, "Quote selected");

    Ok(Json(SelectQuoteResponse {
        outcome,
        active_quote_id: board.active_quote_id(),
    }))
}

/// GET /quotes/active - Currently selected quote, or null
pub async fn get_active_quote(State(state): State<AppState>) -> Json<Option<ApiQuote>> {
    Json(state.quotes().read().await.slice.active_quote().cloned())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::routes::test_helpers::{get, post_json, send};
    use crate::{create_app, AppState};

    fn asset(asset_id: &str, chain_id: &str, precision: u32) -> Value {
        json!({ "assetId": asset_id, "chainId": chain_id, "symbol": "", "precision": precision })
    }

    fn quote(id: &str, ratio: f64, buy_amount_sats: &str) -> Value {
        json!({
            "id": id,
            "swapperName": "MAYAChain",
            "quote": {
                "id": id,
                "steps": [{
                    "source": "MAYAChain",
                    "sellAsset": asset("eip155:1/slip44:60", "eip155:1", 18),
                    "buyAsset": asset(
                        "bip122:000000000019d6689c085ae165831e93/slip44:0",
                        "bip122:000000000019d6689c085ae165831e93",
                        8
                    ),
                    "sellAmountIncludingProtocolFeesCryptoBaseUnit": "1000000000000000000",
                    "buyAmountAfterFeesCryptoBaseUnit": buy_amount_sats,
                    "feeData": { "networkFeeCryptoBaseUnit": "1000000000000000" },
                    "estimatedExecutionTimeMs": 900000
                }]
            },
            "errors": [],
            "inputOutputRatio": ratio
        })
    }

    fn compare_request() -> Value {
        json!({
            "quotes": [
                quote("second", 0.95, "4750000"),
                {
                    "id": "failed",
                    "swapperName": "THORChain",
                    "errors": [{ "error": "TradingHalted" }],
                    "inputOutputRatio": 0.0
                },
                quote("first", 1.0, "5000000"),
            ],
            "context": {
                "sellAssetChainId": "eip155:1",
                "sellAmountCryptoPrecision": "1"
            },
            "prices": { "eip155:1/slip44:60": "3000" }
        })
    }

    #[tokio::test]
    async fn test_compare_ranks_and_tags() {
        let app = create_app(AppState::new());
        let (status, body) = send(app, post_json("/quotes/compare", compare_request())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bestQuoteId"], "first");
        let cards = body["quotes"].as_array().unwrap();
        assert_eq!(cards[0]["id"], "first");
        assert_eq!(cards[0]["tag"]["kind"], "best");
        assert_eq!(cards[0]["isBest"], true);
        assert_eq!(cards[0]["swapperName"], "MAYAChain");
        assert!(cards[0].get("is_best").is_none());
        assert_eq!(cards[1]["tag"]["kind"], "overall_difference");
        assert!((cards[1]["tag"]["value"].as_f64().unwrap() + 0.05).abs() < 1e-9);
        assert_eq!(cards[2]["tag"]["kind"], "error");
    }

    #[tokio::test]
    async fn test_compare_missing_sell_chain_fee_asset() {
        let mut request = compare_request();
        request["context"]["sellAssetChainId"] = json!("eip155:56");

        let (status, body) = send(
            create_app(AppState::new()),
            post_json("/quotes/compare", request),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "missing_fee_asset");
    }

    #[tokio::test]
    async fn test_select_toggles_active_quote() {
        let state = AppState::new();
        let app = create_app(state);
        send(app.clone(), post_json("/quotes/compare", compare_request())).await;

        let (_, body) = send(app.clone(), post_json("/quotes/second/select", json!({}))).await;
        assert_eq!(body["outcome"], "activated");
        assert_eq!(body["activeQuoteId"], "second");

        let (_, active) = send(app.clone(), get("/quotes/active")).await;
        assert_eq!(active["id"], "second");

        let (_, body) = send(app.clone(), post_json("/quotes/second/select", json!({}))).await;
        assert_eq!(body["outcome"], "cleared");
        assert_eq!(body["activeQuoteId"], Value::Null);

        send(app.clone(), post_json("/quotes/first/select", json!({}))).await;
        let (_, body) = send(app.clone(), post_json("/quotes/first/select", json!({}))).await;
        assert_eq!(body["outcome"], "unchanged");
        assert_eq!(body["activeQuoteId"], "first");

        let (_, body) = send(app.clone(), post_json("/quotes/failed/select", json!({}))).await;
        assert_eq!(body["outcome"], "ignored");
        assert_eq!(body["activeQuoteId"], "first");
    }

    #[tokio::test]
    async fn test_select_unknown_quote() {
        let (status, body) = send(
            create_app(AppState::new()),
            post_json("/quotes/nope/select", json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "not_found");

        let (_, active) = send(create_app(AppState::new()), get("/quotes/active")).await;
        assert_eq!(active, Value::Null);
    }
}
