//! Mayachain asset endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use swapdesk_core::{Asset, AssetId, BuyAssetBySellIdInput, Swapper};

use crate::dto::{ApiError, BuyableAssetsRequest, SupportedAssetsResponse};
use crate::AppState;

/// Create Mayachain routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/assets", get(get_supported_assets))
        .route("/assets/sellable", get(get_sellable_assets))
        .route("/assets/buyable", post(get_buyable_assets))
}

/// GET /mayachain/assets - Sellable and buyable asset ids
pub async fn get_supported_assets(State(state): State<AppState>) -> Json<SupportedAssetsResponse> {
    let config = state.config().await;
    let supported = state.mayachain().supported_assets(&config.swapper).await;

    Json(SupportedAssetsResponse {
        sell: supported.sell,
        buy: supported.buy,
    })
}

/// GET /mayachain/assets/sellable - Asset ids Mayachain can sell
pub async fn get_sellable_assets(State(state): State<AppState>) -> Json<Vec<AssetId>> {
    let config = state.config().await;
    Json(
        state
            .mayachain()
            .filter_asset_ids_by_sellable(&[], &config.swapper)
            .await,
    )
}

/// POST /mayachain/assets/buyable - Candidates that can be bought with the sell asset
pub async fn get_buyable_assets(
    State(state): State<AppState>,
    Json(request): Json<BuyableAssetsRequest>,
) -> Result<Json<Vec<AssetId>>, (StatusCode, Json<ApiError>)> {
    let sell_asset = match request
        .assets
        .iter()
        .find(|asset| asset.asset_id == request.sell_asset_id)
    {
        Some(asset) => asset.clone(),
        None => asset_from_id(&request.sell_asset_id)?,
    };

    let config = state.config().await;
    let buyable = state
        .mayachain()
        .filter_buy_assets_by_sell_asset_id(BuyAssetBySellIdInput {
            assets: &request.assets,
            sell_asset: &sell_asset,
            config: &config.swapper,
        })
        .await;

    Ok(Json(buyable))
}

/// Minimal asset for a sell asset that is not among the candidates
fn asset_from_id(asset_id: &AssetId) -> Result<Asset, (StatusCode, Json<ApiError>)> {
    let chain_id = asset_id.chain_id().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("invalid_asset_id", e.to_string())),
        )
    })?;

    Ok(Asset {
        asset_id: asset_id.clone(),
        chain_id,
        symbol: String::new(),
        name: String::new(),
        precision: 0,
    })
}
