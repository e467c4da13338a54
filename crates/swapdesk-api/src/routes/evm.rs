//! EVM helper endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use node_client::{allowance_crypto_base_unit, rfox_unstaking_request_count, Allowance};

use crate::dto::{
    AllowanceRequest, ApiError, UnstakingRequestCountQuery, UnstakingRequestCountResponse,
};
use crate::AppState;

/// Create EVM routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/allowance", post(get_allowance))
        .route(
            "/rfox/unstaking-request-count",
            get(get_unstaking_request_count),
        )
}

/// POST /evm/allowance - ERC-20 allowance granted by `from` to `spender`
pub async fn get_allowance(
    State(state): State<AppState>,
    Json(request): Json<AllowanceRequest>,
) -> Result<Json<Allowance>, (StatusCode, Json<ApiError>)> {
    let config = state.config().await;
    let timeout = state.request_timeout().await;

    let allowance = allowance_crypto_base_unit(
        &config.evm_rpc_urls,
        timeout,
        request.asset_id.as_ref(),
        request.spender.as_deref(),
        request.from.as_deref(),
    )
    .await
    .map_err(|e| {
        tracing::warn!("Allowance query failed: {}", e);
        let status = e.status_code();
        ApiError::from(e).with_status(status)
    })?;

    Ok(Json(allowance))
}

/// GET /evm/rfox/unstaking-request-count?address= - Pending rFOX unstaking requests
pub async fn get_unstaking_request_count(
    State(state): State<AppState>,
    Query(query): Query<UnstakingRequestCountQuery>,
) -> Result<Json<UnstakingRequestCountResponse>, (StatusCode, Json<ApiError>)> {
    let config = state.config().await;
    let timeout = state.request_timeout().await;

    let count = rfox_unstaking_request_count(&config.evm_rpc_urls, timeout, query.address.as_deref())
        .await
        .map_err(|e| {
            tracing::warn!("Unstaking request count query failed: {}", e);
            let status = e.status_code();
            ApiError::from(e).with_status(status)
        })?;

    Ok(Json(UnstakingRequestCountResponse {
        count: count.map(|count| count.to_string()),
    }))
}
