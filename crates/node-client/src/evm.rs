//! Minimal EVM JSON-RPC client for ERC-20 allowance and rFOX staking reads

use std::collections::HashMap;
use std::time::Duration;

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use serde_json::json;
use swapdesk_core::{asset_namespaces, AssetId, KnownChainId, NodeError, ProtocolError};

use crate::{http_client, timed_request, Result};

/// `allowance(address,address)` selector
const ALLOWANCE_SELECTOR: &str = "dd62ed3e";

/// `getUnstakingRequestCount(address)` selector
const UNSTAKING_REQUEST_COUNT_SELECTOR: &str = "2c083600";

/// rFOX staking proxy contract on Arbitrum One
pub const RFOX_PROXY_CONTRACT: &str = "0xac2a4fd70bcd8bab0662960455c363735f0e2b56";

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<String>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// JSON-RPC client for a single EVM chain
#[derive(Debug, Clone)]
pub struct EvmRpcClient {
    http: reqwest::Client,
    rpc_url: String,
    timeout: Duration,
}

impl EvmRpcClient {
    pub fn new(rpc_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: http_client()?,
            rpc_url: rpc_url.into(),
            timeout,
        })
    }

    /// `eth_call` against the latest block, returning the raw hex result
    pub async fn eth_call(&self, to: &str, data: &str) -> Result<String> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "eth_call",
            "params": [{ "to": to, "data": data }, "latest"],
        });

        let response: RpcResponse = timed_request(self.timeout, async {
            let response = self
                .http
                .post(&self.rpc_url)
                .json(&body)
                .send()
                .await
                .map_err(|e| NodeError::Unreachable {
                    url: format!("{}: {}", self.rpc_url, e),
                })?;

            if !response.status().is_success() {
                return Err(NodeError::HttpStatus {
                    status: response.status().as_u16(),
                    url: self.rpc_url.clone(),
                });
            }

            response
                .json::<RpcResponse>()
                .await
                .map_err(|e| NodeError::ParseError(e.to_string()))
        })
        .await?;

        if let Some(error) = response.error {
            return Err(NodeError::ApiError {
                message: format!("eth_call failed ({}): {}", error.code, error.message),
            });
        }

        response
            .result
            .ok_or_else(|| NodeError::ParseError("eth_call response has no result".into()))
    }

    /// Read the ERC-20 allowance `owner` granted to `spender`, in base units
    pub async fn erc20_allowance(&self, token: &str, owner: &str, spender: &str) -> Result<U256> {
        let data = format!(
            "0x{}{}{}",
            ALLOWANCE_SELECTOR,
            encode_address(owner)?,
            encode_address(spender)?
        );
        let raw = self.eth_call(token, &data).await?;
        decode_uint256(&raw)
    }

    /// Number of pending unstaking requests `staker` has on a staking contract
    pub async fn unstaking_request_count(&self, contract: &str, staker: &str) -> Result<U256> {
        let data = format!("0x{}{}", UNSTAKING_REQUEST_COUNT_SELECTOR, encode_address(staker)?);
        let raw = self.eth_call(contract, &data).await?;
        decode_uint256(&raw)
    }
}

/// ABI-encode an address as a left-padded 32-byte word (hex, no prefix)
fn encode_address(address: &str) -> Result<String> {
    let stripped = address.trim_start_matches("0x");
    let bytes = hex::decode(stripped)
        .map_err(|e| NodeError::ParseError(format!("Invalid address {}: {}", address, e)))?;
    if bytes.len() != 20 {
        return Err(NodeError::ParseError(format!(
            "Invalid address {}: expected 20 bytes, got {}",
            address,
            bytes.len()
        )));
    }
    Ok(format!("{:0>64}", hex::encode(bytes)))
}

fn decode_uint256(raw: &str) -> Result<U256> {
    let digits = raw.trim_start_matches("0x");
    if digits.is_empty() {
        return Ok(U256::zero());
    }
    U256::from_str_radix(digits, 16)
        .map_err(|e| NodeError::ParseError(format!("Invalid uint256 {}: {:?}", raw, e)))
}

/// Outcome of an allowance lookup. Expected non-ERC-20 cases are variants, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Allowance {
    /// Allowance in base units, as a decimal string
    Amount(String),
    /// The asset does not live on an EVM chain
    NotEvmChain,
    /// The asset is the chain's native fee asset, which needs no approval
    IsFeeAsset,
}

/// Resolve the ERC-20 allowance of `from` towards `spender` for `asset_id`.
///
/// Missing arguments and missing RPC endpoints are hard errors.
pub async fn allowance_crypto_base_unit(
    rpc_urls: &HashMap<String, String>,
    timeout: Duration,
    asset_id: Option<&AssetId>,
    spender: Option<&str>,
    from: Option<&str>,
) -> swapdesk_core::Result<Allowance> {
    let asset_id = asset_id.ok_or(ProtocolError::MissingArgument { name: "assetId" })?;
    let spender = spender.ok_or(ProtocolError::MissingArgument { name: "spender" })?;
    let from = from.ok_or(ProtocolError::MissingArgument { name: "from address" })?;

    let parts = asset_id.parse()?;
    if !parts.chain_id.is_evm() {
        return Ok(Allowance::NotEvmChain);
    }

    let rpc_url = rpc_urls
        .get(parts.chain_id.as_str())
        .ok_or_else(|| NodeError::MissingRpcUrl {
            chain_id: parts.chain_id.to_string(),
        })?;

    if parts.chain_id.fee_asset_id().as_ref() == Some(asset_id) {
        return Ok(Allowance::IsFeeAsset);
    }

    if parts.asset_namespace != asset_namespaces::ERC20 {
        tracing::warn!(asset_id = %asset_id, "Allowance requested for a non-ERC-20 asset");
    }

    let client = EvmRpcClient::new(rpc_url.clone(), timeout)?;
    let allowance = client
        .erc20_allowance(&parts.asset_reference, from, spender)
        .await?;

    Ok(Allowance::Amount(allowance.to_string()))
}

/// Unstaking request count of a staking account on the Arbitrum rFOX proxy.
///
/// Skipped (`None`) when no address is given. The read is attempted once.
pub async fn rfox_unstaking_request_count(
    rpc_urls: &HashMap<String, String>,
    timeout: Duration,
    staking_address: Option<&str>,
) -> swapdesk_core::Result<Option<U256>> {
    let Some(staking_address) = staking_address.filter(|address| !address.is_empty()) else {
        return Ok(None);
    };

    let chain_id = KnownChainId::ArbitrumMainnet.as_str();
    let rpc_url = rpc_urls.get(chain_id).ok_or_else(|| NodeError::MissingRpcUrl {
        chain_id: chain_id.to_string(),
    })?;

    let client = EvmRpcClient::new(rpc_url.clone(), timeout)?;
    let count = client
        .unstaking_request_count(RFOX_PROXY_CONTRACT, staking_address)
        .await?;

    tracing::debug!(%count, "Fetched rFOX unstaking request count");
    Ok(Some(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server;
    use axum::{routing::post, Json, Router};

    const OWNER: &str = "0x1111111111111111111111111111111111111111";
    const SPENDER: &str = "0x2222222222222222222222222222222222222222";
    const USDC: &str = "eip155:1/erc20:0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";

    async fn lookup(
        urls: &HashMap<String, String>,
        asset_id: Option<&AssetId>,
        spender: Option<&str>,
    ) -> swapdesk_core::Result<Allowance> {
        allowance_crypto_base_unit(urls, Duration::from_secs(5), asset_id, spender, Some(OWNER))
            .await
    }

    #[test]
    fn test_encode_address() {
        let encoded = encode_address(OWNER).unwrap();
        assert_eq!(encoded.len(), 64);
        assert!(encoded.starts_with("000000000000000000000000"));
        assert!(encoded.ends_with("1111111111111111111111111111111111111111"));

        assert!(encode_address("0x1234").is_err());
        assert!(encode_address("0xzz").is_err());
    }

    #[test]
    fn test_decode_uint256() {
        assert_eq!(decode_uint256("0x").unwrap(), U256::zero());
        assert_eq!(
            decode_uint256("0x00000000000000000000000000000000000000000000000000000000000003e8")
                .unwrap(),
            U256::from(1000u64)
        );
        assert_eq!(
            decode_uint256(&format!("0x{}", "f".repeat(64))).unwrap(),
            U256::MAX
        );
    }

    #[tokio::test]
    async fn test_missing_arguments_are_errors() {
        let urls = HashMap::new();
        let asset = AssetId::new(USDC);
        let err = lookup(&urls, None, Some(SPENDER))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            swapdesk_core::Error::Protocol(ProtocolError::MissingArgument { name: "assetId" })
        ));

        let err = lookup(&urls, Some(&asset), None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            swapdesk_core::Error::Protocol(ProtocolError::MissingArgument { name: "spender" })
        ));
    }

    #[tokio::test]
    async fn test_non_evm_and_fee_assets() {
        let mut urls = HashMap::new();
        urls.insert("eip155:1".to_string(), "http://127.0.0.1:1".to_string());

        let btc = AssetId::new("bip122:000000000019d6689c085ae165831e93/slip44:0");
        let outcome = lookup(&urls, Some(&btc), Some(SPENDER))
            .await
            .unwrap();
        assert_eq!(outcome, Allowance::NotEvmChain);

        let eth = AssetId::new("eip155:1/slip44:60");
        let outcome = lookup(&urls, Some(&eth), Some(SPENDER))
            .await
            .unwrap();
        assert_eq!(outcome, Allowance::IsFeeAsset);
    }

    #[tokio::test]
    async fn test_missing_rpc_url() {
        let urls = HashMap::new();
        let asset = AssetId::new(USDC);
        let err = lookup(&urls, Some(&asset), Some(SPENDER))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            swapdesk_core::Error::Node(NodeError::MissingRpcUrl { .. })
        ));
    }

    #[tokio::test]
    async fn test_erc20_allowance_over_rpc() {
        let app = Router::new().route(
            "/",
            post(|Json(body): Json<serde_json::Value>| async move {
                let data = body["params"][0]["data"].as_str().unwrap_or_default();
                assert!(data.starts_with("0xdd62ed3e"));
                assert_eq!(data.len(), 2 + 8 + 64 + 64);
                Json(json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "result": "0x00000000000000000000000000000000000000000000000000000000000f4240"
                }))
            }),
        );
        let url = test_server::spawn(app).await;

        let mut urls = HashMap::new();
        urls.insert("eip155:1".to_string(), url);

        let asset = AssetId::new(USDC);
        let outcome = lookup(&urls, Some(&asset), Some(SPENDER))
            .await
            .unwrap();
        assert_eq!(outcome, Allowance::Amount("1000000".to_string()));
    }

    #[tokio::test]
    async fn test_unstaking_request_count_over_rpc() {
        let app = Router::new().route(
            "/",
            post(|Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body["params"][0]["to"], RFOX_PROXY_CONTRACT);
                let data = body["params"][0]["data"].as_str().unwrap_or_default();
                assert_eq!(
                    data,
                    "0x2c083600000000000000000000000000\
                     1111111111111111111111111111111111111111"
                );
                Json(json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "result": "0x0000000000000000000000000000000000000000000000000000000000000003"
                }))
            }),
        );
        let url = test_server::spawn(app).await;

        let mut urls = HashMap::new();
        urls.insert("eip155:42161".to_string(), url);

        let count = rfox_unstaking_request_count(&urls, Duration::from_secs(5), Some(OWNER))
            .await
            .unwrap();
        assert_eq!(count, Some(U256::from(3u64)));
    }

    #[tokio::test]
    async fn test_unstaking_request_count_skipped_without_address() {
        let urls = HashMap::new();
        for address in [None, Some("")] {
            let count = rfox_unstaking_request_count(&urls, Duration::from_secs(5), address)
                .await
                .unwrap();
            assert_eq!(count, None);
        }

        let err = rfox_unstaking_request_count(&urls, Duration::from_secs(5), Some(OWNER))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            swapdesk_core::Error::Node(NodeError::MissingRpcUrl { ref chain_id }) if chain_id == "eip155:42161"
        ));
    }

    #[tokio::test]
    async fn test_rpc_error_surfaces() {
        let app = Router::new().route(
            "/",
            post(|| async {
                Json(json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "error": { "code": -32000, "message": "execution reverted" }
                }))
            }),
        );
        let url = test_server::spawn(app).await;

        let client = EvmRpcClient::new(url, Duration::from_secs(5)).unwrap();
        let err = client
            .erc20_allowance("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48", OWNER, SPENDER)
            .await
            .unwrap_err();
        assert!(matches!(err, NodeError::ApiError { .. }));
    }
}
