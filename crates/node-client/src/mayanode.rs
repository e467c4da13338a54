//! Mayanode REST client

use std::time::Duration;

use serde::{Deserialize, Serialize};
use swapdesk_core::SwapperConfig;

use crate::{get_json, http_client, join_url, Result};

/// Pool list endpoint, relative to the node base URL
pub const POOLS_PATH: &str = "/lcd/mayachain/pools";

/// Pool status as reported by Mayanode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolStatus {
    Available,
    Staged,
    Suspended,
    #[serde(other)]
    Unknown,
}

/// Pool record from `/lcd/mayachain/pools`. Fields we do not use are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MayanodePool {
    /// Pool asset notation, e.g. `ETH.USDC-0XA0B86991C6218B36C1D19D4A2E9EB0CE3606EB48`
    pub asset: String,
    pub status: PoolStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_asset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_cacao: Option<String>,
}

impl MayanodePool {
    pub fn is_available(&self) -> bool {
        self.status == PoolStatus::Available
    }
}

/// Client for a single Mayanode
#[derive(Debug, Clone)]
pub struct MayanodeClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl MayanodeClient {
    /// Create a client for the node configured in `config`
    pub fn new(config: &SwapperConfig) -> Result<Self> {
        Ok(Self {
            http: http_client()?,
            base_url: config.mayachain_node_url.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        })
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all pools known to the node, in any status
    pub async fn get_pools(&self) -> Result<Vec<MayanodePool>> {
        let url = join_url(&self.base_url, POOLS_PATH);
        let pools: Vec<MayanodePool> = get_json(&self.http, &url, self.timeout).await?;
        tracing::debug!(count = pools.len(), url = %url, "Fetched Mayanode pools");
        Ok(pools)
    }
}
