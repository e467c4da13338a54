//! Configuration types for Swapdesk

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Swapper configuration consumed by the swapper modules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapperConfig {
    /// Mayanode base URL (e.g., "https://mayanode.mayachain.info")
    #[serde(default = "default_mayachain_node_url")]
    pub mayachain_node_url: String,

    /// Include the bundled long-tail token list in the supported assets
    #[serde(default)]
    pub mayachain_longtail_enabled: bool,

    /// Timeout for node requests, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_mayachain_node_url() -> String {
    "https://mayanode.mayachain.info".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for SwapperConfig {
    fn default() -> Self {
        Self {
            mayachain_node_url: default_mayachain_node_url(),
            mayachain_longtail_enabled: false,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Swapper settings
    #[serde(default)]
    pub swapper: SwapperConfig,

    /// JSON-RPC endpoints keyed by EVM chain id (e.g. "eip155:1")
    #[serde(default)]
    pub evm_rpc_urls: HashMap<String, String>,

    /// API server port
    #[serde(default = "default_api_port")]
    pub api_port: u16,
}

fn default_api_port() -> u16 {
    18420
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            swapper: SwapperConfig::default(),
            evm_rpc_urls: HashMap::new(),
            api_port: default_api_port(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON configuration document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// JSON-RPC URL for an EVM chain
    pub fn evm_rpc_url(&self, chain_id: &str) -> Option<&str> {
        self.evm_rpc_urls.get(chain_id).map(String::as_str)
    }
}
