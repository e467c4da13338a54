//! Error types for Swapdesk

use thiserror::Error;

/// Core errors that can occur in Swapdesk
#[derive(Debug, Error)]
pub enum Error {
    #[error("Node error: {0}")]
    Node(#[from] NodeError),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] TxError),

    #[error("Asset id error: {0}")]
    AssetId(#[from] AssetIdError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Remote node and RPC errors
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("Node unreachable at {url}")]
    Unreachable { url: String },

    #[error("Node returned error: {message}")]
    ApiError { message: String },

    #[error("Node returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("No RPC endpoint configured for chain {chain_id}")]
    MissingRpcUrl { chain_id: String },
}

/// Asset identifier parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetIdError {
    #[error("Asset id has no chain/asset separator: {0}")]
    MissingSeparator(String),

    #[error("Invalid chain id: {0}")]
    InvalidChainId(String),

    #[error("Invalid asset type: {0}")]
    InvalidAssetType(String),
}

/// Protocol-specific errors
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Missing required argument: {name}")]
    MissingArgument { name: &'static str },

    #[error("Invalid bundled data: {message}")]
    InvalidBundledData { message: String },
}

/// Transaction execution errors
#[derive(Debug, Error)]
pub enum TxError {
    #[error("Transaction broadcast failed: {message}")]
    BroadcastFailed { message: String },
}

/// Result type alias for Swapdesk operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Node(NodeError::MissingRpcUrl { .. }) => "missing_rpc_url",
            Self::Node(NodeError::Timeout { .. }) => "node_timeout",
            Self::Node(_) => "node_error",
            Self::Protocol(e) => e.error_code(),
            Self::Transaction(_) => "transaction_failed",
            Self::AssetId(_) => "invalid_asset_id",
            Self::Config(_) => "config_error",
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Node(NodeError::MissingRpcUrl { .. }) => 422,
            Self::Node(NodeError::Timeout { .. }) => 504,
            Self::Node(_) | Self::Transaction(_) => 502,
            Self::Protocol(e) => e.status_code(),
            Self::AssetId(_) => 400,
            Self::Config(_) => 500,
        }
    }
}

impl ProtocolError {
    /// Get an HTTP-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingArgument { .. } => "missing_argument",
            Self::InvalidBundledData { .. } => "invalid_bundled_data",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingArgument { .. } => 400,
            Self::InvalidBundledData { .. } => 500,
        }
    }
}
