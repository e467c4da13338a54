//! Quote comparison errors

use thiserror::Error;

/// Failures that mean the asset catalog is inconsistent with the quotes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("Missing fee asset for asset {asset_id}")]
    MissingFeeAsset { asset_id: String },

    #[error("No fee asset found for chain {chain_id}")]
    MissingChainFeeAsset { chain_id: String },
}

impl QuoteError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingFeeAsset { .. } | Self::MissingChainFeeAsset { .. } => "missing_fee_asset",
        }
    }

    /// These are catalog invariant violations, never caller mistakes
    pub fn status_code(&self) -> u16 {
        500
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
