//! Long-tail token allow-list
//!
//! Tokens tradable through Mayachain aggregator routes without a dedicated pool.
//! The list is generated offline and embedded at build time.

use swapdesk_core::{AssetId, ProtocolError};

const LONGTAIL_TOKENS_JSON: &str = include_str!("../data/longtail_tokens.json");

/// Parse the embedded long-tail list.
///
/// Entries that are not well-formed asset ids are skipped with a warning.
pub fn longtail_asset_ids() -> Result<Vec<AssetId>, ProtocolError> {
    let raw: Vec<String> =
        serde_json::from_str(LONGTAIL_TOKENS_JSON).map_err(|e| ProtocolError::InvalidBundledData {
            message: format!("long-tail token list: {}", e),
        })?;

    Ok(raw
        .into_iter()
        .map(AssetId::new)
        .filter(|asset_id| match asset_id.parse() {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(asset_id = %asset_id, error = %e, "Skipping malformed long-tail token");
                false
            }
        })
        .collect())
}
