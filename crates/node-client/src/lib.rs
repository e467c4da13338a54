//! node-client: HTTP clients for the remote nodes the swappers talk to
//!
//! Every request is wrapped in a timeout so a slow node degrades into an
//! error instead of a hung caller.

pub mod evm;
pub mod mayanode;

use std::time::Duration;

use serde::de::DeserializeOwned;
use swapdesk_core::NodeError;

pub use evm::{
    allowance_crypto_base_unit, rfox_unstaking_request_count, Allowance, EvmRpcClient,
    RFOX_PROXY_CONTRACT,
};
pub use mayanode::{MayanodeClient, MayanodePool, PoolStatus};

/// Default timeout for node API calls (30 seconds).
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Result type for node client operations
pub type Result<T> = std::result::Result<T, NodeError>;

/// Build the shared HTTP client
pub(crate) fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("swapdesk/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| NodeError::ApiError {
            message: format!("Failed to build HTTP client: {}", e),
        })
}

/// GET a JSON document, mapping transport, status and decode failures to NodeError
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<T> {
    timed_request(timeout, async {
        let response = http.get(url).send().await.map_err(|e| NodeError::Unreachable {
            url: format!("{}: {}", url, e),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NodeError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| NodeError::ParseError(e.to_string()))
    })
    .await
}

/// Wrap a node API call with a timeout.
pub(crate) async fn timed_request<T>(
    timeout: Duration,
    fut: impl std::future::Future<Output = Result<T>>,
) -> Result<T> {
    tokio::time::timeout(timeout, fut)
        .await
        .map_err(|_| NodeError::Timeout {
            secs: timeout.as_secs(),
        })?
}

/// Join a base URL and a path without doubling slashes
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://node.example/", "/lcd/mayachain/pools"),
            "https://node.example/lcd/mayachain/pools"
        );
        assert_eq!(join_url("http://a", "b"), "http://a/b");
    }

    #[tokio::test]
    async fn test_timed_request_times_out() {
        let result: Result<()> = timed_request(Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(NodeError::Timeout { .. })));
    }
}
