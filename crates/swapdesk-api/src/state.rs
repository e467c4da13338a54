//! Application state shared across API handlers

use std::sync::Arc;
use std::time::Duration;

use mayachain::{MayachainSwapper, MayanodePoolSource, PoolSource};
use swapdesk_core::AppConfig;
use tokio::sync::RwLock;
use trade_quote::{RankedQuotes, TradeQuoteSlice};

/// Latest ranked quotes and the quote selected among them
#[derive(Debug, Default)]
pub struct QuoteBoard {
    pub ranked: RankedQuotes,
    pub slice: TradeQuoteSlice,
}

impl QuoteBoard {
    pub fn active_quote_id(&self) -> Option<String> {
        self.slice.active_quote().map(|quote| quote.id.clone())
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: RwLock<AppConfig>,
    swapper: MayachainSwapper<Arc<dyn PoolSource>>,
    quotes: RwLock<QuoteBoard>,
}

impl AppState {
    /// Create a new application state with default config
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create with a specific config
    pub fn with_config(config: AppConfig) -> Self {
        Self::with_pool_source(config, Arc::new(MayanodePoolSource))
    }

    /// Create with a specific config and pool source
    pub fn with_pool_source(config: AppConfig, pool_source: Arc<dyn PoolSource>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config: RwLock::new(config),
                swapper: MayachainSwapper::with_pool_source(pool_source),
                quotes: RwLock::new(QuoteBoard::default()),
            }),
        }
    }

    /// Get current config
    pub async fn config(&self) -> AppConfig {
        self.inner.config.read().await.clone()
    }

    /// Replace the whole config
    pub async fn set_config(&self, config: AppConfig) {
        *self.inner.config.write().await = config;
    }

    /// Timeout for outbound node and RPC calls
    pub async fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.inner.config.read().await.swapper.request_timeout_secs)
    }

    pub fn mayachain(&self) -> &MayachainSwapper<Arc<dyn PoolSource>> {
        &self.inner.swapper
    }

    pub fn quotes(&self) -> &RwLock<QuoteBoard> {
        &self.inner.quotes
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
