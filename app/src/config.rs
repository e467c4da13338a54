//! Configuration loading
//!
//! An optional JSON file named by `SWAPDESK_CONFIG`, then environment
//! overrides on top.

use std::path::Path;

use anyhow::{Context, Result};
use swapdesk_core::AppConfig;

pub const CONFIG_PATH_VAR: &str = "SWAPDESK_CONFIG";
pub const NODE_URL_VAR: &str = "MAYACHAIN_NODE_URL";
pub const LONGTAIL_VAR: &str = "FEATURE_MAYACHAINSWAP_LONGTAIL";
pub const API_PORT_VAR: &str = "SWAPDESK_API_PORT";

/// Load configuration from the process environment
pub fn load_config() -> Result<AppConfig> {
    let env = |key: &str| std::env::var(key).ok();
    let path = env(CONFIG_PATH_VAR);
    load_config_from(path.as_deref().map(Path::new), env)
}

/// Load configuration from `path` (if any) and apply overrides from `env`
pub fn load_config_from(
    path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            AppConfig::from_json(&raw)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => AppConfig::default(),
    };

    if let Some(url) = env(NODE_URL_VAR) {
        config.swapper.mayachain_node_url = url;
    }
    if let Some(flag) = env(LONGTAIL_VAR) {
        config.swapper.mayachain_longtail_enabled = parse_flag(&flag)
            .with_context(|| format!("{} must be a boolean, got {:?}", LONGTAIL_VAR, flag))?;
    }
    if let Some(port) = env(API_PORT_VAR) {
        config.api_port = port
            .trim()
            .parse()
            .with_context(|| format!("{} must be a port number, got {:?}", API_PORT_VAR, port))?;
    }

    Ok(config)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
