//! Swapdesk application library

pub mod config;

use swapdesk_api::AppState;

/// Run the API server until shutdown
pub async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("swapdesk=debug".parse()?)
                .add_directive("mayachain=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .init();

    let config = config::load_config()?;

    tracing::info!(
        node_url = %config.swapper.mayachain_node_url,
        longtail_enabled = config.swapper.mayachain_longtail_enabled,
        evm_chains = config.evm_rpc_urls.len(),
        "Starting Swapdesk"
    );

    let port = config.api_port;
    swapdesk_api::start_server(AppState::with_config(config), port).await?;

    Ok(())
}
