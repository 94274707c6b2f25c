//! Daemon entry point for the holding invoice MCP server.
//!
//! Loads configuration from the command line and environment, builds the
//! read-only dataset once, optionally exports the OpenAPI document, and serves
//! MCP over stdio and/or streamable HTTP alongside the optional REST surface.

mod config;
mod logging;

use hold_api::{ApiServer, ApiServerConfig};
use hold_core::control::HoldControlPlane;
use hold_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use hold_store::{DatasetError, HoldingDataset};
use tokio::task::JoinSet;
use tracing::info;

use crate::config::HoldConfig;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = HoldConfig::from_args()?;
    logging::init(&config.log_filter)?;

    let dataset = load_dataset(&config)?;
    info!(invoices = dataset.len(), "loaded holding dataset");
    let control = HoldControlPlane::from_dataset(dataset);

    let api_config = api_config(&config);
    if let Some(path) = config.openapi_path.as_ref() {
        hold_api::openapi::write_document(path, &api_config.server_url())?;
    }
    if config.openapi_only {
        return Ok(());
    }

    let mut servers: JoinSet<Result<(), BoxError>> = JoinSet::new();
    if config.enable_stdio {
        servers.spawn(serve_stdio(control.clone()));
    }
    if config.mcp_serve {
        let mcp_config = McpHttpServerConfig::new(config.mcp_http_addr)
            .with_stateful_mode(config.mcp_stateful);
        servers.spawn(serve_streamable_http(control.clone(), mcp_config));
    }
    if config.api_serve {
        servers.spawn(ApiServer::new(control, api_config).serve());
    }

    // The first server to stop, cleanly or not, ends the process.
    if let Some(joined) = servers.join_next().await {
        joined??;
    }
    Ok(())
}

fn load_dataset(config: &HoldConfig) -> Result<HoldingDataset, DatasetError> {
    match config.seed_path.as_ref() {
        Some(path) => {
            info!(path = %path.display(), "loading holding dataset from file");
            HoldingDataset::from_path(path)
        }
        None => HoldingDataset::seed(),
    }
}

fn api_config(config: &HoldConfig) -> ApiServerConfig {
    let api_config = ApiServerConfig::new(config.api_addr);
    match config.api_public_url.as_ref() {
        Some(url) => api_config.with_public_url(url.clone()),
        None => api_config,
    }
}
