//! Catalog MCP server
//!
//! Lists the CheckPoint MCP servers published in the `mcp-servers` README and proxies
//! `tools/list` / `prompts/list` to any of them by launching it over stdio.
//!
//! Configuration comes from the environment: `CATALOG_README_URL`, `CATALOG_LAUNCHER`,
//! `CATALOG_LAUNCHER_ARGS`, `CATALOG_HTTP_TIMEOUT_MS`.

use anyhow::{Context, Result};
use catalog_mcp::args::handle_cli_args;
use catalog_mcp::init_stderr_logging;
use catalog_mcp::tools::{tool_inventory_json, CatalogService};
use catalog_protocol::CatalogConfig;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

const BIN: &str = "catalog-mcp";

#[tokio::main]
async fn main() -> Result<()> {
    if let Some(exit_code) = handle_cli_args(BIN, || {
        tool_inventory_json(BIN, env!("CARGO_PKG_VERSION"), CatalogService::inventory())
    }) {
        std::process::exit(exit_code);
    }

    init_stderr_logging();

    let resolved = CatalogConfig::from_env();
    for warning in &resolved.warnings {
        log::warn!("{warning}");
    }
    if !resolved.applied_env.is_empty() {
        log::info!("environment overrides: {}", resolved.applied_env.join(", "));
    }

    let config = resolved.config;
    let service = CatalogService::from_config(&config).context("build listing client")?;

    log::info!(
        "Starting catalog MCP server (listing: {}, launcher: {})",
        config.readme_url,
        config.launcher_program
    );

    let server = service.serve(stdio()).await?;
    server.waiting().await?;

    log::info!("Catalog MCP server stopped");
    Ok(())
}
