//! Echo MCP server: a single `echo` tool for checking that a client can reach a stdio server.

use anyhow::Result;
use catalog_mcp::args::handle_cli_args;
use catalog_mcp::init_stderr_logging;
use catalog_mcp::tools::{tool_inventory_json, EchoService};
use rmcp::transport::stdio;
use rmcp::ServiceExt;

const BIN: &str = "echo-mcp";

#[tokio::main]
async fn main() -> Result<()> {
    if let Some(exit_code) = handle_cli_args(BIN, || {
        tool_inventory_json(BIN, env!("CARGO_PKG_VERSION"), EchoService::inventory())
    }) {
        std::process::exit(exit_code);
    }

    init_stderr_logging();
    log::info!("Starting echo MCP server");

    let server = EchoService::new().serve(stdio()).await?;
    server.waiting().await?;

    log::info!("Echo MCP server stopped");
    Ok(())
}
