use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PackageRequest {
    /// Package identifier from the listing
    #[schemars(
        description = "The NPM package name of the MCP server (e.g., \"@chkp/quantum-gw-cli-mcp\")"
    )]
    pub package_name: String,
}
