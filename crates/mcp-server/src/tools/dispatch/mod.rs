mod router;

use std::sync::Arc;

use catalog_listing::{FetchError, HttpListingSource, ListingSource};
use catalog_protocol::CatalogConfig;
use catalog_proxy::Launcher;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{Implementation, ServerCapabilities, ServerInfo, Tool};
use rmcp::{tool, tool_handler, tool_router, ServerHandler};

pub(crate) use rmcp::model::{CallToolResult, Content};
pub(crate) use rmcp::ErrorData as McpError;

use super::schemas::echo::EchoRequest;
use super::schemas::proxy::PackageRequest;

const CATALOG_INSTRUCTIONS: &str = "Explore the CheckPoint MCP servers: `list_chkp_mcp_servers` \
    returns the published servers with their package names; pass a package name to \
    `get_chkp_mcp_server_tools` or `get_chkp_mcp_server_prompts` to launch that server and list \
    what it offers.";

const ECHO_INSTRUCTIONS: &str = "Connectivity check: `echo` returns its message unchanged.";

fn server_info(name: &str, instructions: &str) -> ServerInfo {
    ServerInfo {
        capabilities: ServerCapabilities::builder().enable_tools().build(),
        server_info: Implementation {
            name: name.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        },
        instructions: Some(instructions.to_string()),
        ..Default::default()
    }
}

/// Full catalog server: listing tools plus the capability proxy.
#[derive(Clone)]
pub struct CatalogService {
    source: Arc<dyn ListingSource>,
    launcher: Launcher,
    tool_router: ToolRouter<Self>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn ListingSource>, launcher: Launcher) -> Self {
        Self {
            source,
            launcher,
            tool_router: Self::tool_router(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self, FetchError> {
        let source = HttpListingSource::from_config(config)?;
        Ok(Self::new(Arc::new(source), Launcher::from_config(config)))
    }

    /// Tools this server advertises, without constructing one.
    pub fn inventory() -> Vec<Tool> {
        Self::tool_router().list_all()
    }

    pub(crate) fn source(&self) -> &dyn ListingSource {
        self.source.as_ref()
    }

    pub(crate) fn launcher(&self) -> &Launcher {
        &self.launcher
    }
}

#[tool_router]
impl CatalogService {
    #[tool(description = "Echo back the provided message unchanged.")]
    async fn echo(
        &self,
        Parameters(request): Parameters<EchoRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::echo::echo(request)
    }

    #[tool(
        description = "Fetch the README content from the CheckPointSW/mcp-servers repository. Returns the raw markdown text."
    )]
    async fn fetch_readme(&self) -> Result<CallToolResult, McpError> {
        router::listing::fetch_readme(self).await
    }

    #[tool(
        description = "List all CheckPoint MCP servers by parsing the README table. Returns server_name, package_name, and description for each server."
    )]
    async fn list_chkp_mcp_servers(&self) -> Result<CallToolResult, McpError> {
        router::listing::list_servers(self).await
    }

    #[tool(
        description = "Get all tools from a CheckPoint MCP server. Launches the server over stdio and returns name, description, and inputSchema for each tool."
    )]
    async fn get_chkp_mcp_server_tools(
        &self,
        Parameters(request): Parameters<PackageRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::proxy::server_tools(self, &request).await
    }

    #[tool(
        description = "Get all prompts from a CheckPoint MCP server. Launches the server over stdio and returns name, description, and arguments for each prompt."
    )]
    async fn get_chkp_mcp_server_prompts(
        &self,
        Parameters(request): Parameters<PackageRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::proxy::server_prompts(self, &request).await
    }
}

#[tool_handler]
impl ServerHandler for CatalogService {
    fn get_info(&self) -> ServerInfo {
        server_info("catalog-mcp", CATALOG_INSTRUCTIONS)
    }
}

/// Smoke-test server with a single `echo` tool.
#[derive(Clone)]
pub struct EchoService {
    tool_router: ToolRouter<Self>,
}

impl Default for EchoService {
    fn default() -> Self {
        Self::new()
    }
}

impl EchoService {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    pub fn inventory() -> Vec<Tool> {
        Self::tool_router().list_all()
    }
}

#[tool_router]
impl EchoService {
    #[tool(description = "Echo back the provided message unchanged.")]
    async fn echo(
        &self,
        Parameters(request): Parameters<EchoRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::echo::echo(request)
    }
}

#[tool_handler]
impl ServerHandler for EchoService {
    fn get_info(&self) -> ServerInfo {
        server_info("echo-mcp", ECHO_INSTRUCTIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_listing::StaticListingSource;

    #[test]
    fn catalog_inventory_lists_every_tool() {
        let mut names: Vec<String> = CatalogService::inventory()
            .iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "echo",
                "fetch_readme",
                "get_chkp_mcp_server_prompts",
                "get_chkp_mcp_server_tools",
                "list_chkp_mcp_servers",
            ]
        );
    }

    #[test]
    fn echo_inventory_is_echo_only() {
        let names: Vec<String> = EchoService::inventory()
            .iter()
            .map(|tool| tool.name.to_string())
            .collect();
        assert_eq!(names, vec!["echo"]);
    }

    #[test]
    fn proxy_tools_require_package_name() {
        let tools = CatalogService::inventory();
        let tool = tools
            .iter()
            .find(|tool| tool.name == "get_chkp_mcp_server_tools")
            .expect("proxy tool registered");
        let required = tool
            .input_schema
            .get("required")
            .and_then(|v| v.as_array())
            .expect("required list");
        assert!(required.iter().any(|v| v == "package_name"));
    }

    #[test]
    fn server_info_names_the_binary() {
        let service = CatalogService::new(
            Arc::new(StaticListingSource::new("")),
            Launcher::default(),
        );
        let info = service.get_info();
        assert_eq!(info.server_info.name, "catalog-mcp");
        assert!(info.capabilities.tools.is_some());
        assert_eq!(EchoService::new().get_info().server_info.name, "echo-mcp");
    }
}
