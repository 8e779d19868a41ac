//! MCP catalog server
//!
//! Two stdio MCP servers share this library:
//!
//! - `catalog-mcp` - the full tool set:
//!   - `echo` - Return the message unchanged (connectivity check)
//!   - `fetch_readme` - Raw listing markdown
//!   - `list_chkp_mcp_servers` - Parsed listing table (name, package, description)
//!   - `get_chkp_mcp_server_tools` - Launch a listed server and relay its tools
//!   - `get_chkp_mcp_server_prompts` - Launch a listed server and relay its prompts
//! - `echo-mcp` - `echo` only
//!
//! ## Usage
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "catalog": {
//!       "command": "catalog-mcp",
//!       "env": { "CATALOG_LAUNCHER": "npx" }
//!     }
//!   }
//! }
//! ```

pub mod args;
pub mod tools;

/// Logs go to stderr; stdout carries the protocol.
pub fn init_stderr_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
}
