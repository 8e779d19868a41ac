//! Capability proxy: start an MCP server for a package, handshake, list what it offers, tear down.
//!
//! Every call owns exactly one child process. Nothing is pooled or reused between calls.

mod descriptors;
mod error;
mod launcher;
mod session;

pub use catalog_protocol::{PromptArgumentDescriptor, PromptDescriptor, ToolDescriptor};
pub use descriptors::{prompt_descriptor, tool_descriptor};
pub use error::{ProxyError, Result};
pub use launcher::Launcher;

use session::ProxySession;

/// Launch `package_id` and return the tools it advertises (first page of `tools/list`).
pub async fn get_tools(launcher: &Launcher, package_id: &str) -> Result<Vec<ToolDescriptor>> {
    let session = ProxySession::connect(launcher, package_id).await?;
    let listed = session.client().list_tools(Default::default()).await;
    let package = session.package().to_string();
    session.close().await;

    let listed = listed.map_err(|error| ProxyError::Protocol {
        package,
        stage: "tools/list",
        message: error.to_string(),
    })?;
    log::debug!("`{package_id}` advertises {} tools", listed.tools.len());
    Ok(listed.tools.iter().map(tool_descriptor).collect())
}

/// Launch `package_id` and return the prompts it advertises (first page of `prompts/list`).
pub async fn get_prompts(launcher: &Launcher, package_id: &str) -> Result<Vec<PromptDescriptor>> {
    let session = ProxySession::connect(launcher, package_id).await?;
    let listed = session.client().list_prompts(Default::default()).await;
    let package = session.package().to_string();
    session.close().await;

    let listed = listed.map_err(|error| ProxyError::Protocol {
        package,
        stage: "prompts/list",
        message: error.to_string(),
    })?;
    log::debug!("`{package_id}` advertises {} prompts", listed.prompts.len());
    Ok(listed.prompts.iter().map(prompt_descriptor).collect())
}
