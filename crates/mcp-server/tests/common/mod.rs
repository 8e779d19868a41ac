//! Helpers for driving the built server binaries over stdio.
#![allow(dead_code)]

use anyhow::{Context, Result};
use rmcp::model::{CallToolRequestParam, CallToolResult};
use rmcp::service::RunningService;
use rmcp::transport::TokioChildProcess;
use rmcp::{RoleClient, ServiceExt};
use std::path::PathBuf;
use std::time::Duration;
use tokio::process::Command;

pub const TIMEOUT: Duration = Duration::from_secs(10);

pub fn locate_bin(name: &str) -> Result<PathBuf> {
    let from_cargo = match name {
        "catalog-mcp" => option_env!("CARGO_BIN_EXE_catalog-mcp"),
        "echo-mcp" => option_env!("CARGO_BIN_EXE_echo-mcp"),
        _ => None,
    };
    if let Some(path) = from_cargo {
        return Ok(PathBuf::from(path));
    }

    // `.../target/{debug|release}/deps/<test>` → `.../target/{debug|release}/<name>`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join(name);
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for profile in ["debug", "release"] {
        let candidate = repo_root.join("target").join(profile).join(name);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!("failed to locate {name} binary")
}

/// A command for `name` with quiet logging and no inherited catalog overrides.
pub fn server_command(name: &str) -> Result<Command> {
    let mut cmd = Command::new(locate_bin(name)?);
    for key in [
        "CATALOG_README_URL",
        "CATALOG_LAUNCHER",
        "CATALOG_LAUNCHER_ARGS",
        "CATALOG_HTTP_TIMEOUT_MS",
    ] {
        cmd.env_remove(key);
    }
    cmd.env("RUST_LOG", "warn");
    Ok(cmd)
}

pub async fn connect(cmd: Command) -> Result<RunningService<RoleClient, ()>> {
    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    tokio::time::timeout(TIMEOUT, ().serve(transport))
        .await
        .context("timeout starting MCP server")?
        .context("initialize MCP session")
}

pub async fn call(
    service: &RunningService<RoleClient, ()>,
    name: &str,
    args: serde_json::Value,
) -> Result<CallToolResult> {
    tokio::time::timeout(
        TIMEOUT,
        service.call_tool(CallToolRequestParam {
            name: name.to_string().into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .with_context(|| format!("timeout calling {name}"))?
    .with_context(|| format!("call {name}"))
}

pub fn text(result: &CallToolResult) -> Result<&str> {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .context("tool did not return text content")
}

pub fn error_code(result: &CallToolResult) -> Option<&str> {
    result
        .structured_content
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(|e| e.get("code"))
        .and_then(|c| c.as_str())
}
