use serde::Serialize;
use std::env;

pub const DEFAULT_README_URL: &str =
    "https://raw.githubusercontent.com/CheckPointSW/mcp-servers/main/README.md";
pub const DEFAULT_LAUNCHER: &str = "npx";
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 30_000;

pub const ENV_README_URL: &str = "CATALOG_README_URL";
pub const ENV_LAUNCHER: &str = "CATALOG_LAUNCHER";
pub const ENV_LAUNCHER_ARGS: &str = "CATALOG_LAUNCHER_ARGS";
pub const ENV_HTTP_TIMEOUT_MS: &str = "CATALOG_HTTP_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogConfig {
    /// Where the listing markdown is fetched from.
    pub readme_url: String,
    /// Program that turns a package identifier into a running MCP server.
    pub launcher_program: String,
    /// Fixed arguments placed between the launcher program and the package identifier.
    pub launcher_args: Vec<String>,
    pub http_timeout_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            readme_url: DEFAULT_README_URL.to_string(),
            launcher_program: DEFAULT_LAUNCHER.to_string(),
            launcher_args: Vec::new(),
            http_timeout_ms: DEFAULT_HTTP_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfig {
    pub config: CatalogConfig,
    /// Environment variables that overrode a default.
    pub applied_env: Vec<String>,
    pub warnings: Vec<String>,
}

impl CatalogConfig {
    /// Resolve from the process environment. Never fails; bad values fall back to defaults
    /// and are reported in `warnings`.
    pub fn from_env() -> ResolvedConfig {
        Self::resolve_with(|key| env::var(key).ok())
    }

    pub fn resolve_with<F>(lookup: F) -> ResolvedConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut applied_env = Vec::new();
        let mut warnings = Vec::new();

        let non_empty = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(url) = non_empty(ENV_README_URL) {
            config.readme_url = url;
            applied_env.push(ENV_README_URL.to_string());
        }

        if let Some(program) = non_empty(ENV_LAUNCHER) {
            config.launcher_program = program;
            applied_env.push(ENV_LAUNCHER.to_string());
        }

        if let Some(args) = non_empty(ENV_LAUNCHER_ARGS) {
            config.launcher_args = args.split_whitespace().map(str::to_string).collect();
            applied_env.push(ENV_LAUNCHER_ARGS.to_string());
        }

        if let Some(raw) = non_empty(ENV_HTTP_TIMEOUT_MS) {
            match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => {
                    config.http_timeout_ms = ms;
                    applied_env.push(ENV_HTTP_TIMEOUT_MS.to_string());
                }
                _ => warnings.push(format!(
                    "{ENV_HTTP_TIMEOUT_MS}={raw:?} is not a positive integer; using {DEFAULT_HTTP_TIMEOUT_MS}"
                )),
            }
        }

        ResolvedConfig {
            config,
            applied_env,
            warnings,
        }
    }
}
