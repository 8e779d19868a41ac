use anyhow::Result;
use catalog_protocol::{CatalogConfig, ResolvedConfig};
use clap::Parser;

mod command;

use command::CommandAction;

#[derive(Debug, Parser)]
#[command(
    name = "catalog",
    version,
    about = "Browse the CheckPoint MCP server listing and inspect listed servers"
)]
struct Cli {
    /// Listing URL (overrides CATALOG_README_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Launcher program (overrides CATALOG_LAUNCHER)
    #[arg(long, global = true)]
    launcher: Option<String>,

    /// Extra launcher argument placed before the package; repeatable (overrides CATALOG_LAUNCHER_ARGS)
    #[arg(long = "launcher-arg", global = true, allow_hyphen_values = true)]
    launcher_args: Vec<String>,

    /// HTTP timeout in milliseconds (overrides CATALOG_HTTP_TIMEOUT_MS)
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: CommandAction,
}

impl Cli {
    fn config(&self, resolved: ResolvedConfig) -> CatalogConfig {
        let mut config = resolved.config;
        if let Some(url) = &self.url {
            config.readme_url = url.clone();
        }
        if let Some(program) = &self.launcher {
            config.launcher_program = program.clone();
        }
        if !self.launcher_args.is_empty() {
            config.launcher_args = self.launcher_args.clone();
        }
        if let Some(ms) = self.timeout_ms.filter(|ms| *ms > 0) {
            config.http_timeout_ms = ms;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    let resolved = CatalogConfig::from_env();
    for warning in &resolved.warnings {
        log::warn!("{warning}");
    }
    let config = cli.config(resolved);
    log::debug!("effective config: {config:?}");

    let output = command::execute(cli.action, &config).await?;
    println!("{output}");
    Ok(())
}
