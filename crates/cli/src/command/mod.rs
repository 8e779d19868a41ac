use anyhow::{Context, Result};
use catalog_listing::{list_entries, HttpListingSource, ListingSource};
use catalog_protocol::CatalogConfig;
use catalog_proxy::Launcher;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum CommandAction {
    /// Print the raw listing markdown
    Readme,
    /// Print the parsed listing table as JSON
    List,
    /// Launch a listed server and print its tools as JSON
    Tools {
        /// Package identifier (e.g. @chkp/quantum-gw-cli-mcp)
        package: String,
    },
    /// Launch a listed server and print its prompts as JSON
    Prompts {
        /// Package identifier (e.g. @chkp/quantum-gw-cli-mcp)
        package: String,
    },
    /// Print the message unchanged
    Echo { message: String },
}

/// Run one action and return what should go to stdout.
pub async fn execute(action: CommandAction, config: &CatalogConfig) -> Result<String> {
    match action {
        CommandAction::Echo { message } => Ok(message),
        CommandAction::Readme => {
            let source = HttpListingSource::from_config(config)?;
            Ok(source.fetch().await?)
        }
        CommandAction::List => {
            let source = HttpListingSource::from_config(config)?;
            let records = list_entries(&source)
                .await
                .with_context(|| format!("list servers from {}", source.url()))?;
            to_json(&records)
        }
        CommandAction::Tools { package } => {
            let tools = catalog_proxy::get_tools(&Launcher::from_config(config), &package)
                .await
                .with_context(|| format!("list tools of {package}"))?;
            to_json(&tools)
        }
        CommandAction::Prompts { package } => {
            let prompts = catalog_proxy::get_prompts(&Launcher::from_config(config), &package)
                .await
                .with_context(|| format!("list prompts of {package}"))?;
            to_json(&prompts)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    catalog_protocol::serialize_json(value).context("serialize output")
}
