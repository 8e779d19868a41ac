//! MCP tool surface.
//!
//! Schemas, dispatch, and per-tool handlers live in separate submodules.

mod dispatch;
mod inventory;
mod schemas;

pub use dispatch::{CatalogService, EchoService};
pub use inventory::tool_inventory_json;
