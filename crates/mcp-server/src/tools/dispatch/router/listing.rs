use super::super::{CallToolResult, CatalogService, Content, McpError};
use super::error::{fetch_error, items_result};

/// Raw listing markdown.
pub(in crate::tools::dispatch) async fn fetch_readme(
    service: &CatalogService,
) -> Result<CallToolResult, McpError> {
    match service.source().fetch().await {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(error) => Ok(fetch_error(&error)),
    }
}

/// Fetch + parse the listing table.
pub(in crate::tools::dispatch) async fn list_servers(
    service: &CatalogService,
) -> Result<CallToolResult, McpError> {
    match catalog_listing::list_entries(service.source()).await {
        Ok(records) => Ok(items_result(records)),
        Err(error) => Ok(fetch_error(&error)),
    }
}
