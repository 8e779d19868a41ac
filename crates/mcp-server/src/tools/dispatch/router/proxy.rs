use super::super::{CallToolResult, CatalogService, McpError};
use super::error::{items_result, proxy_error};
use crate::tools::schemas::proxy::PackageRequest;

/// Launch the package and relay its `tools/list`.
pub(in crate::tools::dispatch) async fn server_tools(
    service: &CatalogService,
    request: &PackageRequest,
) -> Result<CallToolResult, McpError> {
    // Passed on verbatim; the proxy rejects a blank identifier before spawning.
    match catalog_proxy::get_tools(service.launcher(), &request.package_name).await {
        Ok(tools) => Ok(items_result(tools)),
        Err(error) => Ok(proxy_error(&error)),
    }
}

/// Launch the package and relay its `prompts/list`.
pub(in crate::tools::dispatch) async fn server_prompts(
    service: &CatalogService,
    request: &PackageRequest,
) -> Result<CallToolResult, McpError> {
    // Passed on verbatim; the proxy rejects a blank identifier before spawning.
    match catalog_proxy::get_prompts(service.launcher(), &request.package_name).await {
        Ok(prompts) => Ok(items_result(prompts)),
        Err(error) => Ok(proxy_error(&error)),
    }
}
