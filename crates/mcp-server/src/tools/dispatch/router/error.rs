use super::super::{CallToolResult, Content};
use crate::tools::schemas::ItemsResult;
use catalog_listing::FetchError;
use catalog_protocol::{
    ErrorEnvelope, ERROR_FETCH_FAILED, ERROR_INTERNAL, ERROR_INVALID_REQUEST,
    ERROR_PROCESS_LAUNCH,
};
use catalog_proxy::ProxyError;
use serde::Serialize;
use serde_json::json;

pub(super) fn tool_error_envelope(error: ErrorEnvelope) -> CallToolResult {
    let mut result = CallToolResult::error(vec![Content::text(error.message.clone())]);
    result.structured_content = Some(json!({ "error": error }));
    result
}

pub(super) fn tool_error(code: &'static str, message: impl Into<String>) -> CallToolResult {
    tool_error_envelope(ErrorEnvelope::new(code, message))
}

pub(super) fn invalid_request(message: impl Into<String>) -> CallToolResult {
    tool_error(ERROR_INVALID_REQUEST, message)
}

pub(super) fn internal_error(message: impl Into<String>) -> CallToolResult {
    tool_error(ERROR_INTERNAL, message)
}

pub(super) fn fetch_error(error: &FetchError) -> CallToolResult {
    log::warn!("listing fetch failed: {error}");
    tool_error_envelope(
        ErrorEnvelope::new(ERROR_FETCH_FAILED, error.to_string())
            .with_hint("Check network access or point CATALOG_README_URL at a reachable copy."),
    )
}

pub(super) fn proxy_error(error: &ProxyError) -> CallToolResult {
    if matches!(error, ProxyError::InvalidPackage) {
        return invalid_request("package_name must not be empty");
    }
    log::warn!("capability proxy failed: {error}");
    let envelope = ErrorEnvelope::new(error.code(), error.to_string());
    let envelope = match error.code() {
        ERROR_PROCESS_LAUNCH => envelope.with_hint(
            "Verify the package name from list_chkp_mcp_servers and that the launcher (CATALOG_LAUNCHER, default npx) is installed.",
        ),
        _ => envelope,
    };
    tool_error_envelope(envelope)
}

/// Pretty JSON text plus `{ "items": [...] }` as structured content.
pub(super) fn items_result<T: Serialize>(items: Vec<T>) -> CallToolResult {
    let payload = ItemsResult { items };
    let structured = match serde_json::to_value(&payload) {
        Ok(value) => value,
        Err(err) => return internal_error(format!("failed to serialize result: {err}")),
    };
    let text = catalog_protocol::serialize_json(&structured["items"]).unwrap_or_default();
    let mut result = CallToolResult::success(vec![Content::text(text)]);
    result.structured_content = Some(structured);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_protocol::ListingRecord;

    #[test]
    fn error_results_carry_the_envelope() {
        let result = invalid_request("package_name must not be empty");
        assert_eq!(result.is_error, Some(true));
        let structured = result.structured_content.expect("structured error");
        assert_eq!(structured["error"]["code"], "invalid_request");
        assert_eq!(
            structured["error"]["message"],
            "package_name must not be empty"
        );
    }

    #[test]
    fn launch_failures_get_a_hint() {
        let result = proxy_error(&ProxyError::Launch {
            command: "npx @nope/pkg".to_string(),
            message: "No such file or directory".to_string(),
        });
        let structured = result.structured_content.expect("structured error");
        assert_eq!(structured["error"]["code"], "process_launch");
        assert!(structured["error"]["hint"].is_string());
    }

    #[test]
    fn items_result_mirrors_text_and_structured_content() {
        let result = items_result(vec![ListingRecord::new("A", "@a/a", "first")]);
        assert_ne!(result.is_error, Some(true));
        let text = result
            .content
            .first()
            .and_then(|c| c.as_text())
            .map(|t| t.text.clone())
            .expect("text content");
        let from_text: serde_json::Value = serde_json::from_str(&text).expect("json text");
        let structured = result.structured_content.expect("structured content");
        assert_eq!(from_text, structured["items"]);
        assert_eq!(structured["items"][0]["package_name"], "@a/a");
    }
}
