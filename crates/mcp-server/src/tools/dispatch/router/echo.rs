use super::super::{CallToolResult, Content, McpError};
use crate::tools::schemas::echo::EchoRequest;

/// Return the message exactly as received.
pub(in crate::tools::dispatch) fn echo(request: EchoRequest) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(request.message)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echoed(message: &str) -> String {
        let result = echo(EchoRequest {
            message: message.to_string(),
        })
        .expect("echo never fails");
        result
            .content
            .first()
            .and_then(|c| c.as_text())
            .map(|t| t.text.clone())
            .expect("text content")
    }

    #[test]
    fn echo_is_identity() {
        for message in ["x", "", "| a | `b` |", "multi\nline", "ünïcødé"] {
            assert_eq!(echoed(message), message);
        }
    }
}
