//! Wire types shared by the catalog crates.
//!
//! Everything here is created fresh per call and handed back to the caller; nothing is cached.

pub mod config;

use serde::{Deserialize, Serialize};

pub use config::{CatalogConfig, ResolvedConfig};

/// One row of the plugin-server listing table, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    /// Display name (the link text when the cell is a markdown link).
    pub server_name: String,
    /// Package identifier used to launch the server.
    pub package_name: String,
    pub description: String,
}

impl ListingRecord {
    pub fn new(
        server_name: impl Into<String>,
        package_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            server_name: server_name.into(),
            package_name: package_name.into(),
            description: description.into(),
        }
    }
}

/// A tool advertised by an external MCP server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    /// Argument schema, passed through exactly as the server sent it.
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// A prompt template advertised by an external MCP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptDescriptor {
    pub name: String,
    pub description: String,
    pub arguments: Vec<PromptArgumentDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptArgumentDescriptor {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Structured payload attached to failed tool results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

pub const ERROR_FETCH_FAILED: &str = "fetch_failed";
pub const ERROR_PROCESS_LAUNCH: &str = "process_launch";
pub const ERROR_PROTOCOL: &str = "protocol";
pub const ERROR_INVALID_REQUEST: &str = "invalid_request";
pub const ERROR_INTERNAL: &str = "internal";

pub fn serialize_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn listing_record_uses_listing_field_names() {
        let record = ListingRecord::new("Quantum", "@chkp/quantum-mcp", "Gateway tools");
        assert_eq!(
            serde_json::to_value(&record).expect("serialize"),
            json!({
                "server_name": "Quantum",
                "package_name": "@chkp/quantum-mcp",
                "description": "Gateway tools"
            })
        );
    }

    #[test]
    fn tool_descriptor_keeps_schema_verbatim() {
        let schema = json!({
            "type": "object",
            "properties": { "nested": { "type": "array", "items": { "$ref": "#/defs/x" } } }
        });
        let tool = ToolDescriptor {
            name: "show".to_string(),
            description: String::new(),
            input_schema: schema.clone(),
        };
        let value = serde_json::to_value(&tool).expect("serialize");
        assert_eq!(value["inputSchema"], schema);
        assert!(value.get("input_schema").is_none());
    }

    #[test]
    fn error_envelope_omits_missing_hint() {
        let value = serde_json::to_value(ErrorEnvelope::new(ERROR_PROTOCOL, "boom"))
            .expect("serialize");
        assert_eq!(value, json!({ "code": "protocol", "message": "boom" }));

        let with_hint = ErrorEnvelope::new(ERROR_FETCH_FAILED, "404").with_hint("check the URL");
        assert_eq!(with_hint.hint.as_deref(), Some("check the URL"));
    }
}
