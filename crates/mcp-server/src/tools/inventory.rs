use rmcp::model::Tool;
use serde_json::json;

/// Tool inventory printed by `--print-tools`.
pub fn tool_inventory_json(server: &str, version: &str, mut tools: Vec<Tool>) -> String {
    tools.sort_by(|a, b| a.name.cmp(&b.name));
    let payload = json!({
        "server": server,
        "version": version,
        "tools": tools,
    });
    catalog_protocol::serialize_json(&payload).unwrap_or_default()
}
