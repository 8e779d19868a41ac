use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EchoRequest {
    /// The message to echo back
    #[schemars(description = "The message to echo back")]
    pub message: String,
}
