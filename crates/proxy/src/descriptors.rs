use catalog_protocol::{PromptArgumentDescriptor, PromptDescriptor, ToolDescriptor};
use rmcp::model::{Prompt, PromptArgument, Tool};

pub fn tool_descriptor(tool: &Tool) -> ToolDescriptor {
    ToolDescriptor {
        name: tool.name.to_string(),
        description: tool.description.as_deref().unwrap_or_default().to_string(),
        input_schema: serde_json::Value::Object((*tool.input_schema).clone()),
    }
}

pub fn prompt_descriptor(prompt: &Prompt) -> PromptDescriptor {
    PromptDescriptor {
        name: prompt.name.to_string(),
        description: prompt.description.as_deref().unwrap_or_default().to_string(),
        arguments: prompt
            .arguments
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(prompt_argument_descriptor)
            .collect(),
    }
}

fn prompt_argument_descriptor(argument: &PromptArgument) -> PromptArgumentDescriptor {
    PromptArgumentDescriptor {
        name: argument.name.to_string(),
        description: argument.description.as_deref().unwrap_or_default().to_string(),
        required: argument.required.unwrap_or(false),
    }
}
