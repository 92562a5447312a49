//! Tool definitions for function-calling frameworks.
//!
//! Each descriptor renders as a name, a description and a JSON Schema of its
//! flat arguments, the same shape [`crate::CallArguments::from_json`] accepts.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::args::BODY_KEY;
use crate::endpoint::{argument_name, EndpointDescriptor};
use crate::table::EndpointTable;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl From<&EndpointDescriptor> for ToolDefinition {
    fn from(descriptor: &EndpointDescriptor) -> Self {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for name in descriptor.path_params() {
            properties.insert(
                name.to_string(),
                json!({ "type": "string", "description": "Path parameter." }),
            );
            required.push(Value::String(name.to_string()));
        }

        for wire in descriptor.query_params {
            let description = if wire.contains('.') {
                format!("Query parameter, sent as `{wire}`.")
            } else {
                "Query parameter.".to_string()
            };
            properties.insert(
                argument_name(wire).into_owned(),
                json!({ "type": "string", "description": description }),
            );
        }

        if descriptor.has_body {
            properties.insert(
                BODY_KEY.to_string(),
                json!({
                    "type": "object",
                    "description": "Request payload, sent wrapped as {\"data\": ...}.",
                }),
            );
        }

        Self {
            name: descriptor.name.to_string(),
            description: format!(
                "{} ({} {})",
                descriptor.summary, descriptor.method, descriptor.path_template
            ),
            parameters: json!({
                "type": "object",
                "properties": properties,
                "required": required,
                "additionalProperties": false,
            }),
        }
    }
}

/// One tool per row of `table`, in table order.
pub fn tool_definitions(table: &EndpointTable) -> Vec<ToolDefinition> {
    table.iter().map(ToolDefinition::from).collect()
}
