//! Per-call arguments.
//!
//! Path and query arguments share one name-keyed map; the descriptor decides
//! which is which when the request is built. A name that was never set is
//! absent, which is distinct from a name set to the empty string.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::ConfigurationError;

/// Key under which tool-call arguments carry the request payload.
pub const BODY_KEY: &str = "data";

/// Arguments for a single endpoint call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArguments {
    values: BTreeMap<String, String>,
    body: Option<Value>,
}

impl CallArguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a path or query argument.
    #[must_use]
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Set an argument only when `value` is present.
    #[must_use]
    pub fn opt_arg(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.arg(name, value),
            None => self,
        }
    }

    /// Set the payload that is sent as `{"data": payload}`.
    #[must_use]
    pub fn body(mut self, payload: Value) -> Self {
        self.body = Some(payload);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn set_body(&mut self, payload: Option<Value>) {
        self.body = payload;
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn payload(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Route a flat JSON object of tool-call arguments.
    ///
    /// The `data` key becomes the body; every other key is a path or query
    /// argument. `null` values are treated as absent, numbers and booleans are
    /// rendered as their JSON text, arrays are comma-joined, and nested
    /// objects are passed as compact JSON.
    ///
    /// `endpoint` only names the call in the error for a non-object value;
    /// undeclared names are caught when the request is built.
    pub fn from_json(endpoint: &str, value: &Value) -> Result<Self, ConfigurationError> {
        let object = match value {
            Value::Object(object) => object,
            Value::Null => return Ok(Self::default()),
            _ => {
                return Err(ConfigurationError::ArgumentsNotObject {
                    endpoint: endpoint.to_string(),
                })
            }
        };

        let mut args = Self::default();
        for (name, value) in object {
            if name == BODY_KEY {
                if !value.is_null() {
                    args.body = Some(value.clone());
                }
                continue;
            }
            if let Some(text) = query_text(value) {
                args.values.insert(name.clone(), text);
            }
        }
        Ok(args)
    }
}

fn query_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(query_text)
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}
