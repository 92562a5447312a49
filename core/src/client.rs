//! Stateless request builder and response parser for the Asana API.
//!
//! # Design
//! `AsanaClient` holds only a `base_url`. `build_request` turns a descriptor
//! plus arguments into an `HttpRequest`; `parse_response` turns an
//! `HttpResponse` into JSON. Both are pure, so every wire detail can be tested
//! without a network. [`crate::Invoker`] joins them around a transport call.

use serde_json::{json, Map, Value};

use crate::args::CallArguments;
use crate::endpoint::{EndpointDescriptor, Segment};
use crate::error::{AsanaError, ConfigurationError};
use crate::http::{HttpRequest, HttpResponse};

pub const DEFAULT_BASE_URL: &str = "https://app.asana.com/api/1.0";

/// Synchronous, stateless builder/parser for Asana requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsanaClient {
    base_url: String,
}

impl Default for AsanaClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl AsanaClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the request for one call of `descriptor`.
    ///
    /// Fails with a configuration error, before anything is sent, when a path
    /// argument is missing or empty, when an argument is not declared by the
    /// descriptor, or when a body is given to an endpoint that takes none.
    pub fn build_request(
        &self,
        descriptor: &EndpointDescriptor,
        args: &CallArguments,
    ) -> Result<HttpRequest, AsanaError> {
        check_declared(descriptor, args)?;

        let path = expand_path(descriptor, args)?;
        let query = collect_query(descriptor, args);

        let mut headers = vec![("accept".to_string(), "application/json".to_string())];
        let body = if descriptor.has_body {
            let envelope = match args.payload() {
                Some(payload) => json!({ "data": payload }),
                None => Value::Object(Map::new()),
            };
            headers.push(("content-type".to_string(), "application/json".to_string()));
            Some(serde_json::to_string(&envelope).map_err(AsanaError::Serialization)?)
        } else {
            if args.payload().is_some() {
                return Err(ConfigurationError::UnexpectedBody {
                    endpoint: descriptor.name.to_string(),
                }
                .into());
            }
            None
        };

        Ok(HttpRequest {
            method: descriptor.method,
            url: format!("{}{path}", self.base_url),
            path,
            query,
            headers,
            body,
        })
    }

    /// Interpret a response: non-2xx is an error, an empty 2xx body is `{}`.
    pub fn parse_response(&self, response: HttpResponse) -> Result<Value, AsanaError> {
        if !response.is_success() {
            return Err(AsanaError::Http {
                status: response.status,
                body: response.body,
            });
        }
        if response.body.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        serde_json::from_str(&response.body).map_err(AsanaError::Decode)
    }
}

fn check_declared(descriptor: &EndpointDescriptor, args: &CallArguments) -> Result<(), ConfigurationError> {
    match args.names().find(|name| !descriptor.declares(name)) {
        Some(name) => Err(ConfigurationError::UnknownParam {
            endpoint: descriptor.name.to_string(),
            param: name.to_string(),
        }),
        None => Ok(()),
    }
}

fn expand_path(descriptor: &EndpointDescriptor, args: &CallArguments) -> Result<String, ConfigurationError> {
    let mut path = String::with_capacity(descriptor.path_template.len() + 16);
    if !descriptor.path_template.starts_with('/') {
        path.push('/');
    }
    for segment in descriptor.segments() {
        match segment {
            Segment::Literal(text) => path.push_str(text),
            Segment::Param(name) => {
                let value = args.get(name).ok_or_else(|| ConfigurationError::MissingPathParam {
                    endpoint: descriptor.name.to_string(),
                    param: name.to_string(),
                })?;
                if value.is_empty() {
                    return Err(ConfigurationError::EmptyPathParam {
                        endpoint: descriptor.name.to_string(),
                        param: name.to_string(),
                    });
                }
                if value == "." || value == ".." {
                    return Err(ConfigurationError::DotSegmentPathParam {
                        endpoint: descriptor.name.to_string(),
                        param: name.to_string(),
                    });
                }
                path.push_str(&urlencoding::encode(value));
            }
        }
    }
    Ok(path)
}

/// Query pairs in declared order. The wire name wins if both forms are given.
fn collect_query(descriptor: &EndpointDescriptor, args: &CallArguments) -> Vec<(String, String)> {
    descriptor
        .query_params
        .iter()
        .filter_map(|wire| {
            args.get(wire)
                .or_else(|| args.get(&crate::endpoint::argument_name(wire)))
                .map(|value| ((*wire).to_string(), value.to_string()))
        })
        .collect()
}
