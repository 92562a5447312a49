//! Error types for the Asana invoker.
//!
//! # Design
//! `Configuration` covers every caller mistake that is caught before a request
//! leaves the process, so a malformed URL is never sent. Non-2xx responses land
//! in `Http` with the raw status code and body; Asana's `errors[].message`
//! strings are available through [`AsanaError::api_messages`].

use serde::Deserialize;
use thiserror::Error;

use crate::http::TransportError;

/// Caller-side problems detected while building a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// No descriptor is registered under this name.
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// A `{param}` in the path template has no argument.
    #[error("{endpoint}: missing required path parameter `{param}`")]
    MissingPathParam { endpoint: String, param: String },

    /// A path argument was supplied but empty.
    #[error("{endpoint}: path parameter `{param}` must not be empty")]
    EmptyPathParam { endpoint: String, param: String },

    /// A path argument of `.` or `..`, which would be resolved as a dot-segment.
    #[error("{endpoint}: path parameter `{param}` must not be `.` or `..`")]
    DotSegmentPathParam { endpoint: String, param: String },

    /// An argument the descriptor does not declare.
    #[error("{endpoint}: unknown parameter `{param}`")]
    UnknownParam { endpoint: String, param: String },

    /// A body payload was supplied to an endpoint that takes none.
    #[error("{endpoint}: endpoint does not accept a request body")]
    UnexpectedBody { endpoint: String },

    /// Tool-call arguments were not a JSON object.
    #[error("{endpoint}: arguments must be a JSON object")]
    ArgumentsNotObject { endpoint: String },
}

/// Errors returned by request building, response parsing and invocation.
#[derive(Debug, Error)]
pub enum AsanaError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// A 2xx response whose body is not JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be serialized.
    #[error("failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The transport could not complete the exchange.
    #[error("transport failed: {0}")]
    Transport(#[source] TransportError),
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    message: Option<String>,
}

impl AsanaError {
    /// HTTP status for `Http` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            AsanaError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Messages from an Asana `{"errors": [{"message": ...}]}` body.
    ///
    /// Empty for non-HTTP errors and for bodies in any other shape.
    pub fn api_messages(&self) -> Vec<String> {
        let AsanaError::Http { body, .. } = self else {
            return Vec::new();
        };
        serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.errors.into_iter().filter_map(|e| e.message).collect())
            .unwrap_or_default()
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
