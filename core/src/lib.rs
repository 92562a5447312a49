//! Table-driven invoker for the Asana REST API.
//!
//! # Overview
//! Every Asana operation is a row in a static [`EndpointTable`]. A single
//! generic path turns a row plus [`CallArguments`] into an `HttpRequest`,
//! hands it to an injected [`Transport`], and parses the `HttpResponse` into a
//! `serde_json::Value`.
//!
//! # Design
//! - `AsanaClient` is stateless: it holds only `base_url` and never does I/O.
//! - `build_request` / `parse_response` are pure; `Invoker` joins them around
//!   exactly one transport call. No retries, no caching, no pagination.
//! - Bodies are sent as `{"data": ...}`; query names reach the wire verbatim,
//!   dotted filter operators included.
//! - Credentials never enter this crate; the transport injects them.

pub mod args;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod invoker;
pub mod table;
pub mod tools;

pub use args::CallArguments;
pub use client::{AsanaClient, DEFAULT_BASE_URL};
pub use endpoint::EndpointDescriptor;
pub use error::{AsanaError, ConfigurationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use invoker::Invoker;
pub use table::{EndpointTable, ENDPOINTS};
pub use tools::{tool_definitions, ToolDefinition};
