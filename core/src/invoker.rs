//! One descriptor, one request, one response.
//!
//! `Invoker` pairs an [`AsanaClient`] with a [`Transport`]. It holds no
//! mutable state, so a shared `Invoker` can serve concurrent callers as long
//! as its transport can.

use serde_json::Value;
use tracing::debug;

use crate::args::CallArguments;
use crate::client::AsanaClient;
use crate::endpoint::EndpointDescriptor;
use crate::error::{AsanaError, ConfigurationError};
use crate::http::Transport;
use crate::table::EndpointTable;

#[derive(Debug, Clone)]
pub struct Invoker<T> {
    client: AsanaClient,
    transport: T,
    endpoints: &'static EndpointTable,
}

impl<T: Transport> Invoker<T> {
    /// An invoker over the built-in Asana endpoint table.
    pub fn new(client: AsanaClient, transport: T) -> Self {
        Self::with_endpoints(client, transport, EndpointTable::asana())
    }

    pub fn with_endpoints(client: AsanaClient, transport: T, endpoints: &'static EndpointTable) -> Self {
        Self {
            client,
            transport,
            endpoints,
        }
    }

    pub fn client(&self) -> &AsanaClient {
        &self.client
    }

    pub fn endpoints(&self) -> &'static EndpointTable {
        self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn descriptor(&self, name: &str) -> Result<&'static EndpointDescriptor, AsanaError> {
        self.endpoints
            .get(name)
            .ok_or_else(|| ConfigurationError::UnknownEndpoint(name.to_string()).into())
    }

    /// Build, send and parse exactly one request.
    pub fn invoke(&self, descriptor: &EndpointDescriptor, args: &CallArguments) -> Result<Value, AsanaError> {
        let request = self.client.build_request(descriptor, args)?;
        debug!(
            endpoint = descriptor.name,
            method = %request.method,
            path = %request.path,
            query_params = request.query.len(),
            "dispatching request"
        );
        let response = self.transport.execute(&request).map_err(AsanaError::Transport)?;
        debug!(endpoint = descriptor.name, status = response.status, "received response");
        self.client.parse_response(response)
    }

    /// Invoke the endpoint registered under `name`.
    pub fn call(&self, name: &str, args: &CallArguments) -> Result<Value, AsanaError> {
        let descriptor = self.descriptor(name)?;
        self.invoke(descriptor, args)
    }

    /// Invoke `name` with a flat JSON object of tool-call arguments.
    pub fn call_json(&self, name: &str, arguments: &Value) -> Result<Value, AsanaError> {
        let descriptor = self.descriptor(name)?;
        let args = CallArguments::from_json(descriptor.name, arguments)?;
        self.invoke(descriptor, &args)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse, TransportError};

    /// Records every request and answers with a fixed response.
    struct StubTransport {
        status: u16,
        body: String,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl StubTransport {
        fn new(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.to_string(),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Transport for StubTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(HttpResponse::new(self.status, self.body.clone()))
        }
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            Err("connection refused".into())
        }
    }

    fn invoker(transport: &StubTransport) -> Invoker<&StubTransport> {
        Invoker::new(AsanaClient::new("http://stub"), transport)
    }

    fn path_args(descriptor: &EndpointDescriptor) -> CallArguments {
        descriptor
            .path_params()
            .into_iter()
            .fold(CallArguments::new(), |args, name| args.arg(name, "1"))
    }

    #[test]
    fn every_endpoint_returns_decoded_body() {
        let transport = StubTransport::new(200, r#"{"data": {}}"#);
        let invoker = invoker(&transport);
        for descriptor in invoker.endpoints().iter() {
            let value = invoker.invoke(descriptor, &path_args(descriptor)).unwrap();
            assert_eq!(value, json!({"data": {}}), "{}", descriptor.name);
        }
        assert_eq!(transport.requests().len(), invoker.endpoints().len());
    }

    #[test]
    fn every_endpoint_maps_404_to_http_error() {
        let transport = StubTransport::new(404, r#"{"errors":[{"message":"Not Found"}]}"#);
        let invoker = invoker(&transport);
        for descriptor in invoker.endpoints().iter() {
            let err = invoker.invoke(descriptor, &path_args(descriptor)).unwrap_err();
            assert!(matches!(err, AsanaError::Http { status: 404, .. }), "{}", descriptor.name);
        }
    }

    #[test]
    fn missing_path_param_never_reaches_transport() {
        let transport = StubTransport::new(200, "{}");
        let invoker = invoker(&transport);
        for descriptor in invoker.endpoints().iter() {
            if descriptor.path_params().is_empty() {
                continue;
            }
            let err = invoker.invoke(descriptor, &CallArguments::new()).unwrap_err();
            assert!(matches!(err, AsanaError::Configuration(_)), "{}", descriptor.name);
        }
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn body_endpoints_without_payload_send_empty_object() {
        let transport = StubTransport::new(200, r#"{"data": {}}"#);
        let invoker = invoker(&transport);
        for descriptor in invoker.endpoints().iter().filter(|d| d.has_body) {
            invoker.invoke(descriptor, &path_args(descriptor)).unwrap();
        }
        for request in transport.requests() {
            assert_eq!(request.body.as_deref(), Some("{}"), "{}", request.path);
        }
    }

    #[test]
    fn undecodable_success_is_decode_error() {
        let transport = StubTransport::new(200, "<html>oops</html>");
        let err = invoker(&transport)
            .call("get_multiple_workspaces", &CallArguments::new())
            .unwrap_err();
        assert!(matches!(err, AsanaError::Decode(_)));
    }

    #[test]
    fn empty_delete_response_is_empty_object() {
        let transport = StubTransport::new(200, "");
        let value = invoker(&transport)
            .call("delete_a_task", &CallArguments::new().arg("task_gid", "7"))
            .unwrap();
        assert_eq!(value, json!({}));
        let sent = transport.requests();
        assert_eq!(sent[0].method, HttpMethod::Delete);
        assert_eq!(sent[0].path, "/tasks/7");
    }

    #[test]
    fn unknown_endpoint_is_configuration_error() {
        let transport = StubTransport::new(200, "{}");
        let err = invoker(&transport)
            .call("get_a_taks", &CallArguments::new())
            .unwrap_err();
        assert!(matches!(
            err,
            AsanaError::Configuration(ConfigurationError::UnknownEndpoint(_))
        ));
    }

    #[test]
    fn transport_failure_propagates() {
        let invoker = Invoker::new(AsanaClient::default(), FailingTransport);
        let err = invoker
            .call("get_multiple_workspaces", &CallArguments::new())
            .unwrap_err();
        assert!(matches!(err, AsanaError::Transport(_)));
        assert_eq!(err.to_string(), "transport failed: connection refused");
    }

    #[test]
    fn call_json_routes_tool_arguments() {
        let transport = StubTransport::new(201, r#"{"data":{"gid":"9"}}"#);
        let value = invoker(&transport)
            .call_json(
                "search_tasks_in_a_workspace",
                &json!({"workspace_gid": "3", "due_on_before": "2024-06-01", "completed": false}),
            )
            .unwrap();
        assert_eq!(value["data"]["gid"], "9");
        let sent = transport.requests();
        assert_eq!(sent[0].path, "/workspaces/3/tasks/search");
        assert_eq!(
            sent[0].query,
            vec![
                ("due_on.before".to_string(), "2024-06-01".to_string()),
                ("completed".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn invoker_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Invoker<StubTransport>>();
    }
}
