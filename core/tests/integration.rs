//! Task lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the invoker over real
//! HTTP with a small ureq transport. Validates that request building, the
//! `{"data": ...}` envelope, dotted query names and response parsing all line
//! up with an actual server.

use asana_core::{
    AsanaClient, AsanaError, CallArguments, HttpMethod, HttpRequest, HttpResponse, Invoker,
    Transport, TransportError,
};
use serde_json::json;

/// Executes requests with ureq, returning 4xx/5xx responses as data.
struct UreqTransport {
    agent: ureq::Agent,
    token: Option<String>,
}

impl UreqTransport {
    fn new(token: Option<&str>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            token: token.map(str::to_string),
        }
    }

    fn prepare<B>(&self, mut builder: ureq::RequestBuilder<B>, req: &HttpRequest) -> ureq::RequestBuilder<B> {
        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }
        for (name, value) in &req.query {
            builder = builder.query(name, value);
        }
        if let Some(token) = &self.token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        builder
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut response = match (req.method, req.body.as_deref()) {
            (HttpMethod::Get, _) => self.prepare(self.agent.get(&req.url), req).call(),
            (HttpMethod::Delete, _) => self.prepare(self.agent.delete(&req.url), req).call(),
            (HttpMethod::Post, Some(body)) => {
                self.prepare(self.agent.post(&req.url), req).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => self.prepare(self.agent.post(&req.url), req).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                self.prepare(self.agent.put(&req.url), req).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => self.prepare(self.agent.put(&req.url), req).send_empty(),
        }?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();
        Ok(HttpResponse::new(status, body))
    }
}

/// Start the mock server on a random port and return its API base URL.
fn spawn_mock_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}{}", mock_server::API_PREFIX)
}

#[test]
fn task_lifecycle() {
    let base_url = spawn_mock_server();
    let asana = Invoker::new(AsanaClient::new(&base_url), UreqTransport::new(Some("test-token")));

    // Step 1: list workspaces.
    let workspaces = asana
        .call("get_multiple_workspaces", &CallArguments::new())
        .unwrap();
    let workspace_gid = workspaces["data"][0]["gid"].as_str().unwrap().to_string();

    // Step 2: create two tasks.
    let created = asana
        .call(
            "create_a_task",
            &CallArguments::new().body(json!({"name": "Integration test", "due_on": "2024-02-01"})),
        )
        .unwrap();
    assert_eq!(created["data"]["name"], "Integration test");
    assert_eq!(created["data"]["completed"], false);
    let task_gid = created["data"]["gid"].as_str().unwrap().to_string();

    asana
        .call(
            "create_a_task",
            &CallArguments::new().body(json!({"name": "Integration later", "due_on": "2024-12-01"})),
        )
        .unwrap();

    // Step 3: get with opt_fields.
    let fetched = asana
        .call(
            "get_a_task",
            &CallArguments::new()
                .arg("task_gid", task_gid.as_str())
                .arg("opt_fields", "name"),
        )
        .unwrap();
    assert_eq!(fetched["data"]["name"], "Integration test");
    assert!(fetched["data"].get("notes").is_none());

    // Step 4: partial update leaves other fields alone.
    let updated = asana
        .call(
            "update_a_task",
            &CallArguments::new()
                .arg("task_gid", task_gid.as_str())
                .body(json!({"completed": true})),
        )
        .unwrap();
    assert_eq!(updated["data"]["name"], "Integration test");
    assert_eq!(updated["data"]["completed"], true);

    // Step 5: search with a dotted filter given by argument name.
    let found = asana
        .call_json(
            "search_tasks_in_a_workspace",
            &json!({
                "workspace_gid": workspace_gid,
                "text": "integration",
                "due_on_before": "2024-06-01",
            }),
        )
        .unwrap();
    assert_eq!(
        found["query"],
        json!([["text", "integration"], ["due_on.before", "2024-06-01"]])
    );
    let found = found["data"].as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["gid"], task_gid.as_str());

    // Step 6: comment and delete the comment; a 204 decodes to {}.
    let story = asana
        .call(
            "create_a_story_on_a_task",
            &CallArguments::new()
                .arg("task_gid", task_gid.as_str())
                .body(json!({"text": "looks good"})),
        )
        .unwrap();
    let story_gid = story["data"]["gid"].as_str().unwrap().to_string();
    let deleted = asana
        .call("delete_a_story", &CallArguments::new().arg("story_gid", story_gid))
        .unwrap();
    assert_eq!(deleted, json!({}));

    // Step 7: delete the task.
    let deleted = asana
        .call("delete_a_task", &CallArguments::new().arg("task_gid", task_gid.as_str()))
        .unwrap();
    assert_eq!(deleted, json!({"data": {}}));

    // Step 8: get after delete is a 404 with Asana's error message.
    let err = asana
        .call("get_a_task", &CallArguments::new().arg("task_gid", task_gid.as_str()))
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        err.api_messages(),
        vec![format!("task: Unknown object: {task_gid}")]
    );
}

#[test]
fn missing_token_is_http_401() {
    let base_url = spawn_mock_server();
    let asana = Invoker::new(AsanaClient::new(&base_url), UreqTransport::new(None));

    let err = asana
        .call("get_multiple_workspaces", &CallArguments::new())
        .unwrap_err();
    assert!(matches!(err, AsanaError::Http { status: 401, .. }));
}

#[test]
fn unreachable_server_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let asana = Invoker::new(
        AsanaClient::new(&format!("http://{addr}/api/1.0")),
        UreqTransport::new(Some("test-token")),
    );
    let err = asana
        .call("get_multiple_workspaces", &CallArguments::new())
        .unwrap_err();
    assert!(matches!(err, AsanaError::Transport(_)));
}
