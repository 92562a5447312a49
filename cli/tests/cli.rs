//! Binary-level tests for asana-cli

use assert_cmd::cargo;
use predicates::prelude::*;

const TOKEN_ENV: &str = "ASANA_ACCESS_TOKEN";

fn asana_cli() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("asana-cli"));
    // Keep a developer's own config and token out of the tests.
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/asana-cli-tests")
        .env_remove(TOKEN_ENV)
        .env_remove("ASANA_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
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
fn test_version() {
    asana_cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("asana-cli"));
}

#[test]
fn test_endpoints_lists_table() {
    asana_cli()
        .arg("endpoints")
        .assert()
        .success()
        .stdout(predicate::str::contains("get_a_task"))
        .stdout(predicate::str::contains("/workspaces/{workspace_gid}/tasks/search"));
}

#[test]
fn test_endpoints_json_is_tool_list() {
    let output = asana_cli().args(["endpoints", "--json"]).output().unwrap();
    assert!(output.status.success());
    let tools: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tools = tools.as_array().unwrap();
    assert!(tools.iter().any(|tool| tool["name"] == "create_a_project"));
}

#[test]
fn test_describe_shows_wire_names() {
    asana_cli()
        .args(["describe", "search_tasks_in_a_workspace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("due_on_before (sent as due_on.before)"));
}

#[test]
fn test_unknown_endpoint_fails() {
    asana_cli()
        .args(["describe", "get_a_taks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown endpoint `get_a_taks`"));
}

#[test]
fn test_missing_path_param_fails_without_network() {
    asana_cli()
        .args(["--base-url", "http://127.0.0.1:9/api/1.0", "call", "get_a_task"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required path parameter `task_gid`"));
}

#[test]
fn test_missing_token_fails() {
    asana_cli()
        .args([
            "--base-url",
            "http://127.0.0.1:9/api/1.0",
            "call",
            "get_multiple_workspaces",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ASANA_ACCESS_TOKEN is not set"));
}

#[test]
fn test_call_against_mock_server() {
    let base_url = spawn_mock_server();

    let output = asana_cli()
        .env(TOKEN_ENV, "test-token")
        .args(["--base-url", base_url.as_str(), "call", "create_a_task"])
        .args(["--data", r#"{"name": "From the CLI"}"#])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let created: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(created["data"]["name"], "From the CLI");
    let task_arg = format!("task_gid={}", created["data"]["gid"].as_str().unwrap());

    asana_cli()
        .env(TOKEN_ENV, "test-token")
        .args(["--base-url", base_url.as_str(), "call", "get_a_task"])
        .args(["-a", task_arg.as_str(), "-a", "opt_fields=name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("From the CLI"));

    asana_cli()
        .env(TOKEN_ENV, "test-token")
        .args(["--base-url", base_url.as_str(), "call", "get_a_task", "-a", "task_gid=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 404"));
}
