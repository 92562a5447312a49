//! Verify request building and response parsing against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Each vector names an endpoint, its arguments, the expected request, a
//! simulated response and the expected result or error. Bodies are compared as
//! parsed JSON so field ordering cannot cause false negatives.

use asana_core::{
    AsanaClient, AsanaError, CallArguments, EndpointTable, HttpMethod, HttpResponse,
};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000/api/1.0";

fn client() -> AsanaClient {
    AsanaClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn string_pairs(value: &Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let arr = pair.as_array().unwrap();
            (
                arr[0].as_str().unwrap().to_string(),
                arr[1].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

fn arguments(case: &Value) -> CallArguments {
    let mut args = CallArguments::new();
    for (name, value) in case["args"].as_object().unwrap() {
        args.insert(name.clone(), value.as_str().unwrap());
    }
    args.set_body(case.get("payload").cloned());
    args
}

fn simulated(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        u16::try_from(sim["status"].as_u64().unwrap()).unwrap(),
        sim["body"].as_str().unwrap(),
    )
}

/// Check every case in a vector file that expects success.
fn run_success_vectors(raw: &str) {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let c = client();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let descriptor = EndpointTable::asana()
            .get(case["endpoint"].as_str().unwrap())
            .unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_request(descriptor, &arguments(case)).unwrap();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, expected_req["path"].as_str().unwrap(), "{name}: path");
        assert_eq!(req.url, format!("{BASE_URL}{}", req.path), "{name}: url");
        assert_eq!(req.query, string_pairs(&expected_req["query"]), "{name}: query");
        assert_eq!(req.headers, string_pairs(&expected_req["headers"]), "{name}: headers");

        match &expected_req["body"] {
            Value::Null => assert!(req.body.is_none(), "{name}: body should be None"),
            expected => {
                let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
                assert_eq!(&body, expected, "{name}: body");
            }
        }

        // Verify parse
        let value = c.parse_response(simulated(case)).unwrap();
        assert_eq!(value, case["expected_result"], "{name}: parsed result");
    }
}

#[test]
fn task_test_vectors() {
    run_success_vectors(include_str!("../../test-vectors/tasks.json"));
}

#[test]
fn search_test_vectors() {
    run_success_vectors(include_str!("../../test-vectors/search.json"));
}

#[test]
fn error_test_vectors() {
    let raw = include_str!("../../test-vectors/errors.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let c = client();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let descriptor = EndpointTable::asana()
            .get(case["endpoint"].as_str().unwrap())
            .unwrap();
        let expected_error = case["expected_error"].as_str().unwrap();

        let result = c
            .build_request(descriptor, &arguments(case))
            .and_then(|_| c.parse_response(simulated(case)));
        let err = result.unwrap_err();

        match expected_error {
            "Configuration" => {
                assert!(matches!(err, AsanaError::Configuration(_)), "{name}: expected Configuration, got {err}");
            }
            "Http" => {
                let status = u16::try_from(case["expected_status"].as_u64().unwrap()).unwrap();
                assert!(
                    matches!(err, AsanaError::Http { status: s, .. } if s == status),
                    "{name}: expected Http {status}, got {err}"
                );
            }
            "Decode" => assert!(matches!(err, AsanaError::Decode(_)), "{name}: expected Decode"),
            other => panic!("{name}: unknown expected_error: {other}"),
        }
    }
}
