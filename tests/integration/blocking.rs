//! Blocking execution. These run outside any async runtime.

use crate::integration::mock_server::{client_for, status_body, unreachable_client, TEST_API_KEY};
use classify_lib_rust::types::Concept;
use mockito::{Matcher, Server};

#[test]
fn test_blocking_get_concepts() {
    let mut server = Server::new();
    let body = status_body(
        10000,
        "Ok",
        r#""concepts":[{"id":"dog","name":"dog","app_id":"a1"},{"id":"cat","name":"cat","app_id":"a1"}]"#,
    );
    let mock = server
        .mock("GET", "/v2/concepts")
        .match_header("authorization", format!("Key {}", TEST_API_KEY).as_str())
        .match_header("accept", "application/json")
        .match_header("x-classify-request-id", Matcher::Regex("^[0-9a-f-]{36}$".into()))
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("per_page".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body(&body)
        .create();

    let client = client_for(&server.url());
    let response = client
        .get_concepts()
        .page(2)
        .per_page(10)
        .build()
        .unwrap()
        .execute_blocking();

    mock.assert();
    let concepts: &Vec<Concept> = response.get().unwrap();
    assert_eq!(
        concepts.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        vec!["dog", "cat"]
    );
}

#[test]
fn test_blocking_server_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("DELETE", "/v2/inputs")
        .match_body(Matcher::Json(serde_json::json!({"delete_all": true})))
        .with_status(500)
        .with_body(status_body(98004, "Internal error", "").as_str())
        .create();

    let client = client_for(&server.url());
    let response = client.delete_all_inputs().execute_blocking();

    assert!(!response.is_successful());
    assert_eq!(response.http_code(), 500);
    assert_eq!(response.status().code, 98004);
    assert!(response.get().unwrap_err().is_retryable());
}

#[test]
fn test_blocking_connection_refused() {
    let response = unreachable_client()
        .get_inputs()
        .build()
        .unwrap()
        .execute_blocking();
    assert!(response.is_network_error());
    assert_eq!(response.http_code(), 0);
}
