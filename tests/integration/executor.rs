//! Async execution and response classification against a mock server.

use crate::integration::mock_server::{status_body, unreachable_client, MockServerFixture};
use classify_lib_rust::types::StatusOrigin;
use classify_lib_rust::{Error, Outcome};
use mockito::Matcher;

const PREDICT_PATH: &str = "/v2/models/general-v1.3/outputs";

fn predict_success_body() -> String {
    status_body(
        10000,
        "Ok",
        r#""outputs":[{"id":"o1","status":{"code":10000,"description":"Ok"},
            "input":{"id":"i1","data":{"image":{"url":"https://samples.example.com/metro-north.jpg"}}},
            "data":{"concepts":[
                {"id":"ai_HLmqFqBf","name":"train","value":0.9989112},
                {"id":"ai_fvlBqXZR","name":"railway","value":0.9975532}
            ]}}]"#,
    )
}

#[tokio::test]
async fn test_successful_predict() {
    let fixture = MockServerFixture::new().await;
    let body = predict_success_body();
    let mock = fixture.mock_json("POST", PREDICT_PATH, 200, &body).await;

    let client = fixture.create_test_client();
    let response = client
        .predict("general-v1.3")
        .with_image_url("https://samples.example.com/metro-north.jpg")
        .build()
        .unwrap()
        .execute()
        .await;

    mock.assert_async().await;
    assert!(response.is_successful());
    assert_eq!(response.http_code(), 200);
    assert!(response.status().is_success_code());
    assert_eq!(response.raw_body(), Some(body.as_str()));

    let outputs = response.get().unwrap();
    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].top_concept().unwrap().label(), "train");
}

#[tokio::test]
async fn test_error_status_is_unsuccessful() {
    let fixture = MockServerFixture::new().await;
    let body = r#"{"status":{"code":11102,"description":"Invalid request","details":"Model does not exist"}}"#;
    let _mock = fixture.mock_json("POST", "/v2/models/nope/outputs", 404, body).await;

    let client = fixture.create_test_client();
    let response = client
        .predict("nope")
        .with_image_url("https://x/y.jpg")
        .build()
        .unwrap()
        .execute()
        .await;

    assert!(!response.is_successful());
    assert!(!response.is_network_error());
    assert_eq!(response.http_code(), 404);
    assert_eq!(response.status().code, 11102);
    assert_eq!(response.status().details.as_deref(), Some("Model does not exist"));
    assert_eq!(response.raw_body(), Some(body));
    assert!(response.or_none().is_none());

    match response.into_result().unwrap_err() {
        Error::Remote {
            status,
            class,
            retryable,
            ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(class, "not_found");
            assert!(!retryable);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_is_retryable_remote_error() {
    let fixture = MockServerFixture::new().await;
    let body = status_body(11005, "Making too many requests", "");
    let _mock = fixture.mock_json("GET", "/v2/models", 429, &body).await;

    let client = fixture.create_test_client();
    let response = client.get_models().build().unwrap().execute().await;

    assert_eq!(response.http_code(), 429);
    let err = response.get().unwrap_err();
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_html_error_page_is_network_error() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_raw("GET", "/v2/models/general-v1.3", 502, "<html><body>Bad Gateway</body></html>")
        .await;

    let client = fixture.create_test_client();
    let response = client
        .get_model("general-v1.3")
        .unwrap()
        .execute()
        .await;

    assert!(response.is_network_error());
    assert_eq!(response.http_code(), 0);
    assert!(response.raw_body().is_none());
    assert!(matches!(response.into_outcome(), Outcome::NetworkError(_)));
}

#[tokio::test]
async fn test_successful_body_with_wrong_shape() {
    let fixture = MockServerFixture::new().await;
    let body = status_body(10000, "Ok", r#""model":"not-an-object""#);
    let _mock = fixture.mock_json("GET", "/v2/models/general-v1.3", 200, &body).await;

    let client = fixture.create_test_client();
    let response = client
        .get_model("general-v1.3")
        .unwrap()
        .execute()
        .await;

    assert!(!response.is_successful());
    assert_eq!(response.http_code(), 200);
    assert_eq!(response.status().origin(), StatusOrigin::Unmarshal);
    assert!(matches!(response.get(), Err(Error::Unmarshal { .. })));
}

#[tokio::test]
async fn test_body_without_status_uses_http_reason() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_json("DELETE", "/v2/inputs/abc", 200, "{}").await;

    let client = fixture.create_test_client();
    let response = client.delete_input("abc").unwrap().execute().await;

    assert!(response.is_successful());
    assert_eq!(response.status().origin(), StatusOrigin::Http);
    assert_eq!(response.status().description, "OK");
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let client = unreachable_client();
    let response = client.get_models().build().unwrap().execute().await;

    assert!(response.is_network_error());
    assert_eq!(response.http_code(), 0);
    assert!(response.status().details.is_some());
    assert!(matches!(response.get(), Err(Error::Transport(_))));
}

#[tokio::test]
async fn test_request_can_be_executed_twice() {
    let fixture = MockServerFixture::new().await;
    let body = status_body(10000, "Ok", r#""models":[{"id":"general-v1.3"}]"#);
    let mock = fixture
        .server
        .lock()
        .await
        .mock("GET", "/v2/models")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(&body)
        .expect(2)
        .create_async()
        .await;

    let client = fixture.create_test_client();
    let request = client.get_models().build().unwrap();
    let first = request.execute().await;
    let second = request.clone().execute().await;

    mock.assert_async().await;
    assert_eq!(first.get().unwrap()[0].id, "general-v1.3");
    assert_eq!(second.get().unwrap().len(), 1);
}
