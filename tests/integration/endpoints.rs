//! Request shapes sent by the endpoint builders.

use crate::integration::mock_server::{status_body, MockServerFixture};
use classify_lib_rust::types::{Concept, Input};
use serde_json::json;

#[tokio::test]
async fn test_predict_sends_output_config() {
    let fixture = MockServerFixture::new().await;
    let expected = json!({
        "inputs": [{"data": {"image": {"url": "https://x/dog.jpg"}}}],
        "model": {"output_info": {"output_config": {"min_value": 0.25, "max_concepts": 2}}}
    });
    let body = status_body(
        10000,
        "Ok",
        r#""outputs":[{"id":"o","data":{"concepts":[{"id":"dog","name":"dog","value":0.97}]}}]"#,
    );
    let mock = fixture
        .mock_json_with_body("POST", "/v2/models/general-v1.3/outputs", expected, 200, &body)
        .await;

    let response = fixture
        .create_test_client()
        .predict("general-v1.3")
        .with_image_url("https://x/dog.jpg")
        .with_min_value(0.25)
        .with_max_concepts(2)
        .build()
        .unwrap()
        .execute()
        .await;

    mock.assert_async().await;
    let outputs = response.into_result().unwrap();
    assert_eq!(outputs[0].concepts()[0].label(), "dog");
}

#[tokio::test]
async fn test_add_inputs_returns_created_inputs() {
    let fixture = MockServerFixture::new().await;
    let expected = json!({
        "inputs": [{
            "id": "in-1",
            "data": {
                "image": {"url": "https://x/cat.jpg"},
                "concepts": [{"id": "cat", "value": 1.0}]
            }
        }]
    });
    let body = status_body(
        10000,
        "Ok",
        r#""inputs":[{"id":"in-1","created_at":"2017-10-13T20:53:00Z","data":{"image":{"url":"https://x/cat.jpg"},"concepts":[{"id":"cat","value":1}]}}]"#,
    );
    let mock = fixture
        .mock_json_with_body("POST", "/v2/inputs", expected, 200, &body)
        .await;

    let response = fixture
        .create_test_client()
        .add_inputs()
        .plus(
            Input::from_url("https://x/cat.jpg")
                .with_id("in-1")
                .with_concepts([Concept::positive("cat")]),
        )
        .build()
        .unwrap()
        .execute()
        .await;

    mock.assert_async().await;
    let inputs = response.get().unwrap();
    assert_eq!(inputs[0].id.as_deref(), Some("in-1"));
    assert_eq!(inputs[0].data.concepts[0].value, Some(1.0));
}

#[tokio::test]
async fn test_search_concepts() {
    let fixture = MockServerFixture::new().await;
    let expected = json!({
        "concept_query": {"name": "do*"},
        "pagination": {"page": 1, "per_page": 20}
    });
    let body = status_body(10000, "Ok", r#""concepts":[{"id":"dog","name":"dog"},{"id":"dolphin","name":"dolphin"}]"#);
    let _mock = fixture
        .mock_json_with_body("POST", "/v2/concepts/searches", expected, 200, &body)
        .await;

    let response = fixture
        .create_test_client()
        .search_concepts("do*")
        .build()
        .unwrap()
        .execute()
        .await;

    let names: Vec<_> = response.get().unwrap().iter().map(|c| c.label().to_string()).collect();
    assert_eq!(names, vec!["dog", "dolphin"]);
}

#[tokio::test]
async fn test_get_input_percent_encodes_id() {
    let fixture = MockServerFixture::new().await;
    let body = status_body(10000, "Ok", r#""input":{"id":"a b","data":{}}"#);
    let mock = fixture.mock_json("GET", "/v2/inputs/a%20b", 200, &body).await;

    let response = fixture
        .create_test_client()
        .get_input("a b")
        .unwrap()
        .execute()
        .await;

    mock.assert_async().await;
    assert_eq!(response.get().unwrap().id.as_deref(), Some("a b"));
}
