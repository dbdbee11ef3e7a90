//! Spawned executions with callbacks.

use crate::integration::mock_server::{status_body, unreachable_client, MockServerFixture};
use classify_lib_rust::types::Model;
use classify_lib_rust::{ApiStatus, Callback, Error, Handlers};
use tokio::sync::mpsc;

#[derive(Debug, PartialEq)]
enum Seen {
    Success(usize),
    Unsuccessful(u16, u32),
    NetworkError,
}

struct ChannelCallback {
    tx: mpsc::UnboundedSender<Seen>,
}

impl Callback<Vec<Model>> for ChannelCallback {
    fn on_success(&mut self, result: Vec<Model>) -> classify_lib_rust::Result<()> {
        let _ = self.tx.send(Seen::Success(result.len()));
        Ok(())
    }

    fn on_unsuccessful(&mut self, http_code: u16, status: &ApiStatus) -> classify_lib_rust::Result<()> {
        let _ = self.tx.send(Seen::Unsuccessful(http_code, status.code));
        Ok(())
    }

    fn on_network_error(&mut self, _error: &Error) -> classify_lib_rust::Result<()> {
        let _ = self.tx.send(Seen::NetworkError);
        Ok(())
    }
}

#[tokio::test]
async fn test_callback_receives_success() {
    let fixture = MockServerFixture::new().await;
    let body = status_body(10000, "Ok", r#""models":[{"id":"a"},{"id":"b"}]"#);
    let _mock = fixture.mock_json("GET", "/v2/models", 200, &body).await;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = fixture
        .create_test_client()
        .get_models()
        .build()
        .unwrap()
        .execute_with(ChannelCallback { tx })
        .unwrap();

    handle.await.unwrap().unwrap();
    assert_eq!(rx.recv().await, Some(Seen::Success(2)));
    // exactly one callback per execution
    assert_eq!(rx.recv().await, None);
}

#[tokio::test]
async fn test_callback_receives_unsuccessful() {
    let fixture = MockServerFixture::new().await;
    let body = status_body(11008, "Invalid API key", "");
    let _mock = fixture.mock_json("GET", "/v2/models", 401, &body).await;

    let (tx, mut rx) = mpsc::unbounded_channel();
    fixture
        .create_test_client()
        .get_models()
        .build()
        .unwrap()
        .execute_with(ChannelCallback { tx })
        .unwrap()
        .await
        .unwrap()
        .unwrap();

    assert_eq!(rx.recv().await, Some(Seen::Unsuccessful(401, 11008)));
}

#[tokio::test]
async fn test_callback_receives_network_error() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    unreachable_client()
        .get_models()
        .build()
        .unwrap()
        .execute_with(ChannelCallback { tx })
        .unwrap()
        .await
        .unwrap()
        .unwrap();

    assert_eq!(rx.recv().await, Some(Seen::NetworkError));
}

#[tokio::test]
async fn test_missing_failure_handler_is_reported() {
    let fixture = MockServerFixture::new().await;
    let body = status_body(21200, "Model does not exist", "");
    let _mock = fixture.mock_json("GET", "/v2/models/missing", 404, &body).await;

    let result = fixture
        .create_test_client()
        .get_model("missing")
        .unwrap()
        .execute_with_handlers(Handlers::new().on_success(|_model: Model| {}))
        .unwrap()
        .await
        .unwrap();

    match result {
        Err(Error::Unhandled { message }) => {
            assert_eq!(
                message,
                "Unsuccessful response from API was not handled. Error code: 404"
            );
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_network_handler_is_reported() {
    let result = unreachable_client()
        .get_model("general-v1.3")
        .unwrap()
        .execute_with_handlers(Handlers::new().on_failure(|_, _| {}))
        .unwrap()
        .await
        .unwrap();

    assert!(matches!(result, Err(Error::Unhandled { .. })));
}

#[tokio::test]
async fn test_handlers_deliver_success_value() {
    let fixture = MockServerFixture::new().await;
    let body = status_body(10000, "Ok", r#""model":{"id":"general-v1.3","name":"general"}"#);
    let _mock = fixture.mock_json("GET", "/v2/models/general-v1.3", 200, &body).await;

    let (tx, rx) = tokio::sync::oneshot::channel();
    fixture
        .create_test_client()
        .get_model("general-v1.3")
        .unwrap()
        .execute_with_handlers(Handlers::new().on_success(move |model: Model| {
            let _ = tx.send(model.name);
        }))
        .unwrap()
        .await
        .unwrap()
        .unwrap();

    assert_eq!(rx.await.unwrap().as_deref(), Some("general"));
}

#[test]
fn test_execute_with_outside_runtime_fails() {
    let client = unreachable_client();
    let result = client
        .get_models()
        .build()
        .unwrap()
        .execute_with(Handlers::new());
    assert!(matches!(result, Err(Error::Runtime { .. })));
}
