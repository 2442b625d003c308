//! Notification session integration tests
//!
//! Every test drives a real `NotificationSession` against the
//! in-process mock broker: one socket, one subscription, ordered
//! delivery, credential attach, and handshake-failure recovery.

use std::sync::Arc;
use std::time::Duration;

use traodoido::realtime::{ConnectionState, NotificationSession, NotificationSink};
use traodoido::shared::ClientError;

use crate::common::{broker_config, temp_token_store, MockBroker, RecordingSink};

fn session_with(
    broker: &MockBroker,
    tokens: traodoido::client::TokenStore,
    sink: Arc<RecordingSink>,
) -> NotificationSession {
    NotificationSession::new(
        broker_config(&broker.url()),
        tokens,
        sink as Arc<dyn NotificationSink>,
    )
}

#[tokio::test]
async fn repeated_connect_keeps_one_socket_and_one_subscription() {
    let broker = MockBroker::start().await;
    let (_dir, tokens) = temp_token_store();
    let sink = RecordingSink::new();
    let session = session_with(&broker, tokens, Arc::clone(&sink));

    session.connect().await.unwrap();
    session.connect().await.unwrap();
    session.connect().await.unwrap();
    broker.wait_for_subscriptions(1).await;

    broker.push(r#"{"notifyContent":"hello"}"#);
    sink.wait_for(1).await;
    // settle time so a duplicate subscription would have delivered twice
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(broker.connections(), 1);
    assert_eq!(broker.subscriptions(), 1);
    assert_eq!(sink.texts(), ["hello"]);
}

#[tokio::test]
async fn concurrent_connects_collapse_to_one_attempt() {
    let broker = MockBroker::start().await;
    let (_dir, tokens) = temp_token_store();
    let sink = RecordingSink::new();
    let session = session_with(&broker, tokens, sink);

    let (a, b, c) = tokio::join!(session.connect(), session.connect(), session.connect());
    a.unwrap();
    b.unwrap();
    c.unwrap();
    broker.wait_for_subscriptions(1).await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(broker.connections(), 1);
    assert_eq!(broker.subscriptions(), 1);
}

#[tokio::test]
async fn stored_credential_is_attached_to_the_connect_frame() {
    let broker = MockBroker::start().await;
    let (_dir, tokens) = temp_token_store();
    tokens.save("abc123").unwrap();
    let sink = RecordingSink::new();
    let session = session_with(&broker, tokens, sink);

    session.connect().await.unwrap();
    broker.wait_for_subscriptions(1).await;

    assert_eq!(
        broker.connect_header("Authorization").as_deref(),
        Some("Bearer abc123")
    );
}

#[tokio::test]
async fn missing_credential_connects_unauthenticated() {
    let broker = MockBroker::start().await;
    let (_dir, tokens) = temp_token_store();
    let sink = RecordingSink::new();
    let session = session_with(&broker, tokens, sink);

    session.connect().await.unwrap();
    broker.wait_for_subscriptions(1).await;

    assert!(broker.connect_header("Authorization").is_none());
    assert_eq!(session.state().await, ConnectionState::Connected);
}

#[tokio::test]
async fn explicit_content_is_delivered_verbatim() {
    let broker = MockBroker::start().await;
    let (_dir, tokens) = temp_token_store();
    let sink = RecordingSink::new();
    let session = session_with(&broker, tokens, Arc::clone(&sink));

    session.connect().await.unwrap();
    broker.wait_for_subscriptions(1).await;
    broker.push(r#"{"notifyContent":"Xin chào"}"#);
    sink.wait_for(1).await;

    assert_eq!(sink.texts(), ["Xin chào"]);
}

#[tokio::test]
async fn requester_name_synthesizes_a_trade_request_phrase() {
    let broker = MockBroker::start().await;
    let (_dir, tokens) = temp_token_store();
    let sink = RecordingSink::new();
    let session = session_with(&broker, tokens, Arc::clone(&sink));

    session.connect().await.unwrap();
    broker.wait_for_subscriptions(1).await;
    broker.push(r#"{"requesterName":"An"}"#);
    sink.wait_for(1).await;

    let texts = sink.texts();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains("An"));
    assert!(texts[0].contains("trade request"));
}

#[tokio::test]
async fn malformed_payload_is_dropped_and_the_subscription_survives() {
    let broker = MockBroker::start().await;
    let (_dir, tokens) = temp_token_store();
    let sink = RecordingSink::new();
    let session = session_with(&broker, tokens, Arc::clone(&sink));

    session.connect().await.unwrap();
    broker.wait_for_subscriptions(1).await;
    broker.push("not json");
    broker.push(r#"{"notifyContent":"still alive"}"#);
    sink.wait_for(1).await;

    assert_eq!(sink.texts(), ["still alive"]);
    assert_eq!(session.state().await, ConnectionState::Connected);
}

#[tokio::test]
async fn delivery_preserves_transport_order() {
    let broker = MockBroker::start().await;
    let (_dir, tokens) = temp_token_store();
    let sink = RecordingSink::new();
    let session = session_with(&broker, tokens, Arc::clone(&sink));

    session.connect().await.unwrap();
    broker.wait_for_subscriptions(1).await;
    for text in ["one", "two", "three"] {
        broker.push(&format!(r#"{{"notifyContent":"{}"}}"#, text));
    }
    sink.wait_for(3).await;

    assert_eq!(sink.texts(), ["one", "two", "three"]);
}

#[tokio::test]
async fn unreachable_broker_leaves_the_session_disconnected() {
    // grab a port and release it so the connect attempt is refused
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (_dir, tokens) = temp_token_store();
    let sink = RecordingSink::new();
    let session = NotificationSession::new(
        broker_config(&format!("ws://{}", addr)),
        tokens,
        sink as Arc<dyn NotificationSink>,
    );

    let err = session.connect().await.unwrap_err();
    assert!(matches!(err, ClientError::Handshake { .. }));
    assert_eq!(session.state().await, ConnectionState::Disconnected);
}

#[tokio::test]
async fn failed_handshake_does_not_block_a_later_retry() {
    let broker = MockBroker::start_rejecting_first().await;
    let (_dir, tokens) = temp_token_store();
    let sink = RecordingSink::new();
    let session = session_with(&broker, tokens, Arc::clone(&sink));

    let err = session.connect().await.unwrap_err();
    assert!(matches!(err, ClientError::Handshake { .. }));
    assert_eq!(session.state().await, ConnectionState::Disconnected);

    // no stale partial state: the retry runs the full handshake
    session.connect().await.unwrap();
    broker.wait_for_subscriptions(1).await;
    broker.push(r#"{"notifyContent":"second time lucky"}"#);
    sink.wait_for(1).await;

    assert_eq!(sink.texts(), ["second time lucky"]);
}

#[tokio::test]
async fn disconnect_tears_down_and_reconnect_starts_fresh() {
    let broker = MockBroker::start().await;
    let (_dir, tokens) = temp_token_store();
    let sink = RecordingSink::new();
    let session = session_with(&broker, tokens, Arc::clone(&sink));

    session.connect().await.unwrap();
    broker.wait_for_subscriptions(1).await;
    session.disconnect().await;
    assert_eq!(session.state().await, ConnectionState::Disconnected);

    session.connect().await.unwrap();
    broker.wait_for_subscriptions(2).await;
    assert_eq!(broker.connections(), 2);

    broker.push(r#"{"notifyContent":"after reconnect"}"#);
    sink.wait_for(1).await;
    assert_eq!(sink.texts(), ["after reconnect"]);
}
