// tests/chat_relay_test.rs
// Chat relay contract: validation, prompt assembly, graceful degradation


use std::time::Duration;

use network_gemini::GeminiError;
use network_gemini::context::{ContextStore, Slot};
use network_gemini::llm::LlmError;
use network_gemini::relay::FALLBACK_REPLY;
use network_gemini::relay::prompt::{SYSTEM_TEMPLATE, TRUNCATION_MARKER};
use test_helpers::{StubBehavior, StubClient, relay_with};

#[tokio::test]
async fn whitespace_message_rejected_without_calling_provider() {
    let store = ContextStore::new();
    let client = StubClient::replying("unused");
    let relay = relay_with(&store, Some(client.clone()));

    for message in ["", "   ", "\n\t "] {
        let err = relay.relay(message).await.unwrap_err();
        assert!(matches!(err, GeminiError::EmptyMessage));
    }
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn missing_credential_rejects_with_not_configured() {
    let store = ContextStore::new();
    let relay = relay_with(&store, None);

    assert!(!relay.is_configured());
    let err = relay.relay("What's the alarm status?").await.unwrap_err();
    assert!(matches!(err, GeminiError::NotConfigured));
}

#[tokio::test]
async fn provider_reply_returned_verbatim() {
    let store = ContextStore::new();
    store
        .put(Slot::AlarmData, "ALARM: cell X down\nALARM: cell Y down\nok")
        .await;
    let client = StubClient::replying("2 active alarms");
    let relay = relay_with(&store, Some(client.clone()));

    let reply = relay.relay("What's the alarm status?").await.unwrap();

    assert_eq!(reply.text, "2 active alarms");
    assert!(!reply.fallback);
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn request_carries_system_prompt_context_and_temperature() {
    let store = ContextStore::new();
    store
        .put(Slot::AlarmData, "ALARM: cell X down\nALARM: cell Y down\nok")
        .await;
    let client = StubClient::replying("ok");
    let relay = relay_with(&store, Some(client.clone()));

    relay.relay("  What's the alarm status?  ").await.unwrap();

    let messages = client.last_messages().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, "system");
    assert!(messages[0].content.starts_with(SYSTEM_TEMPLATE));
    assert!(messages[0].content.contains("2 alarm indicators"));
    assert!(messages[0].content.contains("ALARM: cell Y down"));
    assert_eq!(messages[1].role, "user");
    assert_eq!(messages[1].content, "What's the alarm status?");
    assert_eq!(client.last_temperature(), Some(0.4));
}

#[tokio::test]
async fn oversized_slot_is_truncated_in_prompt() {
    let store = ContextStore::new();
    store.put(Slot::NetworkLog, "y".repeat(10_000)).await;
    let client = StubClient::replying("ok");
    let relay = relay_with(&store, Some(client.clone()));

    relay.relay("summarize").await.unwrap();

    let system = &client.last_messages().unwrap()[0].content;
    assert!(system.contains(TRUNCATION_MARKER));
    assert!(system.contains(&"y".repeat(6000)));
    assert!(!system.contains(&"y".repeat(6001)));
}

#[tokio::test]
async fn provider_server_error_yields_fallback() {
    let store = ContextStore::new();
    let client = StubClient::failing_with(|| LlmError::Status {
        status: 500,
        body: "internal".to_string(),
    });
    let relay = relay_with(&store, Some(client.clone()));

    let reply = relay.relay("status?").await.unwrap();
    assert_eq!(reply.text, FALLBACK_REPLY);
    assert!(reply.fallback);

    // Still serving afterwards
    let again = relay.relay("status again?").await.unwrap();
    assert!(again.fallback);
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn provider_timeout_error_yields_fallback() {
    let store = ContextStore::new();
    let client = StubClient::failing_with(|| LlmError::Timeout);
    let relay = relay_with(&store, Some(client));

    let reply = relay.relay("status?").await.unwrap();
    assert!(reply.fallback);
}

#[tokio::test]
async fn hanging_provider_is_cut_off_by_relay_timeout() {
    let store = ContextStore::new();
    let client = StubClient::new(StubBehavior::Hang(Duration::from_secs(10)));
    let relay = relay_with(&store, Some(client));

    let started = std::time::Instant::now();
    let reply = relay.relay("status?").await.unwrap();

    assert!(reply.fallback);
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn empty_provider_reply_yields_fallback() {
    let store = ContextStore::new();
    let client = StubClient::new(StubBehavior::NoChoices);
    let relay = relay_with(&store, Some(client));

    let reply = relay.relay("status?").await.unwrap();
    assert_eq!(reply.text, FALLBACK_REPLY);
}

#[tokio::test]
async fn store_writable_while_provider_call_in_flight() {
    let store = ContextStore::new();
    let client = StubClient::new(StubBehavior::Hang(Duration::from_millis(200)));
    let relay = std::sync::Arc::new(relay_with(&store, Some(client)));

    let pending = {
        let relay = relay.clone();
        tokio::spawn(async move { relay.relay("status?").await })
    };

    tokio::time::sleep(Duration::from_millis(20)).await;
    // Would deadlock if the relay held the store lock across the call
    tokio::time::timeout(Duration::from_millis(100), store.put(Slot::NetworkLog, "new"))
        .await
        .expect("put blocked while provider call was in flight");

    pending.await.unwrap().unwrap();
}
