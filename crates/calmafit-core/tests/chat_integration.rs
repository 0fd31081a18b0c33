//! Integration tests for the chat client against a mock endpoint.

use calmafit_core::chat::{ChatClient, ChatMessage, FALLBACK_REPLY};
use calmafit_core::record::{AnxietyFrequency, MainConcern, PhysicalActivity, Profile};
use calmafit_core::storage::ChatConfig;

fn config_for(server: &mockito::ServerGuard) -> ChatConfig {
    ChatConfig {
        endpoint: format!("{}/v1/chat/completions", server.url()),
        ..Default::default()
    }
}

fn client_for(server: &mockito::ServerGuard) -> ChatClient {
    ChatClient::with_api_key(config_for(server), Some("test-key".to_string()))
}

#[tokio::test]
async fn successful_completion_returns_the_message() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"choices":[{"message":{"role":"assistant","content":"That sounds hard. I'm here."}}]}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let reply = client
        .send(&[ChatMessage::user("I feel anxious")], None)
        .await
        .unwrap();

    assert_eq!(reply, "That sounds hard. I'm here.");
    mock.assert_async().await;
}

#[tokio::test]
async fn request_carries_fixed_model_and_profile_prompt() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(mockito::Matcher::AllOf(vec![
            mockito::Matcher::PartialJson(serde_json::json!({
                "model": "gpt-4o",
                "temperature": 0.8,
                "max_tokens": 300,
            })),
            mockito::Matcher::Regex("Name: Ana".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"ok"}}]}"#)
        .create_async()
        .await;

    let profile = Profile::new(
        "Ana",
        MainConcern::Sleep,
        AnxietyFrequency::Sometimes,
        PhysicalActivity::None,
    );
    let client = client_for(&server);
    client
        .send(&[ChatMessage::user("hello")], Some(&profile))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn endpoint_failure_substitutes_the_apology() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(500)
        .with_body(r#"{"error":"boom"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let reply = client
        .reply_or_fallback(&[ChatMessage::user("hello")], None)
        .await;

    assert_eq!(reply, FALLBACK_REPLY);
}

#[tokio::test]
async fn empty_choices_substitute_the_apology() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let reply = client
        .reply_or_fallback(&[ChatMessage::user("hello")], None)
        .await;

    assert_eq!(reply, FALLBACK_REPLY);
}
