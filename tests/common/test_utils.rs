use concierge_relay::{
    config::{ApiKeySource, LlmConfig, StaticApiKey},
    llm::{LlmClient, OpenAiClient},
    relay::Relay,
    server::{self, handlers::AppState},
};
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "sk-test-key";
pub const TEST_PERSONA: &str = "You are the One Mambo Beach concierge AI.";

/// LLM config pointing at `base_url` with the stock model and persona
pub fn create_test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        ..LlmConfig::default()
    }
}

/// Upstream success body carrying a single choice
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

pub fn create_relay(client: impl LlmClient + 'static, api_key: impl ApiKeySource + 'static) -> Relay {
    Relay::new(
        Arc::new(client),
        Arc::new(api_key),
        &create_test_llm_config("http://127.0.0.1:1"),
    )
}

/// Relay wired to a real `OpenAiClient` talking to `upstream`
pub fn create_upstream_relay(upstream: &MockServer, api_key: StaticApiKey) -> Relay {
    let config = create_test_llm_config(&upstream.uri());
    let client = OpenAiClient::new(&config).unwrap();
    Relay::new(Arc::new(client), Arc::new(api_key), &config)
}

pub fn create_test_app(relay: Relay) -> axum::Router {
    server::router(AppState {
        relay: Arc::new(relay),
    })
}
