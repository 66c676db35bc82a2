use async_trait::async_trait;
use concierge_relay::{
    RelayError,
    llm::{
        ApiKey, AssistantMessage, ChatCompletionRequest, ChatCompletionResponse, Choice, LlmClient,
    },
};
use mockall::mock;

// Expectations are verified when the mock is dropped
mock! {
    pub LlmClient {}

    #[async_trait]
    impl LlmClient for LlmClient {
        async fn create_chat_completion(
            &self,
            api_key: ApiKey,
            request: ChatCompletionRequest,
        ) -> Result<ChatCompletionResponse, RelayError>;
    }
}

/// Upstream completion with a single choice carrying `content`
pub fn completion(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        choices: vec![Choice {
            message: AssistantMessage {
                content: Some(content.to_string()),
            },
        }],
    }
}

/// Mock that fails the test if the relay ever reaches the upstream
pub fn never_called() -> MockLlmClient {
    let mut client = MockLlmClient::new();
    client.expect_create_chat_completion().never();
    client
}

/// Mock answering exactly once with `content`
pub fn replying(content: &'static str) -> MockLlmClient {
    let mut client = MockLlmClient::new();
    client
        .expect_create_chat_completion()
        .times(1)
        .returning(move |_, _| Ok(completion(content)));
    client
}
