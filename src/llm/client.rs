use super::types::*;
use crate::{Result, config::LlmConfig, error::RelayError};
use async_trait::async_trait;
use tracing::{debug, warn};

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Issues one completion request. A non-2xx answer comes back as
    /// [`RelayError::Upstream`] carrying the upstream status and raw body.
    async fn create_chat_completion(
        &self,
        api_key: ApiKey,
        request: ChatCompletionRequest,
    ) -> std::result::Result<ChatCompletionResponse, RelayError>;
}

pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: completions_endpoint(&config.base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn completions_endpoint(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn create_chat_completion(
        &self,
        api_key: ApiKey,
        request: ChatCompletionRequest,
    ) -> std::result::Result<ChatCompletionResponse, RelayError> {
        debug!(
            "Creating chat completion with model {} and {} messages",
            request.model,
            request.messages.len()
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            warn!("Upstream rejected completion request with status {}", status);
            return Err(RelayError::Upstream { status, body });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        debug!(
            "Received chat completion response with {} choices",
            completion.choices.len()
        );

        Ok(completion)
    }
}
