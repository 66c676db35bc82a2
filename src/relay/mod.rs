//! Single-turn chat relay: validate the inbound message, forward it to the
//! upstream completion API behind the concierge persona, map the outcome
//! back to a JSON response.

pub mod envelope;
pub mod request;

pub use envelope::{FunctionEvent, FunctionResult, RelayResponse, ResponseBody};
pub use request::ChatRequest;

use crate::{
    config::{ApiKeySource, LlmConfig},
    error::RelayError,
    llm::{ApiKey, ChatCompletionRequest, LlmClient},
};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

pub struct Relay {
    client: Arc<dyn LlmClient>,
    api_key: Arc<dyn ApiKeySource>,
    model: String,
    persona: String,
}

impl Relay {
    pub fn new(
        client: Arc<dyn LlmClient>,
        api_key: Arc<dyn ApiKeySource>,
        config: &LlmConfig,
    ) -> Self {
        Self {
            client,
            api_key,
            model: config.model.clone(),
            persona: config.system_prompt.clone(),
        }
    }

    /// Runs one invocation. Never fails: every error becomes a response.
    pub async fn handle(&self, body: Option<&str>) -> RelayResponse {
        let span = info_span!("relay", request_id = %Uuid::new_v4());

        async {
            match self.relay(body).await {
                Ok(reply) => {
                    info!("Relayed reply of {} chars", reply.chars().count());
                    RelayResponse::reply(reply)
                }
                Err(e) => {
                    match &e {
                        RelayError::MissingMessage | RelayError::MissingApiKey => {
                            warn!("Rejected relay request: {}", e)
                        }
                        RelayError::Upstream { status, .. } => {
                            warn!("Forwarding upstream error with status {}", status)
                        }
                        RelayError::Unexpected(msg) => error!("Relay failed: {}", msg),
                    }
                    RelayResponse::from(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    pub async fn handle_event(&self, event: FunctionEvent) -> FunctionResult {
        self.handle(event.body.as_deref()).await.into()
    }

    /// The relay pipeline with each failure site surfaced as a `RelayError`.
    pub async fn relay(&self, body: Option<&str>) -> Result<String, RelayError> {
        let message = ChatRequest::parse(body)?.into_message()?;
        match message.as_str() {
            Some(text) => info!("Received chat message of {} chars", text.chars().count()),
            None => info!("Received non-string chat message, relaying as JSON"),
        }

        let api_key = self
            .api_key
            .api_key()
            .map(ApiKey::new)
            .ok_or(RelayError::MissingApiKey)?;

        let request =
            ChatCompletionRequest::single_turn(&self.model, self.persona.as_str(), message);

        self.client
            .create_chat_completion(api_key, request)
            .await?
            .into_reply()
    }
}
