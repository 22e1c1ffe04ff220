//! [`CompletionBackend`] backed by rig's OpenRouter provider.

use async_trait::async_trait;
use rig::{
    client::CompletionClient,
    completion::{Chat, Message},
    providers::openrouter,
};
use tracing::{debug, error};

use crate::{
    error::LlmError,
    llm::{ChatMessage, CompletionBackend, CompletionRequest, Role},
};

/// Builds a fresh agent per request from one shared client.
pub struct RigBackend {
    client: openrouter::Client,
    model: String,
}

impl RigBackend {
    pub fn new(api_key: &str, model: impl Into<String>) -> Self {
        Self {
            client: openrouter::Client::new(api_key),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

fn to_rig_message(msg: &ChatMessage) -> Message {
    match msg.role {
        Role::User => Message::user(msg.content.clone()),
        Role::Assistant => Message::assistant(msg.content.clone()),
    }
}

#[async_trait]
impl CompletionBackend for RigBackend {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        let (prompt, history) = request.split_prompt()?;
        let chat_history: Vec<Message> = history.iter().map(to_rig_message).collect();

        let mut builder = self
            .client
            .agent(&self.model)
            .max_tokens(request.max_tokens);
        if let Some(preamble) = &request.preamble {
            builder = builder.preamble(preamble);
        }
        if let Some(temperature) = request.temperature {
            builder = builder.temperature(temperature);
        }
        let agent = builder.build();

        debug!(
            model = %self.model,
            history_len = chat_history.len(),
            max_tokens = request.max_tokens,
            "Sending completion request"
        );

        agent
            .chat(prompt.to_string(), chat_history)
            .await
            .map_err(|e| {
                error!(model = %self.model, error = %e, "Completion request failed");
                LlmError::Provider(e.to_string())
            })
    }
}
