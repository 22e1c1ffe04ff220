//! The seam between request handling and the hosted model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LlmError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Everything needed for one model invocation.
///
/// `messages` is in conversation order; the last entry is the user turn the
/// model must answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub preamble: Option<String>,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u64,
    pub temperature: Option<f64>,
}

impl CompletionRequest {
    /// Single user turn, no preamble.
    pub fn prompt(prompt: impl Into<String>, max_tokens: u64) -> Self {
        Self {
            preamble: None,
            messages: vec![ChatMessage::user(prompt)],
            max_tokens,
            temperature: None,
        }
    }

    /// Replay `history` in order and ask `question` last.
    pub fn conversation(
        preamble: impl Into<String>,
        history: Vec<ChatMessage>,
        question: impl Into<String>,
        max_tokens: u64,
    ) -> Self {
        let mut messages = history;
        messages.push(ChatMessage::user(question));
        Self {
            preamble: Some(preamble.into()),
            messages,
            max_tokens,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Split into the final user prompt and the turns preceding it.
    pub fn split_prompt(&self) -> Result<(&str, &[ChatMessage]), LlmError> {
        let (last, history) = self
            .messages
            .split_last()
            .ok_or(LlmError::EmptyConversation)?;
        if last.role != Role::User {
            return Err(LlmError::PromptNotLast);
        }
        Ok((last.content.as_str(), history))
    }
}

/// A hosted text-generation service.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Run one completion and return the model's text verbatim.
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;
}
