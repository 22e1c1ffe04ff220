use thiserror::Error;

/// Failures raised while talking to the language model.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Completion request contains no messages")]
    EmptyConversation,

    #[error("Last message of a completion request must come from the user")]
    PromptNotLast,

    #[error("{0}")]
    Provider(String),
}

/// Model output that could not be coerced into strict JSON.
///
/// Only the untouched model text is kept; the extracted candidate is dropped.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid JSON response from AI: {message}")]
pub struct MalformedOutput {
    pub message: String,
    pub raw_response: String,
}
