pub mod chat;
pub mod explain_term;
pub mod summarize;

pub use chat::chat_about_records;
pub use explain_term::explain_term;
pub use summarize::summarize_records;

use crate::error::ApiError;

/// Return the trimmed-non-empty value of a required text field.
fn require_text(value: Option<String>, message: &str) -> Result<String, ApiError> {
    value
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| ApiError::InvalidInput(message.to_string()))
}
