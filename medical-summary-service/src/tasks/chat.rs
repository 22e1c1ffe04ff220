use summary_core::{CompletionBackend, CompletionRequest, ViewType, prompt};
use tracing::info;

use super::require_text;
use crate::{config::CompletionLimits, error::ApiError, models::ChatRequest};

/// Conversations default to the patient view.
pub const DEFAULT_VIEW: ViewType = ViewType::Patient;

const MISSING_INPUT: &str = "Missing medical text or question";

/// Answer a question about the records, replaying the caller's history first.
///
/// The reply is prose and is returned verbatim.
pub async fn chat_about_records(
    backend: &dyn CompletionBackend,
    limits: &CompletionLimits,
    request: ChatRequest,
) -> Result<String, ApiError> {
    let medical_text = require_text(request.medical_text, MISSING_INPUT)?;
    let question = require_text(request.question, MISSING_INPUT)?;
    let view = request.view_type.unwrap_or(DEFAULT_VIEW);

    info!(
        view_type = %view,
        history_len = request.chat_history.len(),
        "Answering question about records"
    );

    let completion = CompletionRequest::conversation(
        prompt::chat_preamble(&medical_text, view),
        request.chat_history,
        question,
        limits.chat_max_tokens,
    );

    let reply = backend.complete(completion).await?;
    info!(reply_len = reply.len(), "Chat reply received");
    Ok(reply)
}
