use summary_core::{CompletionBackend, CompletionRequest, prompt};
use tracing::info;

use super::require_text;
use crate::{config::CompletionLimits, error::ApiError, models::ExplainTermRequest};

/// Explain a medical term in plain language. Returns the term and the
/// model's explanation.
pub async fn explain_term(
    backend: &dyn CompletionBackend,
    limits: &CompletionLimits,
    request: ExplainTermRequest,
) -> Result<(String, String), ApiError> {
    let term = require_text(request.term, "No term provided")?;
    let context = request.context.unwrap_or_default();

    info!(term = %term, context_len = context.len(), "Explaining term");

    let completion = CompletionRequest::prompt(
        prompt::explain_term_prompt(&term, &context),
        limits.explain_max_tokens,
    );
    let explanation = backend.complete(completion).await?;

    Ok((term, explanation))
}
