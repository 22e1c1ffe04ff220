use summary_core::{CompletionBackend, CompletionRequest, ViewType, parse_model_json, prompt};
use tracing::{error, info};

use super::require_text;
use crate::{config::CompletionLimits, error::ApiError, models::SummarizeRequest};

/// Summaries default to the clinician view.
pub const DEFAULT_VIEW: ViewType = ViewType::Doctor;

/// Ask the model for a JSON summary and return the validated JSON text.
pub async fn summarize_records(
    backend: &dyn CompletionBackend,
    limits: &CompletionLimits,
    request: SummarizeRequest,
) -> Result<(String, ViewType), ApiError> {
    let medical_text = require_text(request.medical_text, "No medical text provided")?;
    let view = request.view_type.unwrap_or(DEFAULT_VIEW);

    info!(view_type = %view, text_len = medical_text.len(), "Starting summary generation");

    let completion = CompletionRequest::prompt(
        prompt::summary_prompt(&medical_text, view),
        limits.summary_max_tokens,
    )
    .with_temperature(limits.summary_temperature);

    let raw_response = backend.complete(completion).await?;

    let summary = parse_model_json(&raw_response).map_err(|e| {
        error!(view_type = %view, error = %e, "Summary was not valid JSON");
        e
    })?;

    info!(view_type = %view, summary_len = summary.len(), "Summary generated");
    Ok((summary, view))
}
