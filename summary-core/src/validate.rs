use serde_json::Value;
use tracing::warn;

use crate::{error::MalformedOutput, extract::extract_json};

/// Strictly parse `candidate`, handing it back unchanged when it is JSON.
///
/// On failure the error keeps `raw_response` (the untouched model text), not
/// the candidate.
pub fn validate_json(candidate: String, raw_response: &str) -> Result<String, MalformedOutput> {
    match serde_json::from_str::<Value>(&candidate) {
        Ok(_) => Ok(candidate),
        Err(e) => {
            warn!(error = %e, raw_len = raw_response.len(), "Model output is not valid JSON");
            Err(MalformedOutput {
                message: e.to_string(),
                raw_response: raw_response.to_string(),
            })
        }
    }
}

/// Extract then validate in one step.
pub fn parse_model_json(raw_response: &str) -> Result<String, MalformedOutput> {
    validate_json(extract_json(raw_response), raw_response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_candidate_is_returned_unchanged() {
        let candidate = "{ \"a\" : 1 }".to_string();
        assert_eq!(validate_json(candidate.clone(), "raw"), Ok(candidate));
    }

    #[test]
    fn test_failure_carries_position_and_raw_text() {
        let raw = "```json\n{\"a\": 1,}\n```";
        let err = parse_model_json(raw).unwrap_err();

        assert_eq!(err.raw_response, raw);
        assert!(err.message.contains("line 1"));
        assert!(err.to_string().starts_with("Invalid JSON response from AI: "));
    }

    #[test]
    fn test_plain_prose_fails_validation() {
        let err = parse_model_json("I could not find any records.").unwrap_err();
        assert_eq!(err.raw_response, "I could not find any records.");
    }

    #[test]
    fn test_fenced_summary_passes() {
        let raw = "```json\n{\"allergies\": [\"penicillin\"]}\n```";
        assert_eq!(
            parse_model_json(raw).unwrap(),
            "{\"allergies\": [\"penicillin\"]}"
        );
    }
}
