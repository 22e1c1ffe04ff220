//! Best-effort location of a JSON document inside free-form model output.
//!
//! Models wrap structured output inconsistently: sometimes in a ```json fence,
//! sometimes in an unlabeled fence, sometimes as a bare object surrounded by
//! prose. Strategies are tried in that order and the first hit wins.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\s*\n(.*?)\n```").expect("Invalid regex"));

static ANY_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```\s*\n(.*?)\n```").expect("Invalid regex"));

/// Return the substring of `text` most likely to be JSON.
///
/// Never fails: when nothing JSON-shaped is found the trimmed input comes back
/// unchanged. The result is not guaranteed to parse.
pub fn extract_json(text: &str) -> String {
    if let Some(body) = fenced_body(&JSON_FENCE, text) {
        debug!("Found json-labeled fence");
        return body.to_string();
    }

    // An unlabeled fence may just as well hold prose, so it has to parse.
    if let Some(body) = fenced_body(&ANY_FENCE, text) {
        if serde_json::from_str::<Value>(body).is_ok() {
            debug!("Found unlabeled fence holding valid JSON");
            return body.to_string();
        }
    }

    if let Some(span) = find_object_span(text) {
        debug!(span_len = span.len(), "Found object span");
        return span.trim().to_string();
    }

    text.trim().to_string()
}

fn fenced_body<'a>(pattern: &Regex, text: &'a str) -> Option<&'a str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|body| body.as_str().trim())
}

/// Locate a `{...}` span in `text`.
///
/// Prefers the first balanced object, tracking nesting depth and skipping
/// braces inside string literals. If no object ever balances, falls back to
/// the greedy span from the first `{` to the last `}`.
pub fn find_object_span(text: &str) -> Option<&str> {
    first_balanced_object(text).or_else(|| greedy_object(text))
}

/// Single pass from the first `{`, keeping a stack of open brace offsets.
///
/// Returns as soon as the outermost object closes; otherwise the closed object
/// with the earliest start wins. Linear in the length of `text`.
fn first_balanced_object(text: &str) -> Option<&str> {
    let first = text.find('{')?;
    let mut open: Vec<usize> = Vec::new();
    let mut best: Option<(usize, usize)> = None;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[first..].char_indices() {
        let idx = first + offset;
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => open.push(idx),
            '}' => {
                let Some(start) = open.pop() else { continue };
                if open.is_empty() {
                    return Some(&text[start..=idx]);
                }
                if best.is_none_or(|(best_start, _)| start < best_start) {
                    best = Some((start, idx));
                }
            }
            _ => {}
        }
    }

    best.map(|(start, end)| &text[start..=end])
}

fn greedy_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_object_is_returned_as_is() {
        assert_eq!(extract_json(r#"{"a":1}"#), r#"{"a":1}"#);
    }

    #[test]
    fn test_json_fence_interior_is_trimmed() {
        assert_eq!(extract_json("```json\n{\"a\":1}\n```"), r#"{"a":1}"#);
        assert_eq!(
            extract_json("Sure!\n```json  \n\n  {\"a\": [1, 2]}  \n```\nLet me know."),
            r#"{"a": [1, 2]}"#
        );
    }

    #[test]
    fn test_json_fence_is_not_revalidated() {
        assert_eq!(extract_json("```json\n{oops}\n```"), "{oops}");
    }

    #[test]
    fn test_unlabeled_fence_with_valid_json() {
        let text = "Result:\n```\n{\"status\": \"ok\"}\n```";
        assert_eq!(extract_json(text), r#"{"status": "ok"}"#);
    }

    #[test]
    fn test_unlabeled_fence_with_prose_falls_through() {
        let text = "```\nnot json at all\n```";
        let extracted = extract_json(text);

        assert_ne!(extracted, "not json at all");
        assert_eq!(extracted, text);
    }

    #[test]
    fn test_unlabeled_prose_fence_then_object() {
        let text = "```\nsee below\n```\nAnswer: {\"a\": 2}";
        assert_eq!(extract_json(text), r#"{"a": 2}"#);
    }

    #[test]
    fn test_object_inside_prose() {
        assert_eq!(
            extract_json(r#"here is the result: {"a": {"b": 2}} done."#),
            r#"{"a": {"b": 2}}"#
        );
    }

    #[test]
    fn test_plain_text_is_trimmed_only() {
        assert_eq!(extract_json("  no structure here \n"), "no structure here");
    }

    #[test]
    fn test_braces_inside_strings_do_not_close_object() {
        let text = r#"Output: {"note": "use } and { freely", "escaped": "say \"}\""} trailing }"#;
        assert_eq!(
            find_object_span(text),
            Some(r#"{"note": "use } and { freely", "escaped": "say \"}\""}"#)
        );
    }

    #[test]
    fn test_first_of_several_objects_wins() {
        let text = r#"first {"a": 1} then {"b": 2}"#;
        assert_eq!(find_object_span(text), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn test_unclosed_outer_object_yields_inner_object() {
        assert_eq!(find_object_span("start { one { two } end"), Some("{ two }"));
        assert_eq!(find_object_span("{ closed } } {"), Some("{ closed }"));
    }

    #[test]
    fn test_innermost_closed_objects_prefer_earliest_start() {
        assert_eq!(find_object_span("{ { {a} } tail"), Some("{ {a} }"));
    }

    #[test]
    fn test_long_run_of_open_braces_scans_once() {
        let mut text = "{".repeat(200_000);
        text.push('}');
        assert_eq!(find_object_span(&text), Some("{}"));

        assert_eq!(find_object_span(&"{".repeat(200_000)), None);
    }

    #[test]
    fn test_unbalanced_text_uses_greedy_span() {
        let text = r#"{"a": "unterminated }"#;
        assert_eq!(find_object_span(text), Some(text));

        assert_eq!(find_object_span("only } then {"), None);
    }
}
