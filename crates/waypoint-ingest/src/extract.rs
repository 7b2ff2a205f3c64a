//! JSON payload extraction from accumulated model output
//!
//! Model output rarely arrives as bare JSON: it is usually wrapped in a
//! fenced code block, padded with explanatory prose, or both. The
//! extractor tries the two dominant shapes in order, first match wins:
//!
//! 1. Fenced code block (triple backtick, optional `json` tag), first
//!    non-greedy match so multiple fenced sections never bleed together
//! 2. First `{` to last `}` inclusive
//!
//! The winning candidate must then pass a strict JSON parse. No repair
//! of broken JSON is attempted.

use crate::error::ExtractError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(.*?)```").expect("fenced block pattern is valid")
});

/// Recovers a parsed JSON payload from one opaque transcript
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentExtractor;

impl DocumentExtractor {
    /// Create a new extractor
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extract and strictly parse the JSON payload of `raw`
    pub fn extract(&self, raw: &str) -> Result<Value, ExtractError> {
        let trimmed = raw.trim();

        let candidate = fenced_candidate(trimmed)
            .or_else(|| brace_candidate(trimmed))
            .ok_or(ExtractError::NoPayload)?;

        debug!(candidate_bytes = candidate.len(), "payload candidate found");

        serde_json::from_str(candidate).map_err(|e| ExtractError::MalformedJson {
            message: e.to_string(),
            candidate: candidate.to_string(),
        })
    }
}

/// Interior of the first fenced code block, if any
fn fenced_candidate(text: &str) -> Option<&str> {
    FENCED_BLOCK
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Inclusive substring from the first `{` to the last `}`
fn brace_candidate(text: &str) -> Option<&str> {
    let open = text.find('{')?;
    let close = text.rfind('}')?;
    (open < close).then(|| &text[open..=close])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_bare_json() {
        let value = DocumentExtractor::new()
            .extract(r#"  {"title":"T","nodes":[]}  "#)
            .unwrap();
        assert_eq!(value["title"], "T");
    }

    #[test]
    fn extracts_fenced_json_with_tag() {
        let raw = "Here is your plan:\n```json\n{\"title\":\"T\",\"nodes\":[]}\n```\nEnjoy!";
        let value = DocumentExtractor::new().extract(raw).unwrap();
        assert_eq!(value, serde_json::json!({"title": "T", "nodes": []}));
    }

    #[test]
    fn extracts_fenced_json_without_tag() {
        let raw = "```\n{\"title\":\"T\",\"nodes\":[]}\n```";
        let value = DocumentExtractor::new().extract(raw).unwrap();
        assert_eq!(value["title"], "T");
    }

    #[test]
    fn first_fenced_block_wins_non_greedily() {
        let raw = concat!(
            "```json\n{\"title\":\"first\",\"nodes\":[]}\n```\n",
            "Some prose between blocks.\n",
            "```json\n{\"title\":\"second\",\"nodes\":[]}\n```\n",
        );
        let value = DocumentExtractor::new().extract(raw).unwrap();
        assert_eq!(value["title"], "first");
    }

    #[test]
    fn falls_back_to_brace_span_with_prose() {
        let raw = "The plan is {\"title\":\"T\",\"nodes\":[]} as requested.";
        let value = DocumentExtractor::new().extract(raw).unwrap();
        assert_eq!(value["title"], "T");
    }

    #[test]
    fn no_braces_fails_with_no_payload() {
        let err = DocumentExtractor::new()
            .extract("Sorry, I cannot produce a plan today.")
            .unwrap_err();
        assert!(matches!(err, ExtractError::NoPayload));
        assert_eq!(err.to_string(), "no JSON-like payload found");
    }

    #[test]
    fn reversed_braces_fail_with_no_payload() {
        let err = DocumentExtractor::new().extract("} nothing here {").unwrap_err();
        assert!(matches!(err, ExtractError::NoPayload));
    }

    #[test]
    fn truncated_json_fails_and_keeps_candidate() {
        let raw = "```json\n{\"title\":\"T\",\"nodes\":[\n```";
        let err = DocumentExtractor::new().extract(raw).unwrap_err();

        match err {
            ExtractError::MalformedJson { candidate, .. } => {
                assert_eq!(candidate, "{\"title\":\"T\",\"nodes\":[");
            }
            other => panic!("expected MalformedJson, got {other:?}"),
        }
    }

    #[test]
    fn unrecognized_fence_tag_is_not_repaired() {
        // A rust-tagged fence is taken as the candidate with its tag,
        // which cannot parse; the failure is terminal, not retried
        // against the brace fallback.
        let raw = "```rust\n{\"title\":\"T\",\"nodes\":[]}\n```";
        let err = DocumentExtractor::new().extract(raw).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedJson { .. }));
    }
}
