//! Error types for the ingestion pipeline
//!
//! One enum per stage:
//! - Stream consumption (transport side)
//! - Payload extraction
//! - Structural validation
//!
//! All variants carry descriptive messages that are surfaced to the
//! user verbatim; callers must not substitute generic wording.

/// Errors from the fragment stream
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// Producer errored or hung up before completion
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Errors while recovering a JSON payload from accumulated text
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Neither a fenced block nor a brace-delimited region was found
    #[error("no JSON-like payload found")]
    NoPayload,

    /// A candidate substring was found but failed a strict JSON parse
    ///
    /// The candidate is retained for diagnostics; no repair is
    /// attempted since guessing at truncated content risks fabricating
    /// plan data.
    #[error("malformed JSON: {message}")]
    MalformedJson {
        /// Parser error message
        message: String,
        /// The substring that failed to parse
        candidate: String,
    },
}

impl ExtractError {
    /// The candidate text that failed to parse, if any
    #[inline]
    #[must_use]
    pub fn candidate(&self) -> Option<&str> {
        match self {
            Self::NoPayload => None,
            Self::MalformedJson { candidate, .. } => Some(candidate),
        }
    }
}

/// Errors while canonicalizing the parsed object
#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    /// Required `title` or `nodes` fields absent or unusable
    ///
    /// These are never defaulted: a document without them has no
    /// identity worth keeping.
    #[error("missing title or nodes")]
    MissingTitleOrNodes,
}
