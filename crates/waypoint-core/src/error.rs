//! Aggregate error for one generation attempt
//!
//! Every stage failure is terminal for the attempt and surfaced to the
//! caller with its originating message intact (transparent Display),
//! so the user can judge whether the input or the model response was
//! at fault. A retry is a fresh attempt initiated by the caller.

use waypoint_ingest::{ExtractError, StreamError, ValidateError};

/// Terminal failure of a generation attempt
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Producer errored before completion
    #[error(transparent)]
    Stream(#[from] StreamError),

    /// No usable JSON payload in the accumulated text
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Parsed object structurally unusable
    #[error(transparent)]
    Validate(#[from] ValidateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_pass_through_verbatim() {
        let err: GenerateError = StreamError::Transport("backend closed".to_string()).into();
        assert_eq!(err.to_string(), "transport failure: backend closed");

        let err: GenerateError = ExtractError::NoPayload.into();
        assert_eq!(err.to_string(), "no JSON-like payload found");

        let err: GenerateError = ValidateError::MissingTitleOrNodes.into();
        assert_eq!(err.to_string(), "missing title or nodes");
    }
}
