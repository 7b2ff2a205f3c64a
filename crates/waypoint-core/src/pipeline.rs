//! End-to-end ingestion of one generation attempt
//!
//! stream -> extract -> validate, each stage terminal on failure. The
//! pipeline is stateless and storage-free; saving the result is the
//! session's business.

use crate::error::GenerateError;
use tokio::sync::mpsc;
use tracing::debug;
use waypoint_ingest::{
    DocumentExtractor, DocumentValidator, StreamConsumer, StreamEvent, ValidatorConfig,
};
use waypoint_model::Roadmap;

/// Runs one generation attempt's text through extract and validate
#[derive(Debug, Clone, Default)]
pub struct GenerationPipeline {
    extractor: DocumentExtractor,
    validator: DocumentValidator,
}

impl GenerationPipeline {
    /// Create a pipeline with default validator placeholders
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with explicit validator configuration
    #[inline]
    #[must_use]
    pub fn with_validator_config(config: ValidatorConfig) -> Self {
        Self {
            extractor: DocumentExtractor::new(),
            validator: DocumentValidator::with_config(config),
        }
    }

    /// Drain `events` to completion, then extract and validate
    ///
    /// `on_fragment` observes each fragment in arrival order before the
    /// terminal outcome is known.
    pub async fn run(
        &self,
        events: mpsc::Receiver<StreamEvent>,
        on_fragment: impl FnMut(&str),
    ) -> Result<Roadmap, GenerateError> {
        let full = StreamConsumer::new(on_fragment).drain(events).await?;
        self.run_text(&full)
    }

    /// Extract and validate already-complete text
    pub fn run_text(&self, full: &str) -> Result<Roadmap, GenerateError> {
        let value = self.extractor.extract(full)?;
        let roadmap = self.validator.validate(&value)?;
        debug!(id = %roadmap.id, nodes = roadmap.nodes.len(), "generation attempt succeeded");
        Ok(roadmap)
    }
}
