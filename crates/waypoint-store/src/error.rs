//! Error types for the store layer
//!
//! Read-side corruption of the durable slot is not represented here:
//! it is recovered internally to an empty collection and only logged,
//! since history is a convenience cache, not a source of truth for an
//! in-flight generation. Write-side failures do propagate.

use std::path::PathBuf;

/// Errors from a slot backend
#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    /// IO failure reading or writing the slot file
    #[error("io error on slot {path}: {source}")]
    Io {
        /// Slot location
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl SlotError {
    /// Create an IO error for a slot path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors from history store mutations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Slot backend failure
    #[error("slot error: {0}")]
    Slot(#[from] SlotError),

    /// Collection failed to serialize for the slot rewrite
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}
