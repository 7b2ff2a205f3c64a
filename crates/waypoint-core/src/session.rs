//! Session state: the active roadmap and its history
//!
//! A session owns one history store and at most one active roadmap.
//! Generation attempts are numbered; a completed attempt installs its
//! result only while it is still the current attempt, so a stale
//! attempt racing a newer one is cancelled-and-discarded rather than
//! allowed to win by finishing last.

use crate::config::SessionConfig;
use crate::pipeline::GenerationPipeline;
use tracing::debug;
use waypoint_model::Roadmap;
use waypoint_store::{HistoryStore, ProgressTracker, StoreError};

/// Identifies one generation attempt within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttemptId(u64);

impl std::fmt::Display for AttemptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "attempt-{}", self.0)
    }
}

/// One user's roadmap workspace
pub struct Session {
    pipeline: GenerationPipeline,
    store: HistoryStore,
    active: Option<Roadmap>,
    current_attempt: u64,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("active", &self.active.as_ref().map(|r| r.id.as_str()))
            .field("saved", &self.store.len())
            .field("current_attempt", &self.current_attempt)
            .finish()
    }
}

impl Session {
    /// Create a session over an already-open store
    #[must_use]
    pub fn new(store: HistoryStore) -> Self {
        Self {
            pipeline: GenerationPipeline::new(),
            store,
            active: None,
            current_attempt: 0,
        }
    }

    /// Create a session from configuration
    #[must_use]
    pub fn with_config(config: &SessionConfig) -> Self {
        Self {
            pipeline: GenerationPipeline::with_validator_config(config.validator.clone()),
            store: config.open_store(),
            active: None,
            current_attempt: 0,
        }
    }

    /// The ingestion pipeline configured for this session
    #[inline]
    #[must_use]
    pub fn pipeline(&self) -> &GenerationPipeline {
        &self.pipeline
    }

    /// The history store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    /// The active roadmap, if any
    #[inline]
    #[must_use]
    pub fn active(&self) -> Option<&Roadmap> {
        self.active.as_ref()
    }

    /// Start a new generation attempt, superseding any in flight
    pub fn begin_attempt(&mut self) -> AttemptId {
        self.current_attempt += 1;
        debug!(attempt = self.current_attempt, "generation attempt started");
        AttemptId(self.current_attempt)
    }

    /// Install an attempt's result as the active roadmap
    ///
    /// Returns false and discards the result when the attempt has been
    /// superseded by a newer one. Failed attempts need no call here:
    /// the active roadmap is simply left untouched.
    pub fn complete_attempt(&mut self, attempt: AttemptId, roadmap: Roadmap) -> bool {
        if attempt.0 != self.current_attempt {
            debug!(%attempt, current = self.current_attempt, "stale attempt result discarded");
            return false;
        }
        self.active = Some(roadmap);
        true
    }

    /// Make a saved roadmap the active one
    pub fn open_saved(&mut self, id: &str) -> bool {
        match self.store.get(id) {
            Some(roadmap) => {
                self.active = Some(roadmap.clone());
                true
            }
            None => false,
        }
    }

    /// Persist the active roadmap (first save or progress update)
    ///
    /// Returns false when there is no active roadmap.
    pub fn save_active(&mut self) -> Result<bool, StoreError> {
        match &self.active {
            Some(roadmap) => {
                self.store.upsert(roadmap.clone())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete a saved roadmap; the active copy is unaffected
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        self.store.remove(id)
    }

    /// Toggle a node's completion on the active roadmap
    ///
    /// Mirrors into the store when the active roadmap is saved.
    /// Returns false when there is no active roadmap.
    pub fn toggle(&mut self, node_id: &str) -> Result<bool, StoreError> {
        let Some(active) = self.active.clone() else {
            return Ok(false);
        };
        let updated = ProgressTracker::toggle(&mut self.store, &active, node_id)?;
        self.active = Some(updated);
        Ok(true)
    }
}
