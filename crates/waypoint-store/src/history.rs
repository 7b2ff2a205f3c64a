//! Ordered history of saved roadmaps
//!
//! The collection is keyed by roadmap id and ordered: new documents
//! become the newest entry, updates keep their existing position. The
//! serialized slot payload is the newest-first JSON array produced by
//! [`HistoryStore::list`].

use crate::error::StoreError;
use crate::slot::SlotBackend;
use indexmap::IndexMap;
use tracing::{debug, warn};
use waypoint_model::Roadmap;

/// Durable, ordered collection of canonical roadmaps
///
/// Loaded once at construction; the slot is rewritten in full after
/// every mutation. An unreadable or undeserializable slot loads as an
/// empty collection, never as a startup error.
pub struct HistoryStore {
    backend: Box<dyn SlotBackend>,
    // Oldest-first insertion order; list() iterates reversed so the
    // newest entry comes first and in-place updates keep position
    entries: IndexMap<String, Roadmap>,
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl HistoryStore {
    /// Open the store, loading whatever the slot currently holds
    #[must_use]
    pub fn open(backend: impl SlotBackend + 'static) -> Self {
        let entries = match backend.read() {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Roadmap>>(&payload) {
                Ok(list) => {
                    debug!(entries = list.len(), "history loaded");
                    // Payload is newest-first; reverse into oldest-first
                    list.into_iter()
                        .rev()
                        .map(|r| (r.id.to_string(), r))
                        .collect()
                }
                Err(e) => {
                    warn!(error = %e, "history slot undeserializable, starting empty");
                    IndexMap::new()
                }
            },
            Ok(None) => IndexMap::new(),
            Err(e) => {
                warn!(error = %e, "history slot unreadable, starting empty");
                IndexMap::new()
            }
        };

        Self {
            backend: Box::new(backend),
            entries,
        }
    }

    /// Insert or replace a document
    ///
    /// An existing id is replaced in place (position preserved); a new
    /// id becomes the newest entry. This one operation serves both
    /// "save new" and "persist updated progress".
    pub fn upsert(&mut self, doc: Roadmap) -> Result<(), StoreError> {
        self.entries.insert(doc.id.to_string(), doc);
        self.persist()
    }

    /// Delete a document if present; absent ids are a no-op
    pub fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        // shift_remove keeps the relative order of the remaining entries
        if self.entries.shift_remove(id).is_some() {
            self.persist()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Look up a document by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Roadmap> {
        self.entries.get(id)
    }

    /// Whether a document with this id is saved
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// All documents, newest first
    #[must_use]
    pub fn list(&self) -> Vec<&Roadmap> {
        self.entries.values().rev().collect()
    }

    /// Number of saved documents
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewrite the slot from the in-memory collection
    fn persist(&self) -> Result<(), StoreError> {
        let payload = serde_json::to_string(&self.list())?;
        self.backend.write(&payload)?;
        Ok(())
    }
}
