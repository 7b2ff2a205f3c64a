//! Node completion tracking
//!
//! Toggling always works on a fresh copy of the active roadmap; a
//! stored entry is never mutated through the active reference. For
//! documents already saved, the updated copy is mirrored into the
//! store immediately so persisted and in-memory progress never
//! diverge. Unsaved documents change in memory only.

use crate::error::StoreError;
use crate::history::HistoryStore;
use tracing::debug;
use waypoint_model::Roadmap;

/// Copy-on-toggle progress updates against a history store
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressTracker;

impl ProgressTracker {
    /// Flip `node_id`'s completion flag on a copy of `active`
    ///
    /// Returns the updated copy. An unknown node id returns the copy
    /// unchanged and performs no store write.
    pub fn toggle(
        store: &mut HistoryStore,
        active: &Roadmap,
        node_id: &str,
    ) -> Result<Roadmap, StoreError> {
        let mut updated = active.clone();

        let Some(node) = updated.nodes.iter_mut().find(|n| n.id.as_str() == node_id) else {
            debug!(node_id, roadmap = %active.id, "toggle on unknown node id, no change");
            return Ok(updated);
        };
        node.completed = !node.completed;

        if store.contains(active.id.as_str()) {
            store.upsert(updated.clone())?;
        }
        Ok(updated)
    }
}
