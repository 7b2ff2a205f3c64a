//! Durable slot backends
//!
//! The whole saved-roadmap collection lives under one named slot. The
//! backend seam exists so the store logic can be tested against an
//! in-memory fake instead of a real persistence medium.

use crate::error::SlotError;
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;

/// One durable key-value slot holding a serialized payload
///
/// `read` distinguishes an absent slot (`Ok(None)`) from a present
/// one; callers treat undeserializable payloads themselves. `write`
/// replaces the payload in full; there are no partial writes.
#[cfg_attr(test, mockall::automock)]
pub trait SlotBackend: Send + Sync {
    /// Read the current payload, `None` when the slot was never written
    fn read(&self) -> Result<Option<String>, SlotError>;

    /// Replace the payload in full
    fn write(&self, payload: &str) -> Result<(), SlotError>;
}

/// In-memory slot for tests and ephemeral sessions
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    inner: Arc<RwLock<Option<String>>>,
}

impl MemorySlot {
    /// Create an empty slot
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-seeded with a payload
    #[inline]
    #[must_use]
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(payload.into()))),
        }
    }

    /// Current payload, for test observation
    #[inline]
    #[must_use]
    pub fn payload(&self) -> Option<String> {
        self.inner.read().clone()
    }
}

impl SlotBackend for MemorySlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        Ok(self.inner.read().clone())
    }

    fn write(&self, payload: &str) -> Result<(), SlotError> {
        *self.inner.write() = Some(payload.to_string());
        Ok(())
    }
}

/// File-backed slot: one file, rewritten in full per mutation
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot at `path`; the file need not exist yet
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Slot location
    #[inline]
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SlotBackend for FileSlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        match std::fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SlotError::io_error(&self.path, e)),
        }
    }

    fn write(&self, payload: &str) -> Result<(), SlotError> {
        std::fs::write(&self.path, payload).map_err(|e| SlotError::io_error(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_slot_round_trip() {
        let slot = MemorySlot::new();
        assert_eq!(slot.read().unwrap(), None);

        slot.write("payload").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("payload"));

        slot.write("replaced").unwrap();
        assert_eq!(slot.payload().as_deref(), Some("replaced"));
    }

    #[test]
    fn memory_slot_clones_share_payload() {
        let slot = MemorySlot::new();
        let observer = slot.clone();

        slot.write("shared").unwrap();
        assert_eq!(observer.payload().as_deref(), Some("shared"));
    }

    #[test]
    fn file_slot_absent_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("history.json"));
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn file_slot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("history.json"));

        slot.write("[1,2,3]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn file_slot_write_to_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("missing/history.json"));

        let err = slot.write("payload").unwrap_err();
        assert!(matches!(err, SlotError::Io { .. }));
    }
}
