//! Session configuration

use std::path::PathBuf;
use waypoint_ingest::ValidatorConfig;
use waypoint_store::{FileSlot, HistoryStore, MemorySlot};

/// Configuration for a roadmap session
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Validator placeholder texts
    pub validator: ValidatorConfig,
    /// Durable slot location; `None` keeps history in memory only
    pub store_path: Option<PathBuf>,
}

impl SessionConfig {
    /// Create default configuration (in-memory history)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a file-backed history slot
    #[inline]
    #[must_use]
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    /// With validator configuration
    #[inline]
    #[must_use]
    pub fn with_validator(mut self, validator: ValidatorConfig) -> Self {
        self.validator = validator;
        self
    }

    /// Open the history store this configuration describes
    #[must_use]
    pub fn open_store(&self) -> HistoryStore {
        match &self.store_path {
            Some(path) => HistoryStore::open(FileSlot::new(path)),
            None => HistoryStore::open(MemorySlot::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_opens_in_memory_store() {
        let config = SessionConfig::new();
        let store = config.open_store();
        assert!(store.is_empty());
    }

    #[test]
    fn builder_sets_store_path() {
        let config = SessionConfig::new().with_store_path("/tmp/history.json");
        assert_eq!(
            config.store_path.as_deref(),
            Some(std::path::Path::new("/tmp/history.json"))
        );
    }
}
