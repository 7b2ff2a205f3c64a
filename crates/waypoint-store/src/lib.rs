//! Waypoint Store - persisted roadmap history
//!
//! One durable key-value slot holds the whole saved collection,
//! serialized as a single JSON array. The slot is read once at
//! startup and fully rewritten after every mutation; there is exactly
//! one logical writer at any time.
//!
//! - [`SlotBackend`] abstracts the durable slot so tests substitute an
//!   in-memory fake for the real filesystem
//! - [`HistoryStore`] keeps the ordered collection and its invariants
//! - [`ProgressTracker`] flips node completion on copies, mirroring
//!   into the store only for documents already saved

#![warn(unreachable_pub)]

pub mod error;
pub mod history;
pub mod progress;
pub mod slot;

pub use error::{SlotError, StoreError};
pub use history::HistoryStore;
pub use progress::ProgressTracker;
pub use slot::{FileSlot, MemorySlot, SlotBackend};
