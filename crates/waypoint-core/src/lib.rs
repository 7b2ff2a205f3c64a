//! Waypoint Core - roadmap generation orchestration
//!
//! Ties the leaf crates together:
//! - Runs one generation attempt end to end (stream, extract,
//!   validate) through [`GenerationPipeline`]
//! - Tracks the active roadmap, saved history and attempt staleness
//!   through [`Session`]
//!
//! # Example
//!
//! ```rust,ignore
//! use waypoint_core::{Session, SessionConfig};
//!
//! # async fn example(events: tokio::sync::mpsc::Receiver<waypoint_ingest::StreamEvent>)
//! # -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = Session::with_config(&SessionConfig::new());
//!
//! let attempt = session.begin_attempt();
//! let roadmap = session.pipeline().run(events, |fragment| print!("{fragment}")).await?;
//! session.complete_attempt(attempt, roadmap);
//! session.save_active()?;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod session;

pub use config::SessionConfig;
pub use error::GenerateError;
pub use pipeline::GenerationPipeline;
pub use session::{AttemptId, Session};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Waypoint
    pub use crate::{AttemptId, GenerateError, GenerationPipeline, Session, SessionConfig};
    pub use waypoint_ingest::{StreamConsumer, StreamEvent, ValidatorConfig};
    pub use waypoint_model::{Roadmap, RoadmapNode};
    pub use waypoint_store::{FileSlot, HistoryStore, MemorySlot, ProgressTracker};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
