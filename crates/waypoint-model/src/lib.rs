//! Waypoint Model - canonical roadmap documents
//!
//! Defines the schema every other crate agrees on:
//! - Generated identifiers for roadmaps and nodes
//! - The `Roadmap` document and its `RoadmapNode` steps
//! - Supporting source references
//!
//! Values of these types are always canonical: they are produced by the
//! ingest layer (which defaults and sanitizes untrusted input) or loaded
//! from the store (which only ever holds canonical documents).

#![warn(unreachable_pub)]

pub mod id;
pub mod roadmap;

pub use id::{NodeId, RoadmapId};
pub use roadmap::{Roadmap, RoadmapNode, SourceRef};
