//! Waypoint Ingest - from streamed fragments to canonical roadmaps
//!
//! Turns the raw, untrusted, incrementally-delivered text of one
//! generation attempt into a canonical [`waypoint_model::Roadmap`]:
//! - [`StreamConsumer`] accumulates fragments and settles on exactly
//!   one terminal outcome
//! - [`DocumentExtractor`] recovers a JSON payload from wrapping noise
//! - [`DocumentValidator`] defaults and sanitizes the parsed object
//!
//! Every stage is terminal-on-failure: nothing here retries, repairs
//! broken JSON, or touches storage.

#![warn(unreachable_pub)]

pub mod error;
pub mod extract;
pub mod stream;
pub mod validate;

pub use error::{ExtractError, StreamError, ValidateError};
pub use extract::DocumentExtractor;
pub use stream::{StreamConsumer, StreamEvent};
pub use validate::{DocumentValidator, ValidatorConfig};
