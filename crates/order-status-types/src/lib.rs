//! Common types for the order status engine.
//!
//! This crate defines the closed status and role enums, the lenient wrappers
//! used for external input, and the presentation types returned by the
//! engine. It provides a centralized location for shared types so that the
//! engine, configuration and command-line crates agree on one vocabulary.

/// Presentation types: status metadata and timelines.
pub mod display;
/// Observer roles.
pub mod role;
/// Order lifecycle statuses.
pub mod status;

pub use display::{StatusDetail, StepState, Timeline, TimelineStep};
pub use role::{ReportedRole, Role, RoleParseError};
pub use status::{OrderStatus, ReportedStatus, StatusParseError};
