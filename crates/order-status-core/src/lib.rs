//! Order status engine.
//!
//! A pure lookup and derivation layer over static tables describing the order
//! lifecycle: which statuses exist and how they are displayed, which roles may
//! observe which statuses, which transitions are legal, and how far along an
//! order is. Nothing here performs I/O or holds mutable state, so every
//! function may be called concurrently from any thread.
//!
//! The string-based functions re-exported at the crate root never fail.
//! Unknown statuses or roles degrade to a passthrough label, an empty list or
//! `false`. Only [`validation`] returns errors, for use on the write path.

/// Completion checks and timelines.
pub mod progress;
/// Status display metadata.
pub mod registry;
/// Legal transitions between statuses.
pub mod transitions;
/// Validation of proposed status updates.
pub mod validation;
/// Engine queries bound to one role.
pub mod view;
/// Which roles may observe which statuses.
pub mod visibility;

pub use progress::{build_timeline, is_status_completed};
pub use registry::{
	get_all_order_statuses, get_customer_timeline_label, get_status_color, get_status_details,
	get_status_label,
};
pub use transitions::{get_next_statuses, is_valid_transition};
pub use validation::{validate_status_update, validate_status_value, UpdateError};
pub use view::StatusView;
pub use visibility::{can_role_see_status, get_statuses_by_role};

pub use order_status_types::{
	OrderStatus, ReportedRole, ReportedStatus, Role, StatusDetail, StepState, Timeline,
	TimelineStep,
};
