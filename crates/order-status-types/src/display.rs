//! Presentation types handed back to rendering code.
//!
//! These are plain data carriers: status metadata for badges and the
//! per-step state used to draw an order progress timeline.

use serde::{Deserialize, Serialize};

use crate::OrderStatus;

/// Display metadata for a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDetail {
	/// Operator-facing label, e.g. "Assigned to Rider".
	pub label: String,
	/// Opaque style token for the status badge.
	pub color: String,
}

/// Where a timeline step sits relative to the order's current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
	Completed,
	Current,
	Pending,
}

/// A single entry of an order timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStep {
	pub status: OrderStatus,
	/// Label in the audience's wording.
	pub label: String,
	pub state: StepState,
}

/// Ordered progress timeline for one order as seen by one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
	pub steps: Vec<TimelineStep>,
	/// Index of the step matching the current status, when it is visible.
	#[serde(rename = "currentIndex")]
	pub current_index: Option<usize>,
	/// Share of steps that are completed or current, in `[0.0, 1.0]`.
	pub progress: f64,
}

impl Timeline {
	/// A timeline with no steps.
	pub fn empty() -> Self {
		Self {
			steps: Vec::new(),
			current_index: None,
			progress: 0.0,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}
}
