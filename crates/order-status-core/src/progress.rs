//! Progress and timeline helpers.
//!
//! Completion is judged against a fixed progression of seven statuses.
//! `Failed` is an alternate terminal branch rather than a progression point,
//! so it is left out: any comparison involving it reports "not completed",
//! and a failed order therefore shows no progress at all.

use order_status_types::{OrderStatus, StepState, Timeline, TimelineStep};

use crate::registry::get_status_label;
use crate::visibility;

/// Canonical progression used for completion checks.
pub const PROGRESSION: [OrderStatus; 7] = [
	OrderStatus::Received,
	OrderStatus::Confirmed,
	OrderStatus::Preparing,
	OrderStatus::Ready,
	OrderStatus::AssignedToRider,
	OrderStatus::InTransit,
	OrderStatus::Arrived,
];

/// Position of a status in [`PROGRESSION`], `None` for `Failed`.
pub fn progression_index(status: OrderStatus) -> Option<usize> {
	PROGRESSION.iter().position(|s| *s == status)
}

/// Returns whether `target` has been reached by an order at `current`.
pub fn is_completed(target: OrderStatus, current: OrderStatus) -> bool {
	match (progression_index(target), progression_index(current)) {
		(Some(target), Some(current)) => current >= target,
		_ => false,
	}
}

/// Returns whether `target_status` counts as completed for an order at
/// `current_status`.
///
/// False whenever either value is unknown or `failed`.
pub fn is_status_completed(target_status: &str, current_status: &str) -> bool {
	match (
		OrderStatus::parse(target_status),
		OrderStatus::parse(current_status),
	) {
		(Some(target), Some(current)) => is_completed(target, current),
		_ => false,
	}
}

/// Builds the progress timeline `role` sees for an order at `current_status`.
///
/// Steps are the role's visible statuses in lifecycle order. The step equal to
/// the current status is `Current`, steps already reached are `Completed` and
/// the rest are `Pending`.
pub fn build_timeline(current_status: &str, role: &str) -> Timeline {
	let visible = visibility::statuses_for(role);
	if visible.is_empty() {
		return Timeline::empty();
	}

	let current = OrderStatus::parse(current_status);
	let steps: Vec<TimelineStep> = visible
		.iter()
		.map(|&status| {
			let state = match current {
				Some(current) if current == status => StepState::Current,
				Some(current) if is_completed(status, current) => StepState::Completed,
				_ => StepState::Pending,
			};
			TimelineStep {
				status,
				label: get_status_label(status.as_str(), role, false),
				state,
			}
		})
		.collect();

	let current_index = steps.iter().position(|s| s.state == StepState::Current);
	let reached = steps
		.iter()
		.filter(|s| s.state != StepState::Pending)
		.count();
	let progress = reached as f64 / steps.len() as f64;

	Timeline {
		steps,
		current_index,
		progress,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn states(timeline: &Timeline) -> Vec<StepState> {
		timeline.steps.iter().map(|s| s.state).collect()
	}

	#[test]
	fn test_completion_ordering() {
		assert!(is_status_completed("received", "in_transit"));
		assert!(!is_status_completed("in_transit", "received"));
		assert!(is_status_completed("preparing", "arrived"));
	}

	#[test]
	fn test_completion_is_reflexive_except_failed() {
		for status in OrderStatus::ALL {
			let expected = status != OrderStatus::Failed;
			assert_eq!(
				is_status_completed(status.as_str(), status.as_str()),
				expected,
				"{status}"
			);
		}
	}

	#[test]
	fn test_failed_order_has_nothing_completed() {
		for status in OrderStatus::ALL {
			assert!(!is_status_completed(status.as_str(), "failed"));
			assert!(!is_status_completed("failed", status.as_str()));
		}
	}

	#[test]
	fn test_unknown_statuses_are_never_completed() {
		assert!(!is_status_completed("received", "shipped"));
		assert!(!is_status_completed("shipped", "arrived"));
		assert!(!is_status_completed("", ""));
	}

	#[test]
	fn test_customer_timeline_midway() {
		let timeline = build_timeline("ready", "customer");
		let labels: Vec<_> = timeline.steps.iter().map(|s| s.label.as_str()).collect();
		assert_eq!(
			labels,
			vec![
				"Order Placed",
				"Order Confirmed",
				"Ready for Delivery",
				"On the Way",
				"Delivered",
			]
		);
		assert_eq!(
			states(&timeline),
			vec![
				StepState::Completed,
				StepState::Completed,
				StepState::Current,
				StepState::Pending,
				StepState::Pending,
			]
		);
		assert_eq!(timeline.current_index, Some(2));
		assert!((timeline.progress - 0.6).abs() < f64::EPSILON);
	}

	#[test]
	fn test_customer_timeline_hidden_current_status() {
		// preparing is not on the customer timeline but earlier steps are done
		let timeline = build_timeline("preparing", "customer");
		assert_eq!(timeline.current_index, None);
		assert_eq!(
			states(&timeline),
			vec![
				StepState::Completed,
				StepState::Completed,
				StepState::Pending,
				StepState::Pending,
				StepState::Pending,
			]
		);
	}

	#[test]
	fn test_operator_timeline_uses_operator_labels() {
		let timeline = build_timeline("arrived", "admin");
		assert_eq!(timeline.steps.len(), 8);
		assert_eq!(timeline.steps[0].label, "Order Received");
		assert_eq!(timeline.current_index, Some(7));
		// failed is never completed, so an arrived order is at 7/8
		assert_eq!(timeline.steps[2].state, StepState::Pending);
		assert!((timeline.progress - 7.0 / 8.0).abs() < f64::EPSILON);
	}

	#[test]
	fn test_failed_timeline_shows_no_progress() {
		let timeline = build_timeline("failed", "csr");
		assert_eq!(timeline.current_index, Some(2));
		assert_eq!(
			timeline
				.steps
				.iter()
				.filter(|s| s.state == StepState::Completed)
				.count(),
			0
		);
	}

	#[test]
	fn test_unknown_inputs() {
		assert!(build_timeline("ready", "guest").is_empty());

		let timeline = build_timeline("shipped", "rider");
		assert_eq!(timeline.steps.len(), 4);
		assert!(timeline.steps.iter().all(|s| s.state == StepState::Pending));
		assert_eq!(timeline.progress, 0.0);
	}
}
