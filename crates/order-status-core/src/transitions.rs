//! Order status state machine.
//!
//! Encodes the legal forward progression of an order:
//! Received -> Confirmed -> Preparing -> Ready -> AssignedToRider -> InTransit -> Arrived,
//! with a branch to Failed from Received and Confirmed. Failed and Arrived are
//! terminal. Transitions offered to a role are filtered by what that role can
//! observe, so nobody is offered a move into a status they could not see.

use once_cell::sync::Lazy;
use order_status_types::{OrderStatus, ReportedStatus};
use std::collections::HashMap;

use crate::visibility;

/// Static transition table - each state maps to allowed next states.
static TRANSITIONS: Lazy<HashMap<OrderStatus, &'static [OrderStatus]>> = Lazy::new(|| {
	let mut m: HashMap<OrderStatus, &'static [OrderStatus]> = HashMap::new();
	m.insert(
		OrderStatus::Received,
		&[OrderStatus::Confirmed, OrderStatus::Failed],
	);
	m.insert(
		OrderStatus::Confirmed,
		&[OrderStatus::Preparing, OrderStatus::Failed],
	);
	m.insert(OrderStatus::Preparing, &[OrderStatus::Ready]);
	m.insert(OrderStatus::Ready, &[OrderStatus::AssignedToRider]);
	m.insert(OrderStatus::AssignedToRider, &[OrderStatus::InTransit]);
	m.insert(OrderStatus::InTransit, &[OrderStatus::Arrived]);
	m.insert(OrderStatus::Arrived, &[]); // terminal
	m.insert(OrderStatus::Failed, &[]); // terminal
	m
});

/// Returns the statuses directly reachable from `status`.
pub fn successors(status: OrderStatus) -> &'static [OrderStatus] {
	TRANSITIONS.get(&status).copied().unwrap_or(&[])
}

/// Returns whether `status` has no outgoing transitions.
pub fn is_terminal(status: OrderStatus) -> bool {
	successors(status).is_empty()
}

/// Checks if a state transition is valid, ignoring roles.
pub fn is_valid_transition(from: OrderStatus, to: OrderStatus) -> bool {
	successors(from).contains(&to)
}

/// Computes the next statuses offered to `role` for an order at `current_status`.
///
/// The successors of the current status are intersected with the statuses the
/// role may observe. Terminal or unknown statuses and unknown roles yield an
/// empty list.
pub fn get_next_statuses(current_status: &str, role: &str) -> Vec<&'static str> {
	let current = match ReportedStatus::from(current_status) {
		ReportedStatus::Known(status) => status,
		ReportedStatus::Unknown(raw) => {
			tracing::debug!(status = %raw, "Unknown current status, no transitions offered");
			return Vec::new();
		},
	};

	let visible = visibility::statuses_for(role);
	successors(current)
		.iter()
		.filter(|next| visible.contains(*next))
		.map(OrderStatus::as_str)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use order_status_types::Role;
	use proptest::prelude::*;
	use std::collections::HashSet;

	const ROLES: [&str; 5] = ["customer", "rider", "admin", "csr", "stranger"];

	#[test]
	fn test_terminal_statuses() {
		for status in OrderStatus::ALL {
			let terminal = matches!(status, OrderStatus::Arrived | OrderStatus::Failed);
			assert_eq!(is_terminal(status), terminal, "{status}");
		}
	}

	#[test]
	fn test_terminal_statuses_offer_nothing_to_anyone() {
		for role in ROLES {
			assert!(get_next_statuses("arrived", role).is_empty());
			assert!(get_next_statuses("failed", role).is_empty());
		}
	}

	#[test]
	fn test_received_branches_for_csr() {
		let next = get_next_statuses("received", "csr");
		assert!(next.contains(&"confirmed"));
		assert!(next.contains(&"failed"));
		assert_eq!(next, vec!["confirmed", "failed"]);
	}

	#[test]
	fn test_ready_is_a_dead_end_for_customers() {
		// assigned_to_rider is the only successor and customers cannot see it
		assert!(get_next_statuses("ready", "customer").is_empty());
	}

	#[test]
	fn test_confirmed_is_a_dead_end_for_riders() {
		assert!(get_next_statuses("confirmed", "rider").is_empty());
	}

	#[test]
	fn test_ready_for_admin() {
		assert_eq!(get_next_statuses("ready", "admin"), vec!["assigned_to_rider"]);
		assert_eq!(get_next_statuses("ready", "RIDER"), vec!["assigned_to_rider"]);
	}

	#[test]
	fn test_customer_only_sees_visible_successors() {
		assert_eq!(get_next_statuses("received", "customer"), vec!["confirmed"]);
		assert_eq!(get_next_statuses("in_transit", "customer"), vec!["arrived"]);
	}

	#[test]
	fn test_unknown_inputs_offer_nothing() {
		assert!(get_next_statuses("shipped", "admin").is_empty());
		assert!(get_next_statuses("received", "owner").is_empty());
		assert!(get_next_statuses("", "").is_empty());
	}

	#[test]
	fn test_is_valid_transition() {
		assert!(is_valid_transition(OrderStatus::Received, OrderStatus::Failed));
		assert!(is_valid_transition(OrderStatus::Preparing, OrderStatus::Ready));
		assert!(!is_valid_transition(OrderStatus::Preparing, OrderStatus::Failed));
		assert!(!is_valid_transition(OrderStatus::Ready, OrderStatus::Arrived));
		assert!(!is_valid_transition(OrderStatus::Arrived, OrderStatus::Received));
	}

	#[test]
	fn test_next_statuses_are_visible_to_role() {
		for role in Role::ALL {
			for status in OrderStatus::ALL {
				for next in get_next_statuses(status.as_str(), role.as_str()) {
					let next = OrderStatus::parse(next).unwrap();
					assert!(crate::visibility::can_see(role, next));
					assert!(is_valid_transition(status, next));
				}
			}
		}
	}

	#[test]
	fn test_graph_is_acyclic() {
		fn reaches(from: OrderStatus, target: OrderStatus, depth: usize) -> bool {
			depth > 0
				&& successors(from)
					.iter()
					.any(|&next| next == target || reaches(next, target, depth - 1))
		}

		for status in OrderStatus::ALL {
			assert!(!reaches(status, status, OrderStatus::ALL.len()), "{status}");
		}
	}

	proptest! {
		#[test]
		fn prop_random_walk_terminates(choices in prop::collection::vec(any::<usize>(), 0..16)) {
			let mut current = OrderStatus::INITIAL;
			let mut seen = HashSet::from([current]);
			let mut choices = choices.into_iter();

			while !is_terminal(current) {
				let next = successors(current);
				let pick = choices.next().unwrap_or(0) % next.len();
				current = next[pick];
				prop_assert!(seen.insert(current), "revisited {}", current);
			}

			prop_assert!(matches!(current, OrderStatus::Arrived | OrderStatus::Failed));
			prop_assert!(seen.len() <= OrderStatus::ALL.len());
		}

		#[test]
		fn prop_next_statuses_total(status in ".{0,24}", role in ".{0,12}") {
			let next = get_next_statuses(&status, &role);
			prop_assert!(next.len() <= 2);
		}
	}
}
