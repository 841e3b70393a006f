//! Status registry.
//!
//! Single source of truth for the display metadata attached to each status:
//! the operator label, the badge colour token and, for statuses customers
//! get to see, a simplified customer-facing label.
//!
//! Lookups by string never fail. A status the registry does not know is
//! rendered with its raw value and a neutral colour so that legacy or newer
//! backend values still display.

use order_status_types::{OrderStatus, ReportedStatus, Role, StatusDetail};

/// Colour token used for statuses outside the registry.
pub const NEUTRAL_COLOR: &str = "bg-gray-100 text-gray-800";

/// Static display metadata for one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMetadata {
	pub label: &'static str,
	pub color: &'static str,
	pub customer_label: Option<&'static str>,
}

/// Returns the registry entry for a status.
pub const fn metadata(status: OrderStatus) -> StatusMetadata {
	match status {
		OrderStatus::Received => StatusMetadata {
			label: "Order Received",
			color: "bg-yellow-100 text-yellow-800",
			customer_label: Some("Order Placed"),
		},
		OrderStatus::Confirmed => StatusMetadata {
			label: "Confirmed",
			color: "bg-blue-100 text-blue-800",
			customer_label: Some("Order Confirmed"),
		},
		OrderStatus::Failed => StatusMetadata {
			label: "Failed",
			color: "bg-red-100 text-red-800",
			customer_label: None,
		},
		OrderStatus::Preparing => StatusMetadata {
			label: "Preparing",
			color: "bg-orange-100 text-orange-800",
			customer_label: None,
		},
		OrderStatus::Ready => StatusMetadata {
			label: "Ready for Pickup",
			color: "bg-purple-100 text-purple-800",
			customer_label: Some("Ready for Delivery"),
		},
		OrderStatus::AssignedToRider => StatusMetadata {
			label: "Assigned to Rider",
			color: "bg-indigo-100 text-indigo-800",
			customer_label: None,
		},
		OrderStatus::InTransit => StatusMetadata {
			label: "In Transit",
			color: "bg-cyan-100 text-cyan-800",
			customer_label: Some("On the Way"),
		},
		OrderStatus::Arrived => StatusMetadata {
			label: "Delivered",
			color: "bg-green-100 text-green-800",
			customer_label: Some("Delivered"),
		},
	}
}

/// Returns the label and colour of a known status.
pub fn detail(status: OrderStatus) -> StatusDetail {
	let meta = metadata(status);
	StatusDetail {
		label: meta.label.to_string(),
		color: meta.color.to_string(),
	}
}

/// Returns the customer-facing label of a status, if customers have one.
pub fn customer_label(status: OrderStatus) -> Option<&'static str> {
	metadata(status).customer_label
}

/// Returns the display label and colour for a status string.
///
/// Unknown statuses come back with the input as label and [`NEUTRAL_COLOR`].
pub fn get_status_details(status: &str) -> StatusDetail {
	match ReportedStatus::from(status) {
		ReportedStatus::Known(known) => detail(known),
		ReportedStatus::Unknown(raw) => {
			tracing::debug!(status = %raw, "Unknown status, using passthrough label");
			StatusDetail {
				label: raw,
				color: NEUTRAL_COLOR.to_string(),
			}
		},
	}
}

/// Returns the customer-facing timeline label for a status string.
///
/// Falls back to the raw input when no customer label is configured, which
/// covers both internal-only statuses and unknown values.
pub fn get_customer_timeline_label(status: &str) -> String {
	OrderStatus::parse(status)
		.and_then(customer_label)
		.map(str::to_string)
		.unwrap_or_else(|| status.to_string())
}

/// Returns every status wire value in registry order.
pub fn get_all_order_statuses() -> Vec<&'static str> {
	OrderStatus::ALL.iter().map(OrderStatus::as_str).collect()
}

/// Returns the label a given audience should see for a status.
///
/// Customers, or any caller rendering for a customer audience, get the
/// customer timeline label. Everyone else gets the operator label.
pub fn get_status_label(status: &str, role: &str, customer_audience: bool) -> String {
	if customer_audience || Role::parse(role) == Some(Role::Customer) {
		get_customer_timeline_label(status)
	} else {
		get_status_details(status).label
	}
}

/// Returns the badge colour token for a status string.
pub fn get_status_color(status: &str) -> String {
	get_status_details(status).color
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_known_status_details() {
		let detail = get_status_details("assigned_to_rider");
		assert_eq!(detail.label, "Assigned to Rider");
		assert_eq!(detail.color, "bg-indigo-100 text-indigo-800");

		assert_eq!(get_status_details("arrived").label, "Delivered");
		assert_eq!(get_status_details("ready").label, "Ready for Pickup");
	}

	#[test]
	fn test_every_status_has_a_stable_label() {
		for status in get_all_order_statuses() {
			let first = get_status_details(status);
			let second = get_status_details(status);
			assert!(!first.label.is_empty());
			assert_ne!(first.color, NEUTRAL_COLOR);
			assert_eq!(first, second);
		}
	}

	#[test]
	fn test_unknown_status_passthrough() {
		for raw in ["", "shipped", "RECEIVED", "in transit", "assigned to a rider"] {
			let detail = get_status_details(raw);
			assert_eq!(detail.label, raw);
			assert_eq!(detail.color, NEUTRAL_COLOR);
		}
	}

	#[test]
	fn test_customer_timeline_labels() {
		assert_eq!(get_customer_timeline_label("received"), "Order Placed");
		assert_eq!(get_customer_timeline_label("confirmed"), "Order Confirmed");
		assert_eq!(get_customer_timeline_label("ready"), "Ready for Delivery");
		assert_eq!(get_customer_timeline_label("in_transit"), "On the Way");
		assert_eq!(get_customer_timeline_label("arrived"), "Delivered");
	}

	#[test]
	fn test_customer_timeline_label_falls_back_to_raw() {
		assert_eq!(get_customer_timeline_label("preparing"), "preparing");
		assert_eq!(get_customer_timeline_label("failed"), "failed");
		assert_eq!(
			get_customer_timeline_label("assigned_to_rider"),
			"assigned_to_rider"
		);
		assert_eq!(get_customer_timeline_label("mystery"), "mystery");
	}

	#[test]
	fn test_all_order_statuses_in_registry_order() {
		assert_eq!(
			get_all_order_statuses(),
			vec![
				"received",
				"confirmed",
				"failed",
				"preparing",
				"ready",
				"assigned_to_rider",
				"in_transit",
				"arrived",
			]
		);
	}

	#[test]
	fn test_status_label_by_audience() {
		assert_eq!(get_status_label("in_transit", "admin", false), "In Transit");
		assert_eq!(get_status_label("in_transit", "admin", true), "On the Way");
		assert_eq!(get_status_label("in_transit", "customer", false), "On the Way");
		assert_eq!(get_status_label("in_transit", "Customer", false), "On the Way");
		assert_eq!(get_status_label("preparing", "customer", false), "preparing");
		assert_eq!(get_status_label("bogus", "rider", false), "bogus");
	}

	#[test]
	fn test_status_color() {
		assert_eq!(get_status_color("failed"), "bg-red-100 text-red-800");
		assert_eq!(get_status_color("bogus"), NEUTRAL_COLOR);
	}
}
