//! Role visibility table.
//!
//! Maps each role to the ordered statuses it may observe. The order is the
//! lifecycle progression and is reused for timeline rendering. Visibility
//! fails closed: a role string that does not match a known role sees nothing.

use once_cell::sync::Lazy;
use order_status_types::{OrderStatus, ReportedRole, ReportedStatus, Role};
use std::collections::HashMap;

/// Static visibility table - each role maps to the statuses it can observe.
static VISIBILITY: Lazy<HashMap<Role, &'static [OrderStatus]>> = Lazy::new(|| {
	const CUSTOMER: &[OrderStatus] = &[
		OrderStatus::Received,
		OrderStatus::Confirmed,
		OrderStatus::Ready,
		OrderStatus::InTransit,
		OrderStatus::Arrived,
	];
	const RIDER: &[OrderStatus] = &[
		OrderStatus::Ready,
		OrderStatus::AssignedToRider,
		OrderStatus::InTransit,
		OrderStatus::Arrived,
	];

	let mut m: HashMap<Role, &'static [OrderStatus]> = HashMap::new();
	m.insert(Role::Customer, CUSTOMER);
	m.insert(Role::Rider, RIDER);
	m.insert(Role::Admin, &OrderStatus::ALL); // sees everything
	m.insert(Role::Csr, &OrderStatus::ALL); // sees everything
	m
});

/// Returns the statuses a known role may observe, in lifecycle order.
pub fn visible_statuses(role: Role) -> &'static [OrderStatus] {
	VISIBILITY.get(&role).copied().unwrap_or(&[])
}

/// Returns whether a known role may observe a known status.
pub fn can_see(role: Role, status: OrderStatus) -> bool {
	visible_statuses(role).contains(&status)
}

/// Resolves a role string to its visible statuses, empty when unknown.
pub(crate) fn statuses_for(role: &str) -> &'static [OrderStatus] {
	match ReportedRole::from(role) {
		ReportedRole::Known(role) => visible_statuses(role),
		ReportedRole::Unknown(raw) => {
			tracing::debug!(role = %raw, "Unknown role, no statuses visible");
			&[]
		},
	}
}

/// Returns the status values a role may observe. Matching is case-insensitive.
pub fn get_statuses_by_role(role: &str) -> Vec<&'static str> {
	statuses_for(role).iter().map(OrderStatus::as_str).collect()
}

/// Returns whether `role` may observe `status`.
pub fn can_role_see_status(role: &str, status: &str) -> bool {
	match ReportedStatus::from(status) {
		ReportedStatus::Known(status) => statuses_for(role).contains(&status),
		ReportedStatus::Unknown(_) => false,
	}
}
