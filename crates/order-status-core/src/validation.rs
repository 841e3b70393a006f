//! Validation of proposed status updates.
//!
//! Unlike the lookup functions, these checks are meant for the write path:
//! before an update is sent to the backend the proposed status must be a real
//! status and, when the current status and role are known, a transition that
//! role is actually offered.

use order_status_types::{OrderStatus, ReportedRole, ReportedStatus, Role};
use thiserror::Error;

use crate::registry::get_all_order_statuses;
use crate::transitions::is_valid_transition;
use crate::visibility::can_see;

/// Errors that can occur when validating a status update.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
	#[error("Invalid status value. Must be one of: {}", get_all_order_statuses().join(", "))]
	InvalidStatus(String),
	#[error("Unknown current status: {0}")]
	UnknownCurrentStatus(String),
	#[error("Unknown role: {0}")]
	UnknownRole(String),
	#[error("Invalid state transition from {from} to {to}")]
	InvalidTransition { from: OrderStatus, to: OrderStatus },
	#[error("Role {role} cannot see status {status}")]
	NotVisibleToRole { role: Role, status: OrderStatus },
}

/// Checks that `proposed` is one of the known statuses.
pub fn validate_status_value(proposed: &str) -> Result<OrderStatus, UpdateError> {
	OrderStatus::parse(proposed).ok_or_else(|| UpdateError::InvalidStatus(proposed.to_string()))
}

/// Checks that `role` may move an order from `current` to `proposed`.
///
/// Returns the parsed target status on success.
pub fn validate_status_update(
	current: &str,
	proposed: &str,
	role: &str,
) -> Result<OrderStatus, UpdateError> {
	let to = validate_status_value(proposed)?;

	let from = match ReportedStatus::from(current) {
		ReportedStatus::Known(status) => status,
		ReportedStatus::Unknown(raw) => return Err(UpdateError::UnknownCurrentStatus(raw)),
	};

	let role = match ReportedRole::from(role) {
		ReportedRole::Known(role) => role,
		ReportedRole::Unknown(raw) => return Err(UpdateError::UnknownRole(raw)),
	};

	if !is_valid_transition(from, to) {
		tracing::warn!(%from, %to, %role, "Rejected status update");
		return Err(UpdateError::InvalidTransition { from, to });
	}

	if !can_see(role, to) {
		tracing::warn!(%from, %to, %role, "Rejected status update outside role visibility");
		return Err(UpdateError::NotVisibleToRole { role, status: to });
	}

	Ok(to)
}
