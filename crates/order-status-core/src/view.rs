//! Role-bound access to the engine.
//!
//! Rendering code usually works on behalf of one signed-in user. A
//! [`StatusView`] captures that user's role once and exposes the engine's
//! queries without repeating it.

use order_status_types::{OrderStatus, Role, StatusDetail, Timeline};

use crate::validation::{self, UpdateError};
use crate::{progress, registry, transitions, visibility};

/// Role assumed when the session carries none.
pub const DEFAULT_ROLE: Role = Role::Customer;

/// Engine queries bound to a single role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
	role: String,
}

impl StatusView {
	/// Binds a view to `role`, falling back to [`DEFAULT_ROLE`] when absent.
	///
	/// Unrecognised role strings are kept as-is and see nothing.
	pub fn new(role: Option<&str>) -> Self {
		Self::with_default(role, DEFAULT_ROLE)
	}

	/// Binds a view to `role`, falling back to `default` when absent.
	pub fn with_default(role: Option<&str>, default: Role) -> Self {
		let role = match role {
			Some(role) if !role.is_empty() => role.to_string(),
			_ => default.as_str().to_string(),
		};
		Self { role }
	}

	pub fn role(&self) -> &str {
		&self.role
	}

	/// Statuses this role may observe, in lifecycle order.
	pub fn visible_statuses(&self) -> Vec<&'static str> {
		visibility::get_statuses_by_role(&self.role)
	}

	/// Transitions offered to this role from `current_status`.
	pub fn next_statuses(&self, current_status: &str) -> Vec<&'static str> {
		transitions::get_next_statuses(current_status, &self.role)
	}

	pub fn can_see(&self, status: &str) -> bool {
		visibility::can_role_see_status(&self.role, status)
	}

	pub fn label(&self, status: &str, customer_audience: bool) -> String {
		registry::get_status_label(status, &self.role, customer_audience)
	}

	pub fn color(&self, status: &str) -> String {
		registry::get_status_color(status)
	}

	pub fn details(&self, status: &str) -> StatusDetail {
		registry::get_status_details(status)
	}

	pub fn is_completed(&self, target_status: &str, current_status: &str) -> bool {
		progress::is_status_completed(target_status, current_status)
	}

	pub fn timeline(&self, current_status: &str) -> Timeline {
		progress::build_timeline(current_status, &self.role)
	}

	/// Validates a proposed update on behalf of this role.
	pub fn validate_update(
		&self,
		current_status: &str,
		proposed: &str,
	) -> Result<OrderStatus, UpdateError> {
		validation::validate_status_update(current_status, proposed, &self.role)
	}
}

impl Default for StatusView {
	fn default() -> Self {
		Self::new(None)
	}
}
