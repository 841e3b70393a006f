//! Observer roles.
//!
//! Roles decide which order statuses a user may observe and therefore which
//! transitions they are offered. Role strings coming from the session are
//! matched case-insensitively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string is not one of the known roles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown role: {0}")]
pub struct RoleParseError(pub String);

/// A user role within the delivery application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	/// Person who placed the order.
	Customer,
	/// Delivery rider.
	Rider,
	/// Back-office administrator.
	Admin,
	/// Customer service representative.
	Csr,
}

impl Role {
	/// Every known role.
	pub const ALL: [Role; 4] = [Role::Customer, Role::Rider, Role::Admin, Role::Csr];

	/// Returns the canonical lowercase name of this role.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Role::Customer => "customer",
			Role::Rider => "rider",
			Role::Admin => "admin",
			Role::Csr => "csr",
		}
	}

	/// Looks up a role ignoring ASCII case.
	pub fn parse(value: &str) -> Option<Self> {
		Self::ALL
			.into_iter()
			.find(|role| role.as_str().eq_ignore_ascii_case(value))
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Role {
	type Err = RoleParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s).ok_or_else(|| RoleParseError(s.to_string()))
	}
}

/// A role string as supplied by the caller.
///
/// Unknown roles are preserved rather than rejected; they are treated as
/// seeing nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReportedRole {
	Known(Role),
	Unknown(String),
}

impl ReportedRole {
	/// Returns the known role, if any.
	pub fn known(&self) -> Option<Role> {
		match self {
			ReportedRole::Known(role) => Some(*role),
			ReportedRole::Unknown(_) => None,
		}
	}
}

impl From<&str> for ReportedRole {
	fn from(value: &str) -> Self {
		match Role::parse(value) {
			Some(role) => ReportedRole::Known(role),
			None => ReportedRole::Unknown(value.to_string()),
		}
	}
}

impl From<Role> for ReportedRole {
	fn from(role: Role) -> Self {
		ReportedRole::Known(role)
	}
}

impl fmt::Display for ReportedRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ReportedRole::Known(role) => role.fmt(f),
			ReportedRole::Unknown(raw) => f.write_str(raw),
		}
	}
}
