//! Order lifecycle status types.
//!
//! This module defines the closed set of order lifecycle states together with
//! a lenient wrapper used wherever a status arrives from outside the process
//! (API responses, websocket updates, command-line input).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string is not one of the known order statuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown order status: {0}")]
pub struct StatusParseError(pub String);

/// Status of an order in the delivery lifecycle.
///
/// The variant order is the registry declaration order and is relied upon by
/// listings that present every status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
	/// Order has been placed by the customer.
	Received,
	/// Order has been accepted by the restaurant.
	Confirmed,
	/// Order could not be fulfilled. Terminal.
	Failed,
	/// Kitchen is preparing the order.
	Preparing,
	/// Order is ready to be picked up.
	Ready,
	/// A rider has been assigned to deliver the order.
	AssignedToRider,
	/// Rider is on the way to the customer.
	InTransit,
	/// Order has been delivered. Terminal.
	Arrived,
}

impl OrderStatus {
	/// Every status in registry declaration order.
	pub const ALL: [OrderStatus; 8] = [
		OrderStatus::Received,
		OrderStatus::Confirmed,
		OrderStatus::Failed,
		OrderStatus::Preparing,
		OrderStatus::Ready,
		OrderStatus::AssignedToRider,
		OrderStatus::InTransit,
		OrderStatus::Arrived,
	];

	/// Status new orders start in by convention.
	pub const INITIAL: OrderStatus = OrderStatus::Received;

	/// Returns the wire representation of this status.
	pub const fn as_str(&self) -> &'static str {
		match self {
			OrderStatus::Received => "received",
			OrderStatus::Confirmed => "confirmed",
			OrderStatus::Failed => "failed",
			OrderStatus::Preparing => "preparing",
			OrderStatus::Ready => "ready",
			OrderStatus::AssignedToRider => "assigned_to_rider",
			OrderStatus::InTransit => "in_transit",
			OrderStatus::Arrived => "arrived",
		}
	}

	/// Looks up a status by its exact wire representation.
	pub fn parse(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|status| status.as_str() == value)
	}
}

impl fmt::Display for OrderStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for OrderStatus {
	type Err = StatusParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s).ok_or_else(|| StatusParseError(s.to_string()))
	}
}

/// A status value as reported by an external collaborator.
///
/// Parsing never fails: values outside the known set are kept verbatim in
/// [`ReportedStatus::Unknown`] so callers can still render them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportedStatus {
	/// One of the eight lifecycle statuses.
	Known(OrderStatus),
	/// Anything else, e.g. a legacy or not yet supported backend value.
	Unknown(String),
}

impl ReportedStatus {
	/// Returns the known status, if any.
	pub fn known(&self) -> Option<OrderStatus> {
		match self {
			ReportedStatus::Known(status) => Some(*status),
			ReportedStatus::Unknown(_) => None,
		}
	}

	/// Returns the raw string this value was parsed from.
	pub fn as_str(&self) -> &str {
		match self {
			ReportedStatus::Known(status) => status.as_str(),
			ReportedStatus::Unknown(raw) => raw,
		}
	}
}

impl From<&str> for ReportedStatus {
	fn from(value: &str) -> Self {
		match OrderStatus::parse(value) {
			Some(status) => ReportedStatus::Known(status),
			None => ReportedStatus::Unknown(value.to_string()),
		}
	}
}

impl From<String> for ReportedStatus {
	fn from(value: String) -> Self {
		match OrderStatus::parse(&value) {
			Some(status) => ReportedStatus::Known(status),
			None => ReportedStatus::Unknown(value),
		}
	}
}

impl From<OrderStatus> for ReportedStatus {
	fn from(status: OrderStatus) -> Self {
		ReportedStatus::Known(status)
	}
}

impl From<ReportedStatus> for String {
	fn from(value: ReportedStatus) -> Self {
		match value {
			ReportedStatus::Known(status) => status.as_str().to_string(),
			ReportedStatus::Unknown(raw) => raw,
		}
	}
}

impl fmt::Display for ReportedStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
