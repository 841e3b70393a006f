//! Query commands.
//!
//! Each subcommand maps onto one engine query. Commands only compute a
//! [`Response`]; rendering lives in [`crate::output`].

use clap::Subcommand;
use order_status_core::{
	get_all_order_statuses, get_statuses_by_role, is_status_completed, StatusView, UpdateError,
};
use order_status_types::{OrderStatus, Role, StatusDetail, Timeline};
use serde::Serialize;

/// Available queries.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// List every status, or only those visible to a role
	Statuses {
		#[arg(short, long)]
		role: Option<String>,
	},
	/// Show the label and colour of a status
	Details { status: String },
	/// Show the label a role sees for a status
	Label {
		status: String,
		#[arg(short, long)]
		role: Option<String>,
		/// Render for a customer audience regardless of role
		#[arg(long)]
		customer: bool,
	},
	/// Check whether a role may observe a status
	CanSee { role: String, status: String },
	/// List the transitions offered to a role
	Next {
		status: String,
		#[arg(short, long)]
		role: Option<String>,
	},
	/// Check whether TARGET is completed for an order at CURRENT
	Completed { target: String, current: String },
	/// Build the progress timeline of an order
	Timeline {
		status: String,
		#[arg(short, long)]
		role: Option<String>,
	},
	/// Validate a proposed status update
	Validate {
		current: String,
		proposed: String,
		#[arg(short, long)]
		role: Option<String>,
	},
}

/// Result of a query, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
	Statuses(Vec<&'static str>),
	Detail(StatusDetail),
	Label(String),
	Flag(bool),
	Timeline(Timeline),
	Accepted { status: OrderStatus },
}

impl Command {
	/// Runs the query. `default_role` applies wherever no role was given.
	pub fn execute(&self, default_role: Role) -> Result<Response, UpdateError> {
		let view = |role: &Option<String>| StatusView::with_default(role.as_deref(), default_role);

		let response = match self {
			Command::Statuses { role: Some(role) } => Response::Statuses(get_statuses_by_role(role)),
			Command::Statuses { role: None } => Response::Statuses(get_all_order_statuses()),
			Command::Details { status } => Response::Detail(view(&None).details(status)),
			Command::Label {
				status,
				role,
				customer,
			} => Response::Label(view(role).label(status, *customer)),
			Command::CanSee { role, status } => {
				Response::Flag(view(&Some(role.clone())).can_see(status))
			},
			Command::Next { status, role } => Response::Statuses(view(role).next_statuses(status)),
			Command::Completed { target, current } => {
				Response::Flag(is_status_completed(target, current))
			},
			Command::Timeline { status, role } => Response::Timeline(view(role).timeline(status)),
			Command::Validate {
				current,
				proposed,
				role,
			} => Response::Accepted {
				status: view(role).validate_update(current, proposed)?,
			},
		};

		Ok(response)
	}
}
