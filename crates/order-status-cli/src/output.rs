//! Rendering of query responses.

use order_status_config::OutputFormat;
use order_status_types::StepState;

use crate::commands::Response;

/// Renders a response in the requested format.
pub fn render(response: &Response, format: OutputFormat) -> Result<String, serde_json::Error> {
	match format {
		OutputFormat::Json => serde_json::to_string_pretty(response),
		OutputFormat::Text => Ok(render_text(response)),
	}
}

/// One value per line.
fn render_text(response: &Response) -> String {
	match response {
		Response::Statuses(statuses) => statuses.join("\n"),
		Response::Detail(detail) => format!("{}\t{}", detail.label, detail.color),
		Response::Label(label) => label.clone(),
		Response::Flag(flag) => flag.to_string(),
		Response::Timeline(timeline) => timeline
			.steps
			.iter()
			.map(|step| {
				let mark = match step.state {
					StepState::Completed => "[x]",
					StepState::Current => "[>]",
					StepState::Pending => "[ ]",
				};
				format!("{} {} ({})", mark, step.label, step.status)
			})
			.collect::<Vec<_>>()
			.join("\n"),
		Response::Accepted { status } => status.to_string(),
	}
}
