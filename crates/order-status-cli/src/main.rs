//! Main entry point for the order status command-line tool.
//!
//! This binary exposes the order status engine for scripting and support
//! work: listing statuses per role, resolving labels, computing the
//! transitions a role is offered, drawing timelines and validating proposed
//! updates before they are sent to the order service.

use clap::{Parser, ValueEnum};
use order_status_config::{Config, OutputFormat};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod commands;
mod output;

use commands::Command;

/// Config file picked up from the working directory when none is given.
const DEFAULT_CONFIG_FILE: &str = "order-status.toml";

/// Output format flag.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum FormatArg {
	Json,
	Text,
}

impl From<FormatArg> for OutputFormat {
	fn from(arg: FormatArg) -> Self {
		match arg {
			FormatArg::Json => OutputFormat::Json,
			FormatArg::Text => OutputFormat::Text,
		}
	}
}

/// Command-line arguments for the order status tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path to configuration file
	#[arg(short, long, env = "ORDER_STATUS_CONFIG")]
	config: Option<PathBuf>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long)]
	log_level: Option<String>,

	/// Output format, overrides the configured one
	#[arg(short, long, value_enum)]
	format: Option<FormatArg>,

	#[command(subcommand)]
	command: Command,
}

/// Loads the explicit config file, or the default one if present.
fn load_config(explicit: Option<&Path>) -> Result<Config, order_status_config::ConfigError> {
	match explicit {
		Some(path) => Config::from_file(path),
		None if Path::new(DEFAULT_CONFIG_FILE).exists() => Config::from_file(DEFAULT_CONFIG_FILE),
		None => Ok(Config::default()),
	}
}

fn init_tracing(level: &str) {
	use tracing_subscriber::{fmt, EnvFilter};

	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

	fmt()
		.with_env_filter(env_filter)
		.with_target(true)
		.with_writer(std::io::stderr)
		.init();
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
	let config = load_config(args.config.as_deref())?;

	let level = args
		.log_level
		.clone()
		.unwrap_or_else(|| config.logging.level.clone());
	init_tracing(&level);
	tracing::debug!(
		default_role = %config.engine.default_role,
		"Loaded configuration"
	);

	let format = args
		.format
		.map(OutputFormat::from)
		.unwrap_or(config.output.format);

	let response = args.command.execute(config.engine.default_role)?;
	println!("{}", output::render(&response, format)?);
	Ok(())
}

fn main() -> ExitCode {
	let args = Args::parse();

	match run(args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error: {}", e);
			ExitCode::FAILURE
		},
	}
}
