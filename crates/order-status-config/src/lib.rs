//! Configuration module for the order status tooling.
//!
//! This module provides structures and utilities for loading configuration
//! from TOML files. Every section is optional and falls back to defaults, so
//! an empty file is a valid configuration.
//!
//! Values may reference environment variables as `${VAR}` or
//! `${VAR:-default}`; these are resolved before the TOML is parsed.

use order_status_types::Role;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Log levels accepted in the `[logging]` section.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the huge input dump
		let message = err.message().to_string();
		ConfigError::Parse(message)
	}
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
	/// Engine behaviour.
	#[serde(default)]
	pub engine: EngineConfig,
	/// How query results are printed.
	#[serde(default)]
	pub output: OutputConfig,
	/// Log verbosity.
	#[serde(default)]
	pub logging: LoggingConfig,
}

/// Configuration for the status engine.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EngineConfig {
	/// Role assumed when a query does not name one.
	/// Defaults to `customer`, the least privileged role.
	#[serde(default = "default_role", deserialize_with = "deserialize_role")]
	pub default_role: Role,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			default_role: default_role(),
		}
	}
}

fn default_role() -> Role {
	Role::Customer
}

/// Accepts role names in any case, like the engine does.
fn deserialize_role<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = String::deserialize(deserializer)?;
	raw.parse::<Role>().map_err(serde::de::Error::custom)
}

/// Output encoding for query results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
	#[default]
	Json,
	Text,
}

/// Configuration for result output.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
	#[serde(default)]
	pub format: OutputFormat,
}

/// Configuration for logging.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
	/// Default log level, overridden by `RUST_LOG`.
	#[serde(default = "default_log_level")]
	pub level: String,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: default_log_level(),
		}
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

/// Resolves environment variables in a string.
///
/// Replaces ${VAR_NAME} with the value of the environment variable VAR_NAME.
/// Supports default values with ${VAR_NAME:-default_value}.
///
/// Input strings are limited to 1MB to prevent ReDoS attacks.
pub(crate) fn resolve_env_vars(input: &str) -> Result<String, ConfigError> {
	const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB
	if input.len() > MAX_INPUT_SIZE {
		return Err(ConfigError::Validation(format!(
			"Configuration file too large: {} bytes (max: {} bytes)",
			input.len(),
			MAX_INPUT_SIZE
		)));
	}

	let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]{0,127})(?::-([^}]{0,256}))?\}")
		.map_err(|e| ConfigError::Parse(format!("Regex error: {}", e)))?;

	let mut result = String::with_capacity(input.len());
	let mut last_end = 0;

	for cap in re.captures_iter(input) {
		let (Some(full_match), Some(var_name)) = (cap.get(0), cap.get(1)) else {
			continue;
		};
		let default_value = cap.get(2).map(|m| m.as_str());

		let value = match std::env::var(var_name.as_str()) {
			Ok(v) => v,
			Err(_) => match default_value {
				Some(default) => default.to_string(),
				None => {
					return Err(ConfigError::Validation(format!(
						"Environment variable '{}' not found",
						var_name.as_str()
					)))
				},
			},
		};

		result.push_str(&input[last_end..full_match.start()]);
		result.push_str(&value);
		last_end = full_match.end();
	}

	result.push_str(&input[last_end..]);
	Ok(result)
}

impl Config {
	/// Loads configuration from a file, resolving environment variables.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
			ConfigError::Io(std::io::Error::new(
				e.kind(),
				format!("Cannot read {}: {}", path.as_ref().display(), e),
			))
		})?;
		content.parse()
	}

	/// Validates values serde cannot check on its own.
	fn validate(&self) -> Result<(), ConfigError> {
		let level = self.logging.level.to_ascii_lowercase();
		if !LOG_LEVELS.contains(&level.as_str()) {
			return Err(ConfigError::Validation(format!(
				"Invalid log level '{}', expected one of: {}",
				self.logging.level,
				LOG_LEVELS.join(", ")
			)));
		}

		Ok(())
	}
}

/// Implementation of FromStr trait for Config to enable parsing from string.
///
/// Environment variables are resolved and the configuration is validated
/// after parsing.
impl FromStr for Config {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let resolved = resolve_env_vars(s)?;
		let config: Config = toml::from_str(&resolved)?;
		config.validate()?;
		Ok(config)
	}
}
