//! Configuration loading and resolution.
//!
//! Settings merge in layers: optional default files from the config
//! directory and the working directory, then any `--config` files, then
//! `TOME_`-prefixed environment variables, with CLI flags applied last.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::api::SearchMode;
use crate::app_dirs;
use crate::cli::CliArgs;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	backend: BackendSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct BackendSection {
	base_url: Option<String>,
	timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	initial_query: Option<String>,
	start_mode: Option<SearchMode>,
	theme: Option<String>,
}

/// Effective configuration after merging files, environment, and CLI flags.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	/// Base URL of the book-search backend.
	pub base_url: String,
	/// Per-request timeout.
	pub timeout: Duration,
	/// Query text pre-filled into the input.
	pub initial_query: String,
	/// Mode the UI starts in.
	pub start_mode: SearchMode,
	/// Theme name, when one was configured.
	pub theme: Option<String>,
}

impl ResolvedConfig {
	/// Print the effective configuration for `--print-config`.
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Backend: {}", self.base_url);
		println!("  Timeout: {}s", self.timeout.as_secs());
		println!("  Start mode: {}", self.start_mode.label());
		println!(
			"  UI theme: {}",
			self.theme.as_deref().unwrap_or("(builtin default)")
		);
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
	}
}

/// Merge every configuration source into a [`ResolvedConfig`].
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	Ok(raw.resolve())
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("tome")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".tome.toml"));
		files.push(current_dir.join("tome.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.backend.clone() {
			self.backend.base_url = Some(value);
		}
		if let Some(value) = cli.timeout {
			self.backend.timeout_secs = Some(value);
		}
		if let Some(value) = cli.initial_query.clone() {
			self.ui.initial_query = Some(value);
		}
		if let Some(value) = cli.mode {
			self.ui.start_mode = Some(value);
		}
		if let Some(value) = cli.theme.clone() {
			self.ui.theme = Some(value);
		}
	}

	fn resolve(self) -> ResolvedConfig {
		ResolvedConfig {
			base_url: self
				.backend
				.base_url
				.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			timeout: Duration::from_secs(
				self.backend.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
			),
			initial_query: self.ui.initial_query.unwrap_or_default(),
			start_mode: self.ui.start_mode.unwrap_or_default(),
			theme: self.ui.theme,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write as _;

	use clap::Parser;

	use super::*;

	fn cli(args: &[&str]) -> CliArgs {
		let mut full = vec!["tome"];
		full.extend_from_slice(args);
		CliArgs::parse_from(full)
	}

	#[test]
	fn defaults_apply_without_any_source() {
		let resolved = load(&cli(&["--no-config"])).expect("load succeeds");
		assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
		assert_eq!(resolved.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
		assert_eq!(resolved.start_mode, SearchMode::All);
		assert_eq!(resolved.initial_query, "");
		assert_eq!(resolved.theme, None);
	}

	#[test]
	fn config_file_values_are_merged() {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.expect("temp config");
		writeln!(
			file,
			"[backend]\nbase_url = \"http://books.internal:9000\"\ntimeout_secs = 3\n\n[ui]\nstart_mode = \"title\"\ntheme = \"mono\""
		)
		.expect("write config");

		let path = file.path().to_str().expect("utf-8 path").to_string();
		let resolved =
			load(&cli(&["--no-config", "--config", &path])).expect("load succeeds");

		assert_eq!(resolved.base_url, "http://books.internal:9000");
		assert_eq!(resolved.timeout, Duration::from_secs(3));
		assert_eq!(resolved.start_mode, SearchMode::Title);
		assert_eq!(resolved.theme.as_deref(), Some("mono"));
	}

	#[test]
	fn cli_flags_override_the_config_file() {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.expect("temp config");
		writeln!(file, "[backend]\nbase_url = \"http://from-file:1\"").expect("write config");

		let path = file.path().to_str().expect("utf-8 path").to_string();
		let resolved = load(&cli(&[
			"--no-config",
			"--config",
			&path,
			"--backend",
			"http://from-cli:2",
			"--mode",
			"category",
			"-q",
			"dune",
		]))
		.expect("load succeeds");

		assert_eq!(resolved.base_url, "http://from-cli:2");
		assert_eq!(resolved.start_mode, SearchMode::Category);
		assert_eq!(resolved.initial_query, "dune");
	}

	#[test]
	fn missing_required_config_file_is_an_error() {
		let result = load(&cli(&["--no-config", "--config", "/does/not/exist.toml"]));
		assert!(result.is_err());
	}
}
