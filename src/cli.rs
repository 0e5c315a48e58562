//! Command line arguments for the `tome` binary.

use std::fmt::Write;
use std::path::PathBuf;

use clap::builder::{
	Styles,
	styling::{AnsiColor, Effects},
};
use clap::{ArgAction, ColorChoice, Parser};

use crate::api::SearchMode;
use crate::app_dirs;

/// Produce the full version banner including the config directory.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("tome {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "tome",
	version,
	long_version = long_version(),
	about = "Interactive terminal client for a book-search service",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `tome` binary.
pub struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "TOME_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub no_config: bool,
	#[arg(
		short = 'b',
		long = "backend",
		value_name = "URL",
		env = "TOME_BACKEND",
		help = "Base URL of the book-search backend (default: http://localhost:8000)"
	)]
	pub backend: Option<String>,
	#[arg(
		long,
		value_name = "SECS",
		help = "Request timeout in seconds (default: 10)"
	)]
	pub timeout: Option<u64>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub initial_query: Option<String>,
	#[arg(
		short = 'm',
		long = "mode",
		value_enum,
		value_name = "MODE",
		help = "Search mode to start in (default: all)"
	)]
	pub mode: Option<SearchMode>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: builtin default)"
	)]
	pub theme: Option<String>,
	#[arg(long, help = "List builtin theme names and exit")]
	pub list_themes: bool,
	#[arg(long, help = "Print the effective configuration before starting")]
	pub print_config: bool,
}
