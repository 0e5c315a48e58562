//! Resolve the configuration directory for `tome`.
//!
//! The helper respects an environment override while falling back to the
//! platform-appropriate location provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "tome-tui";
const APPLICATION: &str = "tome";

const CONFIG_DIR_ENV: &str = "TOME_CONFIG_DIR";

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value so that callers can
/// use shell defaults without worrying about trailing whitespace.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() { None } else { Some(PathBuf::from(value)) }
}

/// Return the configuration directory used to persist user preferences.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.map(|dirs| dirs.config_local_dir().to_path_buf())
		.ok_or_else(|| anyhow!("unable to determine project directories for tome"))
}
