//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI while it runs, so log lines go to
//! `<data dir>/portal-search.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV: &str = "PORTAL_SEARCH_LOG";
const LOG_FILE_NAME: &str = "portal-search.log";
const DEFAULT_LEVEL: &str = "info";

/// Where the log file lives unless a caller picks another path.
pub fn default_log_path() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Install the global subscriber, appending to `path`.
///
/// The filter comes from [`LOG_ENV`] when set, otherwise from `level`, and
/// defaults to `info`.
pub fn initialize(path: &Path, level: Option<&str>) -> Result<()> {
	let filter = resolve_filter(std::env::var(LOG_ENV).ok().as_deref(), level)?;

	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

fn resolve_filter(env: Option<&str>, level: Option<&str>) -> Result<EnvFilter> {
	let directives = env
		.filter(|value| !value.trim().is_empty())
		.or(level)
		.unwrap_or(DEFAULT_LEVEL);
	EnvFilter::try_new(directives)
		.with_context(|| format!("invalid log filter `{directives}`"))
}
