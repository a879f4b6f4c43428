//! Where `portal-search` keeps its configuration file and its log.
//!
//! Both locations can be moved with an environment variable; otherwise the
//! platform defaults from the `directories` crate apply.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "PORTAL_SEARCH_CONFIG_DIR";
const DATA_DIR_ENV: &str = "PORTAL_SEARCH_DATA_DIR";
const CONFIG_FILE_NAME: &str = "config.toml";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from("org", "portal", "portal-search")
		.ok_or_else(|| anyhow!("no home directory to place portal-search files in"))
}

/// An empty override counts as unset.
fn override_dir(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// Directory holding [`config_file`].
pub fn get_config_dir() -> Result<PathBuf> {
	match override_dir(env::var_os(CONFIG_DIR_ENV)) {
		Some(dir) => Ok(dir),
		None => Ok(project_dirs()?.config_local_dir().to_path_buf()),
	}
}

/// The per-user configuration file consulted before any `--config` file.
pub fn config_file() -> Result<PathBuf> {
	Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Directory for the log file.
pub fn get_data_dir() -> Result<PathBuf> {
	match override_dir(env::var_os(DATA_DIR_ENV)) {
		Some(dir) => Ok(dir),
		None => Ok(project_dirs()?.data_local_dir().to_path_buf()),
	}
}
