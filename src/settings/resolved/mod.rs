use std::path::PathBuf;
use std::time::Duration;

use portal_search::{SearchOptions, UiConfig};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Where searches are answered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalSettings {
	pub base_url: String,
	pub timeout: Duration,
	/// Local snapshot used instead of the portal when set.
	pub fixture: Option<PathBuf>,
	pub fixture_latency: Duration,
}

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub portal: PortalSettings,
	pub options: SearchOptions,
	pub ui: UiConfig,
	pub theme: Option<String>,
	pub initial_query: String,
	pub log_level: Option<String>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
