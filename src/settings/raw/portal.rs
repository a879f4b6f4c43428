use std::path::PathBuf;

use serde::Deserialize;

use super::super::resolved::PortalSettings;
use super::super::util::{millis, non_blank};
use crate::cli::CliArgs;

pub(super) const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub(super) const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Where searches are answered from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PortalSection {
	pub(super) base_url: Option<String>,
	pub(super) timeout_ms: Option<u64>,
	pub(super) fixture: Option<PathBuf>,
	pub(super) fixture_latency_ms: Option<u64>,
}

impl PortalSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.base_url.clone() {
			self.base_url = Some(url);
		}
		if let Some(timeout) = cli.timeout_ms {
			self.timeout_ms = Some(timeout);
		}
		if let Some(path) = cli.fixture.clone() {
			self.fixture = Some(path);
		}
	}

	pub(super) fn finalize(self) -> PortalSettings {
		let base_url = non_blank(self.base_url)
			.map(|url| url.trim_end_matches('/').to_string())
			.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
		PortalSettings {
			base_url,
			timeout: millis(self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)),
			fixture: self.fixture.filter(|path| !path.as_os_str().is_empty()),
			fixture_latency: millis(self.fixture_latency_ms.unwrap_or(0)),
		}
	}
}
