use serde::Deserialize;

use super::super::util::millis;
use crate::cli::CliArgs;
use portal_search::SearchOptions;

/// Debounce and sizing knobs shared by the palette and the inline search.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) palette_debounce_ms: Option<u64>,
	pub(super) hero_debounce_ms: Option<u64>,
	pub(super) min_query_len: Option<usize>,
	pub(super) hero_cap: Option<usize>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(delay) = cli.palette_debounce_ms {
			self.palette_debounce_ms = Some(delay);
		}
		if let Some(delay) = cli.hero_debounce_ms {
			self.hero_debounce_ms = Some(delay);
		}
	}

	pub(super) fn finalize(self) -> SearchOptions {
		let defaults = SearchOptions::default();
		SearchOptions {
			palette_debounce: self
				.palette_debounce_ms
				.map_or(defaults.palette_debounce, millis),
			hero_debounce: self.hero_debounce_ms.map_or(defaults.hero_debounce, millis),
			min_query_len: self.min_query_len.unwrap_or(defaults.min_query_len),
			hero_cap: self.hero_cap.unwrap_or(defaults.hero_cap),
		}
	}
}
