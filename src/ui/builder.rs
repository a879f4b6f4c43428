use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use portal_search_api::SearchBackend;

use super::App;
use super::app::SearchOptions;
use super::config::UiConfig;
use super::style::{self, Theme};
use crate::outcome::SearchOutcome;
use crate::search::PortalLinks;

/// A small builder for configuring the interactive portal search.
///
/// Collects the backend, link base, timing and presentation options, then
/// runs the terminal UI until the user navigates somewhere or quits.
pub struct PortalSearch {
	backend: Arc<dyn SearchBackend>,
	links: PortalLinks,
	options: SearchOptions,
	ui_config: UiConfig,
	theme: Theme,
	initial_query: String,
}

impl PortalSearch {
	/// Create a search UI answered by `backend`.
	pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
		Self {
			backend,
			links: PortalLinks::default(),
			options: SearchOptions::default(),
			ui_config: UiConfig::default(),
			theme: style::default_theme(),
			initial_query: String::new(),
		}
	}

	/// Prefix for the portal URLs emitted on navigation.
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.links = PortalLinks::new(base_url);
		self
	}

	pub fn with_options(mut self, options: SearchOptions) -> Self {
		self.options = options;
		self
	}

	pub fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.ui_config = config;
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	/// Use the named built-in theme. Unknown names keep the current theme.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match style::by_name(name) {
			Some(theme) => self.theme = theme,
			None => tracing::warn!(theme = name, "unknown theme, keeping current"),
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	/// Assemble the [`App`] without starting the terminal.
	#[must_use]
	pub fn build(self) -> App {
		let mut app = App::new(
			self.backend,
			self.links,
			self.options,
			self.ui_config,
			self.theme,
		);
		app.set_initial_query(&self.initial_query, Instant::now());
		app
	}

	/// Run the interactive search UI with the configured options.
	pub fn run(self) -> Result<SearchOutcome> {
		self.build().run()
	}
}

#[cfg(test)]
mod tests {
	use portal_search_api::FixtureBackend;

	use super::*;
	use crate::ui::Focus;

	#[test]
	fn initial_query_focuses_hero() {
		let app = PortalSearch::new(Arc::new(FixtureBackend::default()))
			.with_base_url("https://portal.example.org/")
			.with_initial_query("Rui")
			.build();
		assert_eq!(app.focus(), Focus::Hero);
		assert_eq!(app.hero().query(), "Rui");
	}

	#[test]
	fn unknown_theme_name_keeps_default() {
		let app = PortalSearch::new(Arc::new(FixtureBackend::default()))
			.with_theme_name("neon")
			.build();
		assert_eq!(app.theme, style::default_theme());
		assert_eq!(app.focus(), Focus::Page);
	}
}
