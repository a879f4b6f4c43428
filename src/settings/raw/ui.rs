use portal_search::UiConfig;
use serde::Deserialize;

use super::super::util::non_blank;
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) subtitle: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) people_label: Option<String>,
	pub(super) contacts_label: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) ui: UiConfig,
	pub(super) initial_query: String,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut ui = UiConfig::default();
		if let Some(title) = non_blank(self.title) {
			ui.title = title;
		}
		if let Some(subtitle) = self.subtitle {
			ui.subtitle = subtitle;
		}
		if let Some(placeholder) = self.placeholder {
			ui.placeholder = placeholder;
		}
		if let Some(label) = non_blank(self.people_label) {
			ui.people_label = label;
		}
		if let Some(label) = non_blank(self.contacts_label) {
			ui.contacts_label = label;
		}

		UiResolution {
			ui,
			initial_query: self.initial_query.unwrap_or_default(),
			theme: non_blank(self.theme),
		}
	}
}
