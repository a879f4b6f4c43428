use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) base_url: Option<SettingSource>,
	pub(crate) timeout_ms: Option<SettingSource>,
	pub(crate) palette_debounce_ms: Option<SettingSource>,
	pub(crate) hero_debounce_ms: Option<SettingSource>,
	pub(crate) min_query_len: Option<SettingSource>,
	pub(crate) hero_cap: Option<SettingSource>,
}

impl ConfigSources {
	/// Source recorded for `key`, falling back to the configuration key itself.
	pub(crate) fn source_for(&self, key: &'static str) -> SettingSource {
		let recorded = match key {
			"portal.base_url" => &self.base_url,
			"portal.timeout_ms" => &self.timeout_ms,
			"search.palette_debounce_ms" => &self.palette_debounce_ms,
			"search.hero_debounce_ms" => &self.hero_debounce_ms,
			"search.min_query_len" => &self.min_query_len,
			"search.hero_cap" => &self.hero_cap,
			_ => &None,
		};
		recorded.clone().unwrap_or(SettingSource::ConfigKey(key))
	}
}
