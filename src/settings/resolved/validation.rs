use std::time::Duration;

use super::super::util::is_http_url;
use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Longest quiet period accepted for either search surface.
const MAX_DEBOUNCE: Duration = Duration::from_secs(5);

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	// A fixture replaces the portal for searches, but links still use the base URL.
	if !is_http_url(&config.portal.base_url) {
		return Err(ConfigError::invalid(
			"portal.base_url",
			config.portal.base_url.clone(),
			sources.source_for("portal.base_url"),
			"must be an http or https address",
		));
	}

	if config.portal.timeout.is_zero() {
		return Err(ConfigError::invalid(
			"portal.timeout_ms",
			"0",
			sources.source_for("portal.timeout_ms"),
			"must be greater than zero",
		));
	}

	for (key, delay) in [
		("search.palette_debounce_ms", config.options.palette_debounce),
		("search.hero_debounce_ms", config.options.hero_debounce),
	] {
		if delay > MAX_DEBOUNCE {
			return Err(ConfigError::invalid(
				key,
				delay.as_millis().to_string(),
				sources.source_for(key),
				format!("must be at most {} ms", MAX_DEBOUNCE.as_millis()),
			));
		}
	}

	if config.options.min_query_len == 0 {
		return Err(ConfigError::invalid(
			"search.min_query_len",
			"0",
			sources.source_for("search.min_query_len"),
			"must be at least 1",
		));
	}

	if config.options.hero_cap == 0 {
		return Err(ConfigError::invalid(
			"search.hero_cap",
			"0",
			sources.source_for("search.hero_cap"),
			"must be at least 1",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use portal_search::{SearchOptions, UiConfig};

	use super::super::{PortalSettings, SettingSource};
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			portal: PortalSettings {
				base_url: "http://localhost:8000".into(),
				timeout: Duration::from_secs(10),
				fixture: None,
				fixture_latency: Duration::ZERO,
			},
			options: SearchOptions::default(),
			ui: UiConfig::default(),
			theme: None,
			initial_query: String::new(),
			log_level: None,
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let mut config = config();
		config.portal.timeout = Duration::ZERO;
		let sources = ConfigSources {
			timeout_ms: Some(SettingSource::CliFlag("--timeout-ms")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "portal.timeout_ms"));
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_long_debounce() {
		let mut config = config();
		config.options.hero_debounce = Duration::from_millis(6000);
		let sources = ConfigSources {
			hero_debounce_ms: Some(SettingSource::Environment(
				"PORTAL_SEARCH__SEARCH__HERO_DEBOUNCE_MS",
			)),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "search.hero_debounce_ms"));
		let message = err.to_string();
		assert!(message.contains("value: 6000"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_rejects_non_http_base_url() {
		let mut config = config();
		config.portal.base_url = "file:///srv/portal".into();
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err.key, "portal.base_url"));
		assert!(err.to_string().contains("configuration key"));
	}

	#[test]
	fn validation_rejects_zero_hero_cap() {
		let mut config = config();
		config.options.hero_cap = 0;
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err.key, "search.hero_cap"));
	}
}
