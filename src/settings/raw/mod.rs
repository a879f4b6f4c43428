use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod portal;
mod search;
mod ui;

use portal::PortalSection;
use search::SearchSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    portal: PortalSection,
    search: SearchSection,
    ui: UiSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.portal.apply_cli_overrides(cli);
        self.search.apply_cli_overrides(cli);
        self.ui.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            base_url: detect_source(
                cli.base_url.is_some(),
                self.portal.base_url.is_some(),
                "PORTAL_SEARCH__PORTAL__BASE_URL",
                "--base-url",
                "portal.base_url",
            ),
            timeout_ms: detect_source(
                cli.timeout_ms.is_some(),
                self.portal.timeout_ms.is_some(),
                "PORTAL_SEARCH__PORTAL__TIMEOUT_MS",
                "--timeout-ms",
                "portal.timeout_ms",
            ),
            palette_debounce_ms: detect_source(
                cli.palette_debounce_ms.is_some(),
                self.search.palette_debounce_ms.is_some(),
                "PORTAL_SEARCH__SEARCH__PALETTE_DEBOUNCE_MS",
                "--palette-debounce-ms",
                "search.palette_debounce_ms",
            ),
            hero_debounce_ms: detect_source(
                cli.hero_debounce_ms.is_some(),
                self.search.hero_debounce_ms.is_some(),
                "PORTAL_SEARCH__SEARCH__HERO_DEBOUNCE_MS",
                "--hero-debounce-ms",
                "search.hero_debounce_ms",
            ),
            min_query_len: detect_source(
                false,
                self.search.min_query_len.is_some(),
                "PORTAL_SEARCH__SEARCH__MIN_QUERY_LEN",
                "",
                "search.min_query_len",
            ),
            hero_cap: detect_source(
                false,
                self.search.hero_cap.is_some(),
                "PORTAL_SEARCH__SEARCH__HERO_CAP",
                "",
                "search.hero_cap",
            ),
        };

        let portal = self.portal.finalize();
        let options = self.search.finalize();
        let ui = self.ui.finalize();

        let config = ResolvedConfig {
            portal,
            options,
            ui: ui.ui,
            theme: ui.theme,
            initial_query: ui.initial_query,
            log_level: cli.log_level.clone(),
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}
