use std::sync::Arc;

use anyhow::{Context, Result};
use portal_search::api::{FixtureBackend, HttpBackend, SearchBackend};
use portal_search::{PortalSearch, SearchOutcome};

use crate::settings::{PortalSettings, ResolvedConfig};

/// Coordinates building and running the interactive search experience.
pub(crate) struct SearchWorkflow {
    search: PortalSearch,
}

impl SearchWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let search = SearchFactory::build(config)?;
        Ok(Self { search })
    }

    pub(crate) fn run(self) -> Result<SearchOutcome> {
        self.search.run()
    }
}

/// Helper for translating resolved configuration into a configured `PortalSearch`.
struct SearchFactory;

impl SearchFactory {
    fn build(config: ResolvedConfig) -> Result<PortalSearch> {
        let ResolvedConfig {
            portal,
            options,
            ui,
            theme,
            initial_query,
            log_level: _,
        } = config;

        let backend = Self::backend(&portal)?;
        let mut search = PortalSearch::new(backend)
            .with_base_url(portal.base_url)
            .with_options(options)
            .with_ui_config(ui)
            .with_initial_query(initial_query);
        if let Some(theme) = theme {
            search = search.with_theme_name(&theme);
        }
        Ok(search)
    }

    fn backend(portal: &PortalSettings) -> Result<Arc<dyn SearchBackend>> {
        if let Some(path) = &portal.fixture {
            let backend = FixtureBackend::from_path(path)
                .with_context(|| format!("failed to load fixture {}", path.display()))?
                .with_latency(portal.fixture_latency);
            tracing::info!(path = %path.display(), "answering searches from fixture");
            return Ok(Arc::new(backend));
        }

        let backend = HttpBackend::new(&portal.base_url, portal.timeout)
            .with_context(|| format!("failed to prepare portal client for {}", portal.base_url))?;
        tracing::info!(endpoint = %backend.endpoint(), "answering searches from portal");
        Ok(Arc::new(backend))
    }
}
