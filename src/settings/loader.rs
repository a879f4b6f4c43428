use anyhow::{Context, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by layering default files, `--config` files,
/// `PORTAL_SEARCH__SECTION__KEY` variables and finally CLI flags.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let merged = build_config(cli)?;
	let mut raw: RawConfig = merged
		.try_deserialize()
		.context("failed to deserialize configuration")?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}
