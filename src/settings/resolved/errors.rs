use thiserror::Error;

use super::SettingSource;

/// A setting that parsed but is out of range, with where it came from.
#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn invalid(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		reason: impl Into<String>,
	) -> Self {
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message_names_environment_origin() {
		let err = ConfigError::invalid(
			"search.hero_cap",
			"0",
			SettingSource::Environment("PORTAL_SEARCH__SEARCH__HERO_CAP"),
			"must be at least 1",
		);
		assert_eq!(
			err.to_string(),
			"invalid value for search.hero_cap from environment variable \
			 `PORTAL_SEARCH__SEARCH__HERO_CAP`: must be at least 1 (value: 0)"
		);
	}
}
