use crate::search::{ResultView, SearchPipeline};

/// What a search surface should show besides its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
	/// Nothing typed yet.
	Prompt,
	/// Input is shorter than the minimum query length.
	TooShort,
	/// Waiting for the first answer to the current query.
	Loading,
	/// The current query settled with no hits.
	NoResults,
	/// Rows are available.
	Results,
}

impl SearchStatus {
	#[must_use]
	pub fn of(query: &str, pipeline: &SearchPipeline, view: &ResultView) -> Self {
		let query = query.trim();
		if query.is_empty() {
			return Self::Prompt;
		}
		if query.chars().count() < pipeline.min_query_len() {
			return Self::TooShort;
		}
		if !view.is_empty() {
			return Self::Results;
		}
		if pipeline.is_loading() || pipeline.is_debouncing() || pipeline.result().is_none() {
			return Self::Loading;
		}
		Self::NoResults
	}
}
