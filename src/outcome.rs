//! What a search session ends with.

/// A request to open a portal page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
	pub url: String,
}

impl NavigationRequest {
	#[must_use]
	pub fn new(url: impl Into<String>) -> Self {
		Self { url: url.into() }
	}
}

/// Result of running the interactive UI to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
	/// Where the user chose to go; `None` when they quit instead.
	pub navigation: Option<NavigationRequest>,
	/// Text of the surface that produced the outcome.
	pub query: String,
}

impl SearchOutcome {
	#[must_use]
	pub fn navigate(request: NavigationRequest, query: impl Into<String>) -> Self {
		Self {
			navigation: Some(request),
			query: query.into(),
		}
	}

	#[must_use]
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			navigation: None,
			query: query.into(),
		}
	}

	#[must_use]
	pub fn accepted(&self) -> bool {
		self.navigation.is_some()
	}

	#[must_use]
	pub fn url(&self) -> Option<&str> {
		self.navigation.as_ref().map(|request| request.url.as_str())
	}
}
