use portal_search_api::{BackendError, SearchResult};

/// Default minimum number of characters (after trimming) before a query is
/// sent to the backend.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Lifecycle of the current query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
	/// No query worth sending; nothing is displayed.
	#[default]
	Idle,
	/// A request for the current token is in flight.
	Pending,
	/// The response for the current token has been applied.
	Settled,
}

/// A request the session wants executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
	pub token: u64,
	pub query: String,
}

/// A backend answer tagged with the token of the request that produced it.
#[derive(Debug)]
pub struct SearchResponse {
	pub token: u64,
	pub query: String,
	pub outcome: Result<SearchResult, BackendError>,
}

/// What happened to a response handed to [`SearchSession::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	/// The response belonged to the current query and is now displayed.
	Applied,
	/// The response was superseded and has been discarded.
	Stale,
}

/// Owns the request token, loading state and the displayed result.
///
/// The session never performs I/O. [`SearchSession::submit`] returns the
/// request to execute and [`SearchSession::resolve`] accepts whatever comes
/// back, applying it only if its token is still current.
#[derive(Debug)]
pub struct SearchSession {
	min_query_len: usize,
	state: SessionState,
	result: Option<SearchResult>,
	next_token: u64,
	current: Option<SearchRequest>,
	revision: u64,
	last_failure: Option<String>,
}

impl Default for SearchSession {
	fn default() -> Self {
		Self::new(DEFAULT_MIN_QUERY_LEN)
	}
}

impl SearchSession {
	#[must_use]
	pub fn new(min_query_len: usize) -> Self {
		Self {
			min_query_len,
			state: SessionState::Idle,
			result: None,
			next_token: 0,
			current: None,
			revision: 0,
			last_failure: None,
		}
	}

	/// Handle a settled (debounced) query.
	///
	/// Returns the request to execute, or `None` when the query is too short
	/// or identical to the one already pending or displayed.
	pub fn submit(&mut self, debounced: &str) -> Option<SearchRequest> {
		let query = debounced.trim();

		if query.chars().count() < self.min_query_len {
			self.go_idle();
			return None;
		}

		if self
			.current
			.as_ref()
			.is_some_and(|current| current.query == query)
		{
			return None;
		}

		self.next_token = self.next_token.saturating_add(1);
		let request = SearchRequest {
			token: self.next_token,
			query: query.to_string(),
		};
		self.current = Some(request.clone());
		self.state = SessionState::Pending;
		tracing::debug!(token = request.token, query = %request.query, "issuing search");
		Some(request)
	}

	/// Apply `response` if it answers the current request.
	pub fn resolve(&mut self, response: SearchResponse) -> Resolution {
		if !self.is_current(response.token) {
			tracing::debug!(
				token = response.token,
				query = %response.query,
				"discarding stale search response"
			);
			return Resolution::Stale;
		}

		let result = match response.outcome {
			Ok(result) => {
				self.last_failure = None;
				result
			}
			Err(err) => {
				tracing::warn!(query = %response.query, error = %err, "search request failed");
				self.last_failure = Some(err.to_string());
				SearchResult::default()
			}
		};

		self.result = Some(result);
		self.state = SessionState::Settled;
		self.bump_revision();
		Resolution::Applied
	}

	/// Return to the empty state. The token counter keeps counting so that
	/// responses to requests issued before the reset stay stale.
	pub fn reset(&mut self) {
		self.go_idle();
		self.last_failure = None;
	}

	#[must_use]
	pub fn state(&self) -> SessionState {
		self.state
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.state == SessionState::Pending
	}

	#[must_use]
	pub fn result(&self) -> Option<&SearchResult> {
		self.result.as_ref()
	}

	/// Query of the request that currently owns the session, if any.
	#[must_use]
	pub fn current_query(&self) -> Option<&str> {
		self.current.as_ref().map(|current| current.query.as_str())
	}

	/// Token of the most recently issued request.
	#[must_use]
	pub fn latest_token(&self) -> u64 {
		self.next_token
	}

	/// Changes whenever the displayed result changes identity.
	#[must_use]
	pub fn revision(&self) -> u64 {
		self.revision
	}

	#[must_use]
	pub fn last_failure(&self) -> Option<&str> {
		self.last_failure.as_deref()
	}

	#[must_use]
	pub fn min_query_len(&self) -> usize {
		self.min_query_len
	}

	fn is_current(&self, token: u64) -> bool {
		self.current
			.as_ref()
			.is_some_and(|current| current.token == token)
	}

	fn go_idle(&mut self) {
		let had_result = self.result.take().is_some();
		self.current = None;
		self.state = SessionState::Idle;
		if had_result {
			self.bump_revision();
		}
	}

	fn bump_revision(&mut self) {
		self.revision = self.revision.wrapping_add(1);
	}
}

#[cfg(test)]
mod tests {
	use portal_search_api::PersonHit;

	use super::*;

	fn hits(count: usize) -> SearchResult {
		let people = (0..count)
			.map(|index| PersonHit::new(format!("Pessoa {index}"), "1ª Fase"))
			.collect();
		SearchResult::new(people, Vec::new())
	}

	fn respond(request: &SearchRequest, result: SearchResult) -> SearchResponse {
		SearchResponse {
			token: request.token,
			query: request.query.clone(),
			outcome: Ok(result),
		}
	}

	#[test]
	fn short_query_stays_idle_without_request() {
		let mut session = SearchSession::default();
		assert_eq!(session.submit(" A "), None);
		assert_eq!(session.state(), SessionState::Idle);
		assert_eq!(session.latest_token(), 0);
	}

	#[test]
	fn valid_query_issues_trimmed_request() {
		let mut session = SearchSession::default();
		let request = session.submit("  An ").expect("request");
		assert_eq!(request.query, "An");
		assert_eq!(request.token, 1);
		assert!(session.is_pending());
	}

	#[test]
	fn matching_response_settles() {
		let mut session = SearchSession::default();
		let request = session.submit("Ana").expect("request");
		let before = session.revision();

		assert_eq!(session.resolve(respond(&request, hits(2))), Resolution::Applied);
		assert_eq!(session.state(), SessionState::Settled);
		assert_eq!(session.result().map(SearchResult::len), Some(2));
		assert_ne!(session.revision(), before);
	}

	#[test]
	fn older_response_arriving_late_is_discarded() {
		let mut session = SearchSession::default();
		let slow = session.submit("Jo").expect("first request");
		let fast = session.submit("Joa").expect("second request");

		assert_eq!(session.resolve(respond(&fast, hits(3))), Resolution::Applied);
		assert_eq!(session.resolve(respond(&slow, hits(10))), Resolution::Stale);
		assert_eq!(session.result().map(SearchResult::len), Some(3));
		assert_eq!(session.current_query(), Some("Joa"));
	}

	#[test]
	fn failure_settles_as_empty() {
		let mut session = SearchSession::default();
		let request = session.submit("Rui").expect("request");
		let response = SearchResponse {
			token: request.token,
			query: request.query,
			outcome: Err(BackendError::Status {
				status: 500,
				method: "portal.api.pesquisar",
			}),
		};

		assert_eq!(session.resolve(response), Resolution::Applied);
		assert_eq!(session.state(), SessionState::Settled);
		assert!(session.result().is_some_and(SearchResult::is_empty));
		assert!(session.last_failure().is_some_and(|msg| msg.contains("500")));
	}

	#[test]
	fn same_query_twice_is_idempotent() {
		let mut session = SearchSession::default();
		let request = session.submit("Ana").expect("request");
		session.resolve(respond(&request, hits(1)));
		let revision = session.revision();

		assert_eq!(session.submit("Ana "), None);
		assert_eq!(session.latest_token(), 1);
		assert_eq!(session.revision(), revision);
		assert_eq!(session.state(), SessionState::Settled);
	}

	#[test]
	fn shrinking_below_minimum_clears_and_retires_token() {
		let mut session = SearchSession::default();
		let request = session.submit("Jo").expect("request");

		assert_eq!(session.submit("J"), None);
		assert_eq!(session.state(), SessionState::Idle);
		assert_eq!(session.resolve(respond(&request, hits(4))), Resolution::Stale);
		assert!(session.result().is_none());
	}

	#[test]
	fn reset_keeps_tokens_monotonic() {
		let mut session = SearchSession::default();
		let before_reset = session.submit("Ana").expect("request");
		session.reset();

		let after_reset = session.submit("Ana").expect("request after reset");
		assert!(after_reset.token > before_reset.token);
		assert_eq!(session.resolve(respond(&before_reset, hits(1))), Resolution::Stale);
	}

	#[test]
	fn clearing_a_result_changes_revision() {
		let mut session = SearchSession::default();
		let request = session.submit("Ana").expect("request");
		session.resolve(respond(&request, hits(1)));
		let revision = session.revision();

		session.submit("");
		assert!(session.result().is_none());
		assert_ne!(session.revision(), revision);
	}

	#[test]
	fn custom_minimum_length_is_respected() {
		let mut session = SearchSession::new(3);
		assert_eq!(session.submit("Jo"), None);
		assert!(session.submit("Joa").is_some());
		assert_eq!(session.min_query_len(), 3);
	}
}
