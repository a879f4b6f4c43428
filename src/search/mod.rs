//! Incremental search engine shared by the inline hero search and the modal
//! palette.
//!
//! Keystrokes flow through a [`Debouncer`] into a [`SearchSession`], which
//! hands requests to a worker and accepts only responses carrying its newest
//! token. [`SearchPipeline`] wires those three together so both UI surfaces
//! drive the same machinery.

mod debounce;
mod links;
mod results;
mod session;
mod worker;

use std::sync::Arc;
use std::sync::mpsc::TryRecvError;
use std::time::{Duration, Instant};

use portal_search_api::{SearchBackend, SearchResult};

pub use debounce::Debouncer;
pub use links::PortalLinks;
pub use results::{FlatNavItem, Hit, HitCategory, ResultView, Section};
pub use session::{
	DEFAULT_MIN_QUERY_LEN, Resolution, SearchRequest, SearchResponse, SearchSession, SessionState,
};
use worker::SearchWorker;

/// Quiet period used by the modal palette.
pub const PALETTE_DEBOUNCE: Duration = Duration::from_millis(280);
/// Quiet period used by the inline hero search.
pub const HERO_DEBOUNCE: Duration = Duration::from_millis(300);

/// Debounce, session and worker bundled for one search surface.
pub struct SearchPipeline {
	debounce: Debouncer<String>,
	session: SearchSession,
	worker: SearchWorker,
}

impl SearchPipeline {
	#[must_use]
	pub fn new(backend: Arc<dyn SearchBackend>, delay: Duration, min_query_len: usize) -> Self {
		Self {
			debounce: Debouncer::new(delay),
			session: SearchSession::new(min_query_len),
			worker: SearchWorker::new(backend),
		}
	}

	/// Feed the live input text.
	pub fn set_query(&mut self, text: &str, now: Instant) {
		self.debounce.update(text.to_string(), now);
	}

	/// Release a settled query, if any, and dispatch its request.
	///
	/// Returns `true` when the displayed result changed (for example a short
	/// query cleared it).
	pub fn tick(&mut self, now: Instant) -> bool {
		let Some(query) = self.debounce.poll(now) else {
			return false;
		};
		let revision = self.session.revision();
		if let Some(request) = self.session.submit(&query) {
			self.worker.dispatch(request);
		}
		revision != self.session.revision()
	}

	/// Apply every response that has arrived since the last call.
	///
	/// Returns `true` when the displayed result changed.
	pub fn pump(&mut self) -> bool {
		let mut changed = false;
		loop {
			match self.worker.try_recv() {
				Ok(response) => {
					changed |= self.session.resolve(response) == Resolution::Applied;
				}
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
		changed
	}

	/// Drop pending input and the displayed result. In-flight requests keep
	/// running but their answers will be stale.
	pub fn reset(&mut self) {
		self.debounce.reset();
		self.session.reset();
	}

	#[must_use]
	pub fn session(&self) -> &SearchSession {
		&self.session
	}

	#[must_use]
	pub fn result(&self) -> Option<&SearchResult> {
		self.session.result()
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.session.is_pending()
	}

	/// Whether input is waiting out its quiet window.
	#[must_use]
	pub fn is_debouncing(&self) -> bool {
		self.debounce.is_pending()
	}

	#[must_use]
	pub fn revision(&self) -> u64 {
		self.session.revision()
	}

	#[must_use]
	pub fn min_query_len(&self) -> usize {
		self.session.min_query_len()
	}

	#[cfg(test)]
	pub(crate) fn wait_for_response(&mut self, timeout: Duration) -> Option<Resolution> {
		let response = self.worker.recv_timeout(timeout).ok()?;
		Some(self.session.resolve(response))
	}
}
