use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use portal_search_api::{BackendError, SearchBackend};

use super::session::{SearchRequest, SearchResponse};

/// Runs backend requests off the UI thread.
///
/// Every request gets its own thread so a slow query never blocks a newer
/// one; answers may therefore arrive out of order and are matched up by the
/// session's token check. There is no network-level cancellation.
pub(crate) struct SearchWorker {
	backend: Arc<dyn SearchBackend>,
	tx: Sender<SearchResponse>,
	rx: Receiver<SearchResponse>,
}

impl SearchWorker {
	pub(crate) fn new(backend: Arc<dyn SearchBackend>) -> Self {
		let (tx, rx) = mpsc::channel();
		Self { backend, tx, rx }
	}

	/// Run `request` on its own thread. Every dispatched request produces
	/// exactly one response, even when the backend panics or the thread
	/// cannot be started.
	pub(crate) fn dispatch(&self, request: SearchRequest) {
		let backend = Arc::clone(&self.backend);
		let tx = self.tx.clone();
		let token = request.token;
		let fallback_query = request.query.clone();
		let spawned = thread::Builder::new()
			.name(format!("search-{token}"))
			.spawn(move || {
				let SearchRequest { token, query } = request;
				let outcome = panic::catch_unwind(AssertUnwindSafe(|| backend.search(&query)))
					.unwrap_or_else(|payload| {
						Err(BackendError::Aborted(format!(
							"backend panicked: {}",
							panic_message(payload.as_ref())
						)))
					});
				// The receiver is gone once the UI shuts down; nothing to report to.
				let _ = tx.send(SearchResponse {
					token,
					query,
					outcome,
				});
			});

		if let Err(err) = spawned {
			tracing::error!(error = %err, token, "failed to spawn search thread");
			let _ = self.tx.send(SearchResponse {
				token,
				query: fallback_query,
				outcome: Err(BackendError::Aborted(format!(
					"could not start search thread: {err}"
				))),
			});
		}
	}

	pub(crate) fn try_recv(&self) -> Result<SearchResponse, TryRecvError> {
		self.rx.try_recv()
	}

	#[cfg(test)]
	pub(crate) fn recv_timeout(
		&self,
		timeout: std::time::Duration,
	) -> Result<SearchResponse, mpsc::RecvTimeoutError> {
		self.rx.recv_timeout(timeout)
	}
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
	payload
		.downcast_ref::<&str>()
		.copied()
		.or_else(|| payload.downcast_ref::<String>().map(String::as_str))
		.unwrap_or("unknown panic")
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use portal_search_api::{PersonHit, SearchResult};

	use super::*;

	struct EchoBackend;

	impl SearchBackend for EchoBackend {
		fn search(&self, query: &str) -> Result<SearchResult, BackendError> {
			Ok(SearchResult::new(vec![PersonHit::new(query, "1ª Fase")], Vec::new()))
		}
	}

	#[test]
	fn responses_carry_request_token() {
		let worker = SearchWorker::new(Arc::new(EchoBackend));
		worker.dispatch(SearchRequest {
			token: 7,
			query: "Ana".to_string(),
		});

		let response = worker
			.recv_timeout(Duration::from_secs(1))
			.expect("receive response");
		assert_eq!(response.token, 7);
		assert_eq!(response.query, "Ana");
		let result = response.outcome.expect("successful search");
		assert_eq!(result.people[0].name, "Ana");
	}

	struct PanickingBackend;

	impl SearchBackend for PanickingBackend {
		fn search(&self, _query: &str) -> Result<SearchResult, BackendError> {
			panic!("index corrupted")
		}
	}

	#[test]
	fn panicking_backend_still_answers_with_error() {
		let worker = SearchWorker::new(Arc::new(PanickingBackend));
		worker.dispatch(SearchRequest {
			token: 3,
			query: "Rita".to_string(),
		});

		let response = worker
			.recv_timeout(Duration::from_secs(1))
			.expect("receive response");
		assert_eq!(response.token, 3);
		let err = response.outcome.expect_err("panic becomes an error");
		assert!(matches!(err, BackendError::Aborted(_)));
		assert!(err.to_string().contains("index corrupted"));
	}

	#[test]
	fn empty_channel_reports_empty() {
		let worker = SearchWorker::new(Arc::new(EchoBackend));
		assert!(matches!(worker.try_recv(), Err(TryRecvError::Empty)));
	}
}
