use std::sync::Arc;

use crate::error::BackendError;
use crate::types::SearchResult;

/// The single request/response contract between the search engine and the
/// directory data.
///
/// Callers only pass trimmed queries that already satisfy the minimum length.
/// Implementations are invoked from worker threads, and several calls may be
/// in flight at once.
pub trait SearchBackend: Send + Sync {
	/// Resolve `query` into the two hit categories, in backend order.
	fn search(&self, query: &str) -> Result<SearchResult, BackendError>;
}

impl<T> SearchBackend for Arc<T>
where
	T: SearchBackend + ?Sized,
{
	fn search(&self, query: &str) -> Result<SearchResult, BackendError> {
		(**self).search(query)
	}
}

impl<T> SearchBackend for Box<T>
where
	T: SearchBackend + ?Sized,
{
	fn search(&self, query: &str) -> Result<SearchResult, BackendError> {
		(**self).search(query)
	}
}
