use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by a [`SearchBackend`](crate::SearchBackend).
///
/// The search engine treats every variant the same way (an empty settled
/// result); the distinction only matters for logs and for startup errors.
#[derive(Debug, Error)]
pub enum BackendError {
	/// The configured base URL is not an absolute http(s) URL.
	#[error("invalid portal base url '{url}': {reason}")]
	InvalidBaseUrl { url: String, reason: String },

	/// The request could not be sent or the response body could not be read.
	#[error("request to portal failed: {0}")]
	Transport(#[from] reqwest::Error),

	/// The portal answered with a non-success status.
	#[error("API error {status}: {method}")]
	Status { status: u16, method: &'static str },

	/// The response body was not the expected JSON shape.
	#[error("unexpected response payload: {0}")]
	Decode(#[from] serde_json::Error),

	/// The request never produced an answer, for example because the backend
	/// panicked or its thread could not start.
	#[error("search aborted: {0}")]
	Aborted(String),

	/// A fixture file could not be read.
	#[error("failed to read fixture {}: {source}", path.display())]
	FixtureIo {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// A fixture file did not contain a directory snapshot.
	#[error("failed to parse fixture {}: {source}", path.display())]
	FixtureParse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}
