use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::Deserialize;

use crate::backend::SearchBackend;
use crate::error::BackendError;
use crate::types::{SearchResult, null_as_default};

/// Whitelisted portal method that performs the global search.
pub const SEARCH_METHOD: &str = "portal.api.pesquisar";

/// Response wrapper used by every portal API method.
#[derive(Debug, Deserialize)]
struct Envelope {
	#[serde(default, deserialize_with = "null_as_default")]
	message: SearchResult,
}

/// Blocking HTTP client for the portal's public search endpoint.
#[derive(Debug, Clone)]
pub struct HttpBackend {
	client: Client,
	endpoint: Url,
}

impl HttpBackend {
	/// Build a backend rooted at `base_url` (for example
	/// `https://portal.example.org`).
	///
	/// # Errors
	///
	/// Returns [`BackendError::InvalidBaseUrl`] if the URL does not parse or is
	/// not http(s), and [`BackendError::Transport`] if the client cannot be
	/// constructed.
	pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
		let endpoint = endpoint_for(base_url)?;
		let client = Client::builder().timeout(timeout).build()?;
		Ok(Self { client, endpoint })
	}

	#[must_use]
	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}
}

impl SearchBackend for HttpBackend {
	fn search(&self, query: &str) -> Result<SearchResult, BackendError> {
		tracing::debug!(endpoint = %self.endpoint, query, "querying portal");
		let response = self
			.client
			.get(self.endpoint.clone())
			.query(&[("query", query)])
			.header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
			.send()?;

		let status = response.status();
		if !status.is_success() {
			return Err(BackendError::Status {
				status: status.as_u16(),
				method: SEARCH_METHOD,
			});
		}

		let body = response.bytes()?;
		let envelope: Envelope = serde_json::from_slice(&body)?;
		Ok(envelope.message)
	}
}

fn endpoint_for(base_url: &str) -> Result<Url, BackendError> {
	let invalid = |reason: String| BackendError::InvalidBaseUrl {
		url: base_url.to_string(),
		reason,
	};

	let base = Url::parse(base_url.trim()).map_err(|err| invalid(err.to_string()))?;
	if !matches!(base.scheme(), "http" | "https") {
		return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
	}

	let path = format!(
		"{}/api/method/{SEARCH_METHOD}",
		base.path().trim_end_matches('/')
	);
	let mut endpoint = base;
	endpoint.set_path(&path);
	endpoint.set_query(None);
	Ok(endpoint)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn endpoint_appends_method_path() {
		let url = endpoint_for("https://portal.example.org").expect("valid");
		assert_eq!(
			url.as_str(),
			"https://portal.example.org/api/method/portal.api.pesquisar"
		);
	}

	#[test]
	fn endpoint_keeps_base_path_prefix() {
		let url = endpoint_for("http://localhost:8000/site/").expect("valid");
		assert_eq!(
			url.as_str(),
			"http://localhost:8000/site/api/method/portal.api.pesquisar"
		);
	}

	#[test]
	fn non_http_urls_are_rejected() {
		let err = endpoint_for("ftp://portal.example.org").unwrap_err();
		assert!(matches!(err, BackendError::InvalidBaseUrl { .. }));
		assert!(err.to_string().contains("unsupported scheme"));

		assert!(endpoint_for("not a url").is_err());
	}

	#[test]
	fn envelope_with_null_message_is_empty() {
		let envelope: Envelope = serde_json::from_str(r#"{ "message": null }"#).expect("parse");
		assert!(envelope.message.is_empty());
	}

	#[test]
	fn status_error_names_the_method() {
		let err = BackendError::Status {
			status: 502,
			method: SEARCH_METHOD,
		};
		assert_eq!(err.to_string(), "API error 502: portal.api.pesquisar");
	}
}
