use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left untouched by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

const PERSON_PAGE: &str = "/portal/catecumeno/";
const GROUP_PAGE: &str = "/portal/turma/";
const FULL_SEARCH_PAGE: &str = "/portal/pesquisa/";

/// Builds the portal URLs that search hits navigate to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortalLinks {
	base_url: String,
}

impl PortalLinks {
	/// `base_url` is prepended verbatim (minus trailing slashes); an empty base
	/// yields site-relative links.
	#[must_use]
	pub fn new(base_url: impl Into<String>) -> Self {
		let base_url = base_url.into().trim().trim_end_matches('/').to_string();
		Self { base_url }
	}

	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Detail page of a person, keyed by their unique name.
	#[must_use]
	pub fn person(&self, name: &str) -> String {
		self.page(PERSON_PAGE, "nome", name)
	}

	/// Detail page of a group, keyed by the group identity.
	#[must_use]
	pub fn group(&self, group: &str) -> String {
		self.page(GROUP_PAGE, "nome", group)
	}

	/// The portal's full search page, prefilled with `query`.
	#[must_use]
	pub fn full_search(&self, query: &str) -> String {
		self.page(FULL_SEARCH_PAGE, "q", query.trim())
	}

	fn page(&self, path: &str, param: &str, value: &str) -> String {
		format!(
			"{}{path}?{param}={}",
			self.base_url,
			utf8_percent_encode(value, COMPONENT)
		)
	}
}
