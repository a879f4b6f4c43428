//! Search contract shared between the portal search engine and its data
//! collaborators.
//!
//! The engine only ever asks one question, "what matches this query?", through
//! [`SearchBackend`]. Two implementations ship here: [`HttpBackend`] talks to
//! the portal's public API and [`FixtureBackend`] answers from a local JSON
//! export using the same matching rules.

pub mod backend;
pub mod error;
pub mod fixture;
pub mod http;
pub mod types;

pub use backend::SearchBackend;
pub use error::BackendError;
pub use fixture::{DirectorySnapshot, FixtureBackend, GroupRecord, PersonRecord};
pub use http::{HttpBackend, SEARCH_METHOD};
pub use types::{GroupContactHit, Phase, PersonHit, SearchResult};
