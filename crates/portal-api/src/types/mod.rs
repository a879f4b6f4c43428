mod hit;
mod phase;

pub use hit::{GroupContactHit, PersonHit, SearchResult};
pub use phase::Phase;

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as a missing field.
///
/// The portal serialises SQL `NULL` columns as `null`, so every optional
/// string and both hit categories pass through here.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
