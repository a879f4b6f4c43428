use std::cmp::Ordering;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::backend::SearchBackend;
use crate::error::BackendError;
use crate::types::{GroupContactHit, PersonHit, SearchResult, null_as_default};

const MIN_QUERY_CHARS: usize = 2;
const NAME_MATCH_LIMIT: usize = 20;
const GUARDIAN_MATCH_LIMIT: usize = 10;
const CONTACT_MATCH_LIMIT: usize = 10;

/// A person row as exported from the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
	pub name: String,
	#[serde(rename = "fase", default, deserialize_with = "null_as_default")]
	pub phase_label: String,
	#[serde(rename = "turma", default, deserialize_with = "null_as_default")]
	pub group: Option<String>,
	#[serde(rename = "sexo", default, deserialize_with = "null_as_default")]
	pub sex: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub status: Option<String>,
	#[serde(rename = "encarregado", default, deserialize_with = "null_as_default")]
	pub guardian: Option<String>,
}

/// A group row as exported from the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
	pub name: String,
	#[serde(rename = "fase", default, deserialize_with = "null_as_default")]
	pub phase_label: String,
	#[serde(rename = "local", default, deserialize_with = "null_as_default")]
	pub location: Option<String>,
	#[serde(rename = "dia", default, deserialize_with = "null_as_default")]
	pub day: Option<String>,
	#[serde(rename = "hora", default, deserialize_with = "null_as_default")]
	pub time: Option<String>,
	#[serde(rename = "catequista", default, deserialize_with = "null_as_default")]
	pub catechist: Option<String>,
	#[serde(rename = "catequista_adj", default, deserialize_with = "null_as_default")]
	pub assistant: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub status: Option<String>,
}

/// Everything the fixture backend knows about the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySnapshot {
	#[serde(rename = "catecumenos", default, deserialize_with = "null_as_default")]
	pub people: Vec<PersonRecord>,
	#[serde(rename = "turmas", default, deserialize_with = "null_as_default")]
	pub groups: Vec<GroupRecord>,
}

/// Answers searches from a [`DirectorySnapshot`] with the portal's own rules:
/// case-insensitive substring matches, name matches before guardian matches,
/// and the same per-category limits.
#[derive(Debug, Clone, Default)]
pub struct FixtureBackend {
	snapshot: DirectorySnapshot,
	latency: Duration,
}

impl FixtureBackend {
	#[must_use]
	pub fn new(snapshot: DirectorySnapshot) -> Self {
		Self {
			snapshot,
			latency: Duration::ZERO,
		}
	}

	/// Load a snapshot from a JSON file.
	///
	/// # Errors
	///
	/// Returns [`BackendError::FixtureIo`] or [`BackendError::FixtureParse`].
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BackendError> {
		let path = path.as_ref();
		let raw = fs::read_to_string(path).map_err(|source| BackendError::FixtureIo {
			path: PathBuf::from(path),
			source,
		})?;
		let snapshot =
			serde_json::from_str(&raw).map_err(|source| BackendError::FixtureParse {
				path: PathBuf::from(path),
				source,
			})?;
		Ok(Self::new(snapshot))
	}

	/// Delay every answer by `latency` to mimic a remote round trip.
	#[must_use]
	pub fn with_latency(mut self, latency: Duration) -> Self {
		self.latency = latency;
		self
	}

	#[must_use]
	pub fn snapshot(&self) -> &DirectorySnapshot {
		&self.snapshot
	}

	fn group(&self, name: Option<&str>) -> Option<&GroupRecord> {
		let name = name?;
		self.snapshot.groups.iter().find(|group| group.name == name)
	}

	fn person_hit(&self, record: &PersonRecord) -> PersonHit {
		let group = self.group(record.group.as_deref());
		PersonHit {
			name: record.name.clone(),
			phase_label: record.phase_label.clone(),
			group: record.group.clone(),
			sex: record.sex.clone(),
			status: record.status.clone(),
			guardian: record.guardian.clone(),
			location: group.and_then(|group| group.location.clone()),
			day: group.and_then(|group| group.day.clone()),
			time: group.and_then(|group| group.time.clone()),
			catechist: group.and_then(|group| group.catechist.clone()),
			assistant: group.and_then(|group| group.assistant.clone()),
			found_via: None,
		}
	}

	fn people_matching(&self, needle: &str) -> Vec<PersonHit> {
		let mut by_name: Vec<&PersonRecord> = self
			.snapshot
			.people
			.iter()
			.filter(|person| contains_folded(&person.name, needle))
			.collect();
		by_name.sort_by(|a, b| collate(&a.name, &b.name));
		by_name.truncate(NAME_MATCH_LIMIT);

		let mut by_guardian: Vec<&PersonRecord> = self
			.snapshot
			.people
			.iter()
			.filter(|person| {
				person
					.guardian
					.as_deref()
					.is_some_and(|guardian| contains_folded(guardian, needle))
			})
			.collect();
		by_guardian.sort_by(|a, b| collate(&a.name, &b.name));
		by_guardian.truncate(GUARDIAN_MATCH_LIMIT);

		let seen: HashSet<&str> = by_name.iter().map(|person| person.name.as_str()).collect();
		let mut hits: Vec<PersonHit> = by_name
			.iter()
			.map(|record| self.person_hit(record))
			.collect();
		for record in by_guardian {
			if seen.contains(record.name.as_str()) {
				continue;
			}
			let mut hit = self.person_hit(record);
			hit.mark_matched_via_guardian();
			hits.push(hit);
		}
		hits
	}

	fn contacts_matching(&self, needle: &str) -> Vec<GroupContactHit> {
		let mut groups: Vec<&GroupRecord> = self
			.snapshot
			.groups
			.iter()
			.filter(|group| {
				[group.catechist.as_deref(), group.assistant.as_deref()]
					.into_iter()
					.flatten()
					.any(|name| contains_folded(name, needle))
			})
			.collect();
		groups.sort_by(|a, b| {
			collate(
				a.catechist.as_deref().unwrap_or_default(),
				b.catechist.as_deref().unwrap_or_default(),
			)
		});
		groups.truncate(CONTACT_MATCH_LIMIT);

		groups
			.into_iter()
			.map(|group| GroupContactHit {
				catechist: group.catechist.clone(),
				assistant: group.assistant.clone(),
				group: group.name.clone(),
				phase_label: group.phase_label.clone(),
				location: group.location.clone(),
				day: group.day.clone(),
				time: group.time.clone(),
				status: group.status.clone(),
			})
			.collect()
	}
}

impl SearchBackend for FixtureBackend {
	fn search(&self, query: &str) -> Result<SearchResult, BackendError> {
		if !self.latency.is_zero() {
			thread::sleep(self.latency);
		}

		let query = query.trim();
		if query.chars().count() < MIN_QUERY_CHARS {
			return Ok(SearchResult::default());
		}

		let needle = query.to_lowercase();
		Ok(SearchResult::new(
			self.people_matching(&needle),
			self.contacts_matching(&needle),
		))
	}
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
	haystack.to_lowercase().contains(folded_needle)
}

fn collate(a: &str, b: &str) -> Ordering {
	a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}
