//! Flattening of the two hit categories into one keyboard-addressable list.

use std::ops::Range;

use portal_search_api::{GroupContactHit, PersonHit, SearchResult};

use super::links::PortalLinks;

/// Which section of the result list a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitCategory {
	Person,
	GroupContact,
}

/// The record a row was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
	Person(PersonHit),
	GroupContact(GroupContactHit),
}

impl Hit {
	#[must_use]
	pub fn category(&self) -> HitCategory {
		match self {
			Hit::Person(_) => HitCategory::Person,
			Hit::GroupContact(_) => HitCategory::GroupContact,
		}
	}
}

/// One addressable row: where it leads and what it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatNavItem {
	pub target_url: String,
	pub hit: Hit,
	pub category: HitCategory,
}

/// A contiguous run of rows sharing a category, used for section headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
	pub category: HitCategory,
	/// Flat indices covered by this section.
	pub range: Range<usize>,
	/// Hits the backend returned for this category, before any cap.
	pub total: usize,
}

impl Section {
	/// Rows actually rendered for this section.
	#[must_use]
	pub fn shown(&self) -> usize {
		self.range.len()
	}
}

/// The rendered projection of a [`SearchResult`].
///
/// People always precede group contacts and backend order is kept inside
/// each category. When a cap is applied it is applied here, so the flat list
/// is exactly what gets drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultView {
	items: Vec<FlatNavItem>,
	sections: Vec<Section>,
}

impl ResultView {
	#[must_use]
	pub fn build(result: &SearchResult, links: &PortalLinks, cap: Option<usize>) -> Self {
		let limit = cap.unwrap_or(usize::MAX);
		let mut items = Vec::new();
		let mut sections = Vec::new();

		let start = items.len();
		items.extend(result.people.iter().take(limit).map(|hit| FlatNavItem {
			target_url: links.person(&hit.name),
			hit: Hit::Person(hit.clone()),
			category: HitCategory::Person,
		}));
		if !result.people.is_empty() {
			sections.push(Section {
				category: HitCategory::Person,
				range: start..items.len(),
				total: result.people.len(),
			});
		}

		let start = items.len();
		items.extend(
			result
				.group_contacts
				.iter()
				.take(limit)
				.map(|hit| FlatNavItem {
					target_url: links.group(&hit.group),
					hit: Hit::GroupContact(hit.clone()),
					category: HitCategory::GroupContact,
				}),
		);
		if !result.group_contacts.is_empty() {
			sections.push(Section {
				category: HitCategory::GroupContact,
				range: start..items.len(),
				total: result.group_contacts.len(),
			});
		}

		Self { items, sections }
	}

	#[must_use]
	pub fn items(&self) -> &[FlatNavItem] {
		&self.items
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&FlatNavItem> {
		self.items.get(index)
	}

	#[must_use]
	pub fn sections(&self) -> &[Section] {
		&self.sections
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}
