//! Inline search on the landing page.
//!
//! Shares the debounce and session machinery with the palette but shows at
//! most a few hits per category, has no keyboard cursor and sends Enter to
//! the portal's full search page.

use std::sync::Arc;
use std::time::{Duration, Instant};

use portal_search_api::SearchBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Position;

use super::components::{ListHitbox, hit_test};
use super::input::SearchInput;
use super::status::SearchStatus;
use crate::search::{PortalLinks, ResultView, SearchPipeline};

/// Hits shown per category by default.
pub const DEFAULT_HERO_CAP: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroAction {
	None,
	/// Give focus back to the page.
	Leave,
	Navigate(String),
}

pub struct HeroSearch {
	input: SearchInput,
	pipeline: SearchPipeline,
	links: PortalLinks,
	cap: usize,
	view: ResultView,
	view_revision: u64,
	hitboxes: Vec<ListHitbox>,
}

impl HeroSearch {
	#[must_use]
	pub fn new(
		backend: Arc<dyn SearchBackend>,
		links: PortalLinks,
		delay: Duration,
		min_query_len: usize,
		cap: usize,
	) -> Self {
		let pipeline = SearchPipeline::new(backend, delay, min_query_len);
		let view_revision = pipeline.revision();
		Self {
			input: SearchInput::default(),
			pipeline,
			links,
			cap: cap.max(1),
			view: ResultView::default(),
			view_revision,
			hitboxes: Vec::new(),
		}
	}

	/// Prefill the input as if the user had typed `query` at `now`.
	pub fn set_query(&mut self, query: &str, now: Instant) {
		self.input.set_text(query);
		self.pipeline.set_query(self.input.text(), now);
	}

	pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> HeroAction {
		match key.code {
			KeyCode::Esc => HeroAction::Leave,
			KeyCode::Enter => {
				let query = self.input.text().trim();
				if query.is_empty() {
					return HeroAction::None;
				}
				let url = self.links.full_search(query);
				tracing::info!(%url, "full search navigation");
				HeroAction::Navigate(url)
			}
			_ => {
				if self.input.input(key) {
					self.pipeline.set_query(self.input.text(), now);
				}
				HeroAction::None
			}
		}
	}

	/// Navigate to the inline row under the pointer, if any.
	pub fn click(&self, position: Position) -> HeroAction {
		if self.status() != SearchStatus::Results {
			return HeroAction::None;
		}
		hit_test(&self.hitboxes, position)
			.and_then(|index| self.view.get(index))
			.map_or(HeroAction::None, |item| {
				tracing::info!(url = %item.target_url, "hero navigation");
				HeroAction::Navigate(item.target_url.clone())
			})
	}

	pub fn tick(&mut self, now: Instant) {
		self.pipeline.tick(now);
		self.pipeline.pump();

		let revision = self.pipeline.revision();
		if revision != self.view_revision {
			self.view_revision = revision;
			self.view = self
				.pipeline
				.result()
				.map(|result| ResultView::build(result, &self.links, Some(self.cap)))
				.unwrap_or_default();
			self.hitboxes.clear();
		}
	}

	pub(crate) fn set_hitboxes(&mut self, hitboxes: Vec<ListHitbox>) {
		self.hitboxes = hitboxes;
	}

	pub fn input(&self) -> &SearchInput {
		&self.input
	}

	pub fn input_mut(&mut self) -> &mut SearchInput {
		&mut self.input
	}

	#[must_use]
	pub fn query(&self) -> &str {
		self.input.text()
	}

	pub fn view(&self) -> &ResultView {
		&self.view
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.pipeline.is_loading()
	}

	#[must_use]
	pub fn status(&self) -> SearchStatus {
		SearchStatus::of(self.input.text(), &self.pipeline, &self.view)
	}

	#[must_use]
	pub fn min_query_len(&self) -> usize {
		self.pipeline.min_query_len()
	}

	#[cfg(test)]
	pub(crate) fn pipeline_mut(&mut self) -> &mut SearchPipeline {
		&mut self.pipeline
	}
}

#[cfg(test)]
mod tests {
	use portal_search_api::{BackendError, GroupContactHit, PersonHit, SearchResult};
	use ratatui::crossterm::event::KeyModifiers;

	use super::*;
	use crate::search::HERO_DEBOUNCE;

	struct ManyBackend;

	impl SearchBackend for ManyBackend {
		fn search(&self, _query: &str) -> Result<SearchResult, BackendError> {
			Ok(SearchResult::new(
				(0..8)
					.map(|index| PersonHit::new(format!("Pessoa {index}"), "1ª Fase"))
					.collect(),
				(0..6)
					.map(|index| GroupContactHit::new(format!("C{index}"), format!("T{index}"), "2ª Fase"))
					.collect(),
			))
		}
	}

	fn hero() -> HeroSearch {
		HeroSearch::new(
			Arc::new(ManyBackend),
			PortalLinks::new("http://localhost:8000"),
			HERO_DEBOUNCE,
			2,
			DEFAULT_HERO_CAP,
		)
	}

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn results_are_capped_per_category() {
		let mut hero = hero();
		let start = Instant::now();
		hero.set_query("Ana", start);
		hero.tick(start + HERO_DEBOUNCE);
		hero.pipeline_mut().wait_for_response(Duration::from_secs(2));
		hero.tick(start + HERO_DEBOUNCE);

		assert_eq!(hero.view().len(), 10);
		assert_eq!(hero.view().sections()[0].total, 8);
		assert_eq!(hero.status(), SearchStatus::Results);
	}

	#[test]
	fn enter_opens_full_search_page() {
		let mut hero = hero();
		let now = Instant::now();
		assert_eq!(hero.handle_key(key(KeyCode::Enter), now), HeroAction::None);
		for ch in "Ana R".chars() {
			hero.handle_key(key(KeyCode::Char(ch)), now);
		}
		assert_eq!(
			hero.handle_key(key(KeyCode::Enter), now),
			HeroAction::Navigate("http://localhost:8000/portal/pesquisa/?q=Ana%20R".into())
		);
	}

	#[test]
	fn slash_is_plain_text_in_hero() {
		let mut hero = hero();
		hero.handle_key(key(KeyCode::Char('/')), Instant::now());
		assert_eq!(hero.query(), "/");
	}

	#[test]
	fn escape_leaves_input() {
		let mut hero = hero();
		assert_eq!(hero.handle_key(key(KeyCode::Esc), Instant::now()), HeroAction::Leave);
	}
}
