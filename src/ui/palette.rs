//! The modal command palette: input, live results and keyboard navigation.

use std::sync::Arc;
use std::time::{Duration, Instant};

use portal_search_api::SearchBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Position;

use super::components::{ListHitbox, ListLine, hit_test, item_span};
use super::input::SearchInput;
use super::navigation::{NavKey, NavOutcome, NavigationCursor, ScrollViewport};
use super::overlay::{OpenTrigger, open_trigger_for};
use super::status::SearchStatus;
use crate::search::{PortalLinks, ResultView, SearchPipeline};

/// What the overlay should do after the palette handled an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteAction {
	None,
	Dismiss,
	Navigate(String),
}

pub struct PaletteSession {
	input: SearchInput,
	pipeline: SearchPipeline,
	links: PortalLinks,
	view: ResultView,
	view_revision: u64,
	cursor: NavigationCursor,
	scroll: ScrollViewport,
	hitboxes: Vec<ListHitbox>,
}

impl PaletteSession {
	#[must_use]
	pub fn new(
		backend: Arc<dyn SearchBackend>,
		links: PortalLinks,
		delay: Duration,
		min_query_len: usize,
	) -> Self {
		let pipeline = SearchPipeline::new(backend, delay, min_query_len);
		let view_revision = pipeline.revision();
		Self {
			input: SearchInput::default(),
			pipeline,
			links,
			view: ResultView::default(),
			view_revision,
			cursor: NavigationCursor::default(),
			scroll: ScrollViewport::default(),
			hitboxes: Vec::new(),
		}
	}

	pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> PaletteAction {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let nav = match key.code {
			KeyCode::Esc => Some(NavKey::Escape),
			KeyCode::Down => Some(NavKey::Down),
			KeyCode::Up => Some(NavKey::Up),
			KeyCode::Enter => Some(NavKey::Enter),
			KeyCode::Char('n') if ctrl => Some(NavKey::Down),
			KeyCode::Char('p') if ctrl => Some(NavKey::Up),
			_ => None,
		};

		if let Some(nav) = nav {
			return match self.cursor.apply(nav, self.visible_len()) {
				NavOutcome::Navigate(index) => self.navigate(index),
				NavOutcome::Dismiss => PaletteAction::Dismiss,
				NavOutcome::Moved | NavOutcome::Unchanged => PaletteAction::None,
			};
		}

		if ctrl && key.code == KeyCode::Char('u') {
			self.clear_query();
			return PaletteAction::None;
		}

		// Already open: the chord must not reach the textarea, where Ctrl+K
		// kills to end of line.
		if open_trigger_for(&key, true) == Some(OpenTrigger::Chord) {
			return PaletteAction::None;
		}

		if self.input.input(key) {
			self.pipeline.set_query(self.input.text(), now);
			if self.status() != SearchStatus::Results {
				self.cursor.reset();
			}
		}
		PaletteAction::None
	}

	/// Advance debounce and apply arrived responses.
	pub fn tick(&mut self, now: Instant) {
		self.pipeline.tick(now);
		self.pipeline.pump();
		self.sync_view();
	}

	/// Empty the query and the displayed results.
	pub fn clear_query(&mut self) {
		self.input.clear();
		self.pipeline.reset();
		self.sync_view();
	}

	/// Back to the state of a freshly opened palette.
	pub fn reset(&mut self) {
		self.input.clear();
		self.pipeline.reset();
		self.view = ResultView::default();
		self.view_revision = self.pipeline.revision();
		self.cursor.reset();
		self.scroll.reset();
		self.hitboxes.clear();
	}

	/// Select the row under the pointer.
	pub fn hover(&mut self, position: Position) -> bool {
		match hit_test(&self.hitboxes, position) {
			Some(index) => self.cursor.hover(index, self.visible_len()),
			None => false,
		}
	}

	/// Navigate to the row under the pointer, if any.
	pub fn click(&mut self, position: Position) -> PaletteAction {
		match hit_test(&self.hitboxes, position) {
			Some(index) if index < self.visible_len() => {
				self.cursor.hover(index, self.visible_len());
				self.navigate(index)
			}
			Some(_) => PaletteAction::None,
			None => PaletteAction::None,
		}
	}

	/// Keep the active row inside a viewport `height` lines tall.
	pub(crate) fn scroll_to_active(&mut self, lines: &[ListLine], height: usize) {
		let active = self.cursor.active();
		let span = active
			.and_then(|index| item_span(lines, index))
			.unwrap_or(0..0);
		self.scroll.reveal(active, span, height);
		self.scroll.clamp(lines.len(), height);
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
	pub fn active(&self) -> Option<usize> {
		self.cursor.active()
	}

	#[must_use]
	pub fn scroll_offset(&self) -> usize {
		self.scroll.offset()
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

	/// Rows the user can currently see. The previous result stays in
	/// `view` until the next one settles, but it is hidden while the input
	/// is empty or too short.
	fn visible_len(&self) -> usize {
		match self.status() {
			SearchStatus::Results => self.view.len(),
			_ => 0,
		}
	}

	fn navigate(&self, index: usize) -> PaletteAction {
		match self.view.get(index) {
			Some(item) => {
				tracing::info!(url = %item.target_url, "palette navigation");
				PaletteAction::Navigate(item.target_url.clone())
			}
			None => PaletteAction::None,
		}
	}

	fn sync_view(&mut self) {
		let revision = self.pipeline.revision();
		if revision == self.view_revision {
			return;
		}
		self.view_revision = revision;
		self.view = self
			.pipeline
			.result()
			.map(|result| ResultView::build(result, &self.links, None))
			.unwrap_or_default();
		self.cursor.reset();
		self.scroll.reset();
		self.hitboxes.clear();
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use portal_search_api::{BackendError, GroupContactHit, PersonHit, SearchResult};

	use super::*;
	use crate::search::PALETTE_DEBOUNCE;

	const WAIT: Duration = Duration::from_secs(2);

	#[derive(Default)]
	struct CountingBackend {
		calls: Mutex<Vec<String>>,
	}

	impl SearchBackend for CountingBackend {
		fn search(&self, query: &str) -> Result<SearchResult, BackendError> {
			self.calls.lock().expect("calls lock").push(query.to_string());
			Ok(SearchResult::new(
				vec![
					PersonHit::new(format!("{query} Silva"), "1ª Fase"),
					PersonHit::new(format!("{query} Costa"), "2ª Fase"),
				],
				vec![
					GroupContactHit::new("Rui", "T1", "1ª Fase"),
					GroupContactHit::new("Eva", "T2", "3ª Fase"),
				],
			))
		}
	}

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn type_text(palette: &mut PaletteSession, text: &str, now: Instant) {
		for ch in text.chars() {
			palette.handle_key(key(KeyCode::Char(ch)), now);
		}
	}

	fn settle(palette: &mut PaletteSession, now: Instant) {
		palette.tick(now);
		palette.pipeline_mut().wait_for_response(WAIT);
		palette.tick(now);
	}

	fn palette(backend: Arc<CountingBackend>) -> PaletteSession {
		PaletteSession::new(backend, PortalLinks::new(""), PALETTE_DEBOUNCE, 2)
	}

	#[test]
	fn arrow_keys_walk_rows_and_enter_navigates() {
		let mut palette = palette(Arc::new(CountingBackend::default()));
		let start = Instant::now();
		type_text(&mut palette, "Ana", start);
		settle(&mut palette, start + PALETTE_DEBOUNCE);
		assert_eq!(palette.view().len(), 4);
		assert_eq!(palette.status(), SearchStatus::Results);

		for _ in 0..6 {
			palette.handle_key(key(KeyCode::Down), start);
		}
		assert_eq!(palette.active(), Some(3));
		assert_eq!(
			palette.handle_key(key(KeyCode::Enter), start),
			PaletteAction::Navigate("/portal/turma/?nome=T2".into())
		);
	}

	#[test]
	fn enter_without_selection_keeps_palette_open() {
		let mut palette = palette(Arc::new(CountingBackend::default()));
		let start = Instant::now();
		type_text(&mut palette, "Ana", start);
		settle(&mut palette, start + PALETTE_DEBOUNCE);
		assert_eq!(palette.handle_key(key(KeyCode::Enter), start), PaletteAction::None);
		assert_eq!(palette.query(), "Ana");
	}

	#[test]
	fn escape_dismisses() {
		let mut palette = palette(Arc::new(CountingBackend::default()));
		assert_eq!(
			palette.handle_key(key(KeyCode::Esc), Instant::now()),
			PaletteAction::Dismiss
		);
	}

	#[test]
	fn retyping_same_query_keeps_cursor_and_skips_request() {
		let backend = Arc::new(CountingBackend::default());
		let mut palette = palette(Arc::clone(&backend));
		let start = Instant::now();
		type_text(&mut palette, "Ana", start);
		settle(&mut palette, start + PALETTE_DEBOUNCE);
		palette.handle_key(key(KeyCode::Down), start);

		let later = start + Duration::from_secs(1);
		palette.handle_key(key(KeyCode::Char('s')), later);
		palette.handle_key(key(KeyCode::Backspace), later);
		palette.tick(later + PALETTE_DEBOUNCE);

		assert_eq!(palette.active(), Some(0));
		assert_eq!(backend.calls.lock().expect("calls lock").len(), 1);
	}

	#[test]
	fn erasing_query_hides_rows_from_navigation() {
		let mut palette = palette(Arc::new(CountingBackend::default()));
		let start = Instant::now();
		type_text(&mut palette, "Ana", start);
		settle(&mut palette, start + PALETTE_DEBOUNCE);
		palette.handle_key(key(KeyCode::Down), start);
		assert_eq!(palette.active(), Some(0));

		for _ in 0..3 {
			palette.handle_key(key(KeyCode::Backspace), start);
		}
		assert_eq!(palette.query(), "");
		assert_eq!(palette.status(), SearchStatus::Prompt);
		assert_eq!(palette.view().len(), 4);
		assert_eq!(palette.active(), None);
		assert_eq!(palette.handle_key(key(KeyCode::Enter), start), PaletteAction::None);

		palette.handle_key(key(KeyCode::Char('A')), start);
		assert_eq!(palette.status(), SearchStatus::TooShort);
		palette.handle_key(key(KeyCode::Down), start);
		assert_eq!(palette.active(), None);
		assert_eq!(palette.handle_key(key(KeyCode::Enter), start), PaletteAction::None);
	}

	#[test]
	fn chord_while_open_leaves_query_intact() {
		let mut palette = palette(Arc::new(CountingBackend::default()));
		let now = Instant::now();
		type_text(&mut palette, "Ana Rita", now);
		for _ in 0..4 {
			palette.handle_key(key(KeyCode::Left), now);
		}
		let action = palette.handle_key(
			KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL),
			now,
		);
		assert_eq!(action, PaletteAction::None);
		assert_eq!(palette.query(), "Ana Rita");
	}

	#[test]
	fn ctrl_u_clears_query_and_results() {
		let mut palette = palette(Arc::new(CountingBackend::default()));
		let start = Instant::now();
		type_text(&mut palette, "Ana", start);
		settle(&mut palette, start + PALETTE_DEBOUNCE);

		palette.handle_key(
			KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
			start,
		);
		assert_eq!(palette.query(), "");
		assert!(palette.view().is_empty());
		assert_eq!(palette.status(), SearchStatus::Prompt);
	}

	#[test]
	fn short_query_reports_too_short() {
		let mut palette = palette(Arc::new(CountingBackend::default()));
		let start = Instant::now();
		type_text(&mut palette, "A", start);
		palette.tick(start + PALETTE_DEBOUNCE);
		assert_eq!(palette.status(), SearchStatus::TooShort);
		assert!(!palette.is_loading());
	}

	#[test]
	fn reset_returns_to_fresh_state() {
		let mut palette = palette(Arc::new(CountingBackend::default()));
		let start = Instant::now();
		type_text(&mut palette, "Ana", start);
		settle(&mut palette, start + PALETTE_DEBOUNCE);
		palette.handle_key(key(KeyCode::Down), start);

		palette.reset();
		assert_eq!(palette.query(), "");
		assert!(palette.view().is_empty());
		assert_eq!(palette.active(), None);
	}
}
