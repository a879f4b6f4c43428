use std::sync::Arc;
use std::time::{Duration, Instant};

use portal_search_api::SearchBackend;
use ratatui::crossterm::event::{
	Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use throbber_widgets_tui::ThrobberState;

use super::config::UiConfig;
use super::hero::{DEFAULT_HERO_CAP, HeroAction, HeroSearch};
use super::overlay::{OverlayAction, OverlayController, open_trigger_for};
use super::palette::PaletteSession;
use super::style::Theme;
use super::trigger::SearchTrigger;
use crate::outcome::{NavigationRequest, SearchOutcome};
use crate::search::{DEFAULT_MIN_QUERY_LEN, HERO_DEBOUNCE, PALETTE_DEBOUNCE, PortalLinks};

/// Which widget receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	Page,
	Hero,
	Palette,
}

/// Timing and size knobs for both search surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
	pub palette_debounce: Duration,
	pub hero_debounce: Duration,
	pub min_query_len: usize,
	pub hero_cap: usize,
}

impl Default for SearchOptions {
	fn default() -> Self {
		Self {
			palette_debounce: PALETTE_DEBOUNCE,
			hero_debounce: HERO_DEBOUNCE,
			min_query_len: DEFAULT_MIN_QUERY_LEN,
			hero_cap: DEFAULT_HERO_CAP,
		}
	}
}

/// Terminal rendition of the portal landing page.
pub struct App {
	pub(crate) focus: Focus,
	pub(crate) hero: HeroSearch,
	pub(crate) overlay: OverlayController,
	trigger: SearchTrigger,
	pub(crate) theme: Theme,
	pub(crate) ui: UiConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) hero_input_area: Option<Rect>,
	pub(crate) button_area: Option<Rect>,
}

impl App {
	#[must_use]
	pub fn new(
		backend: Arc<dyn SearchBackend>,
		links: PortalLinks,
		options: SearchOptions,
		ui: UiConfig,
		theme: Theme,
	) -> Self {
		let hero = HeroSearch::new(
			Arc::clone(&backend),
			links.clone(),
			options.hero_debounce,
			options.min_query_len,
			options.hero_cap,
		);
		let palette = PaletteSession::new(
			backend,
			links,
			options.palette_debounce,
			options.min_query_len,
		);
		let overlay = OverlayController::new(palette);
		let trigger = overlay.trigger();
		Self {
			focus: Focus::Page,
			hero,
			overlay,
			trigger,
			theme,
			ui,
			throbber_state: ThrobberState::default(),
			hero_input_area: None,
			button_area: None,
		}
	}

	/// Prefill the hero search and give it focus.
	pub fn set_initial_query(&mut self, query: &str, now: Instant) {
		if query.trim().is_empty() {
			return;
		}
		self.hero.set_query(query, now);
		self.set_focus(Focus::Hero);
	}

	/// A handle for asking the palette to open.
	#[must_use]
	pub fn trigger(&self) -> SearchTrigger {
		self.trigger.clone()
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	pub fn overlay(&self) -> &OverlayController {
		&self.overlay
	}

	pub fn hero(&self) -> &HeroSearch {
		&self.hero
	}

	/// Advance timers and apply background results. Call once per frame
	/// before drawing.
	pub fn tick(&mut self, now: Instant) {
		self.overlay.pump_requests();
		self.overlay.tick(now);
		self.hero.tick(now);
	}

	/// Called after a frame has been painted.
	pub fn after_paint(&mut self) {
		if self.overlay.take_focus_request() {
			self.set_focus(Focus::Palette);
		}
	}

	/// Handle one terminal event. Returns an outcome when the session ends.
	pub fn handle_event(&mut self, event: Event, now: Instant) -> Option<SearchOutcome> {
		match event {
			Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, now),
			Event::Mouse(mouse) => self.handle_mouse(mouse),
			_ => None,
		}
	}

	fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<SearchOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		if ctrl && key.code == KeyCode::Char('c') {
			return Some(SearchOutcome::cancelled(self.current_query()));
		}

		if self.overlay.is_open() {
			if self.focus != Focus::Palette {
				// Focus has not reached the palette yet; only allow backing out.
				if key.code == KeyCode::Esc {
					self.close_overlay();
				}
				return None;
			}
			let query = self.overlay.palette().query().to_string();
			return match self.overlay.handle_key(key, now) {
				OverlayAction::None => None,
				OverlayAction::Closed => {
					self.set_focus(Focus::Page);
					None
				}
				OverlayAction::Navigate(request) => Some(SearchOutcome::navigate(request, query)),
			};
		}

		if let Some(trigger) = open_trigger_for(&key, self.focus == Focus::Hero) {
			self.overlay.open(trigger);
			return None;
		}

		match self.focus {
			Focus::Hero => self.handle_hero_key(key, now),
			Focus::Page | Focus::Palette => self.handle_page_key(key),
		}
	}

	fn handle_hero_key(&mut self, key: KeyEvent, now: Instant) -> Option<SearchOutcome> {
		if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
			self.set_focus(Focus::Page);
			return None;
		}
		match self.hero.handle_key(key, now) {
			HeroAction::None => None,
			HeroAction::Leave => {
				self.set_focus(Focus::Page);
				None
			}
			HeroAction::Navigate(url) => {
				Some(SearchOutcome::navigate(NavigationRequest::new(url), self.hero.query()))
			}
		}
	}

	fn handle_page_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
		match key.code {
			KeyCode::Tab | KeyCode::BackTab | KeyCode::Enter => {
				self.set_focus(Focus::Hero);
				None
			}
			KeyCode::Char('s') => {
				self.trigger.request_open();
				None
			}
			KeyCode::Char('q') | KeyCode::Esc => Some(SearchOutcome::cancelled(self.hero.query())),
			_ => None,
		}
	}

	fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<SearchOutcome> {
		if self.overlay.is_open() {
			let query = self.overlay.palette().query().to_string();
			return match self.overlay.handle_mouse(mouse) {
				OverlayAction::None => None,
				OverlayAction::Closed => {
					self.set_focus(Focus::Page);
					None
				}
				OverlayAction::Navigate(request) => Some(SearchOutcome::navigate(request, query)),
			};
		}

		if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
			return None;
		}
		let position = Position::new(mouse.column, mouse.row);
		if self.button_area.is_some_and(|area| area.contains(position)) {
			self.trigger.request_open();
			return None;
		}
		if self.hero_input_area.is_some_and(|area| area.contains(position)) {
			self.set_focus(Focus::Hero);
			return None;
		}
		match self.hero.click(position) {
			HeroAction::Navigate(url) => {
				Some(SearchOutcome::navigate(NavigationRequest::new(url), self.hero.query()))
			}
			HeroAction::None | HeroAction::Leave => None,
		}
	}

	fn close_overlay(&mut self) {
		self.overlay.close();
		self.set_focus(Focus::Page);
	}

	fn set_focus(&mut self, focus: Focus) {
		self.focus = focus;
		self.hero.input_mut().set_focused(focus == Focus::Hero);
	}

	fn current_query(&self) -> String {
		match self.focus {
			Focus::Palette => self.overlay.palette().query().to_string(),
			Focus::Page | Focus::Hero => self.hero.query().to_string(),
		}
	}
}
