//! Open/close lifecycle of the modal palette.
//!
//! The controller is the only place that flips [`OverlayState`]. Opening
//! and closing both reset the palette, so a reopened palette never shows a
//! previous query or answers to requests issued before it closed.

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::palette::{PaletteAction, PaletteSession};
use super::trigger::{self, OpenRequests, SearchTrigger};
use crate::outcome::NavigationRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
	Closed,
	Open,
}

/// Why the overlay opened, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTrigger {
	/// Ctrl+K or Super+K.
	Chord,
	/// `/` typed outside a text input.
	Slash,
	/// A [`SearchTrigger`] request.
	Requested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayAction {
	None,
	Closed,
	Navigate(NavigationRequest),
}

/// Classify `key` as an open shortcut.
///
/// `/` only counts when focus is outside every text input, so it can still
/// be typed into a search field.
#[must_use]
pub fn open_trigger_for(key: &KeyEvent, in_text_input: bool) -> Option<OpenTrigger> {
	let chord = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);
	match key.code {
		KeyCode::Char('k' | 'K') if chord => Some(OpenTrigger::Chord),
		KeyCode::Char('/')
			if !in_text_input && key.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
		{
			Some(OpenTrigger::Slash)
		}
		_ => None,
	}
}

pub struct OverlayController {
	state: OverlayState,
	palette: PaletteSession,
	requests: OpenRequests,
	trigger: SearchTrigger,
	focus_pending: bool,
	bounds: Option<Rect>,
}

impl OverlayController {
	#[must_use]
	pub fn new(palette: PaletteSession) -> Self {
		let (trigger, requests) = trigger::channel();
		Self {
			state: OverlayState::Closed,
			palette,
			requests,
			trigger,
			focus_pending: false,
			bounds: None,
		}
	}

	/// A handle any widget can use to ask for the palette.
	#[must_use]
	pub fn trigger(&self) -> SearchTrigger {
		self.trigger.clone()
	}

	#[must_use]
	pub fn state(&self) -> OverlayState {
		self.state
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.state == OverlayState::Open
	}

	/// Open the palette. Does nothing when it is already open.
	pub fn open(&mut self, trigger: OpenTrigger) -> bool {
		if self.is_open() {
			return false;
		}
		self.palette.reset();
		self.state = OverlayState::Open;
		self.focus_pending = true;
		self.bounds = None;
		tracing::debug!(?trigger, "palette opened");
		true
	}

	pub fn close(&mut self) -> bool {
		if !self.is_open() {
			return false;
		}
		self.palette.reset();
		self.state = OverlayState::Closed;
		self.focus_pending = false;
		self.bounds = None;
		self.palette.input_mut().set_focused(false);
		tracing::debug!("palette closed");
		true
	}

	/// Open if any [`SearchTrigger`] asked since the last call.
	pub fn pump_requests(&mut self) -> bool {
		if self.requests.drain() > 0 {
			return self.open(OpenTrigger::Requested);
		}
		false
	}

	/// Advance the palette's search while open.
	pub fn tick(&mut self, now: Instant) {
		if self.is_open() {
			self.palette.tick(now);
		}
	}

	/// Route a key to the open palette.
	pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> OverlayAction {
		if !self.is_open() {
			return OverlayAction::None;
		}
		match self.palette.handle_key(key, now) {
			PaletteAction::None => OverlayAction::None,
			PaletteAction::Dismiss => {
				self.close();
				OverlayAction::Closed
			}
			PaletteAction::Navigate(url) => {
				self.close();
				OverlayAction::Navigate(NavigationRequest::new(url))
			}
		}
	}

	/// Route a pointer event to the open palette.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) -> OverlayAction {
		if !self.is_open() {
			return OverlayAction::None;
		}
		let position = Position::new(mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::Moved => {
				self.palette.hover(position);
				OverlayAction::None
			}
			MouseEventKind::Down(button) => {
				let inside = self.bounds.is_some_and(|bounds| bounds.contains(position));
				if !inside {
					self.close();
					return OverlayAction::Closed;
				}
				if button != MouseButton::Left {
					return OverlayAction::None;
				}
				match self.palette.click(position) {
					PaletteAction::Navigate(url) => {
						self.close();
						OverlayAction::Navigate(NavigationRequest::new(url))
					}
					PaletteAction::None | PaletteAction::Dismiss => OverlayAction::None,
				}
			}
			_ => OverlayAction::None,
		}
	}

	/// Whether the host still has to move focus into the palette input.
	#[must_use]
	pub fn focus_pending(&self) -> bool {
		self.focus_pending
	}

	/// Called after a frame has been painted. Returns `true` exactly once per
	/// open, when focus should move into the palette input.
	pub fn take_focus_request(&mut self) -> bool {
		if !self.is_open() || !self.focus_pending {
			return false;
		}
		self.focus_pending = false;
		self.palette.input_mut().set_focused(true);
		true
	}

	/// Record where the panel was painted, for outside-click detection.
	pub fn set_bounds(&mut self, bounds: Rect) {
		self.bounds = Some(bounds);
	}

	pub fn palette(&self) -> &PaletteSession {
		&self.palette
	}

	pub fn palette_mut(&mut self) -> &mut PaletteSession {
		&mut self.palette
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;
	use std::time::Duration;

	use portal_search_api::{BackendError, PersonHit, SearchBackend, SearchResult};

	use super::*;
	use crate::search::{PALETTE_DEBOUNCE, PortalLinks};

	struct EchoBackend;

	impl SearchBackend for EchoBackend {
		fn search(&self, query: &str) -> Result<SearchResult, BackendError> {
			Ok(SearchResult::new(
				vec![PersonHit::new(query, "1ª Fase")],
				Vec::new(),
			))
		}
	}

	fn controller() -> OverlayController {
		OverlayController::new(PaletteSession::new(
			Arc::new(EchoBackend),
			PortalLinks::new(""),
			PALETTE_DEBOUNCE,
			2,
		))
	}

	fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
		KeyEvent::new(code, modifiers)
	}

	fn click(column: u16, row: u16) -> MouseEvent {
		press(MouseButton::Left, column, row)
	}

	fn press(button: MouseButton, column: u16, row: u16) -> MouseEvent {
		MouseEvent {
			kind: MouseEventKind::Down(button),
			column,
			row,
			modifiers: KeyModifiers::NONE,
		}
	}

	#[test]
	fn chord_opens_from_anywhere() {
		let ctrl_k = key(KeyCode::Char('k'), KeyModifiers::CONTROL);
		let super_k = key(KeyCode::Char('k'), KeyModifiers::SUPER);
		assert_eq!(open_trigger_for(&ctrl_k, true), Some(OpenTrigger::Chord));
		assert_eq!(open_trigger_for(&super_k, false), Some(OpenTrigger::Chord));
		assert_eq!(open_trigger_for(&key(KeyCode::Char('k'), KeyModifiers::NONE), false), None);
	}

	#[test]
	fn slash_opens_only_outside_text_inputs() {
		let slash = key(KeyCode::Char('/'), KeyModifiers::NONE);
		assert_eq!(open_trigger_for(&slash, false), Some(OpenTrigger::Slash));
		assert_eq!(open_trigger_for(&slash, true), None);
		let ctrl_slash = key(KeyCode::Char('/'), KeyModifiers::CONTROL);
		assert_eq!(open_trigger_for(&ctrl_slash, false), None);
	}

	#[test]
	fn opening_twice_is_a_no_op() {
		let mut overlay = controller();
		assert!(overlay.open(OpenTrigger::Chord));
		overlay.take_focus_request();
		assert!(!overlay.open(OpenTrigger::Slash));
		assert!(!overlay.focus_pending());
		assert!(overlay.is_open());
	}

	#[test]
	fn open_clears_previous_query_and_defers_focus() {
		let mut overlay = controller();
		let now = Instant::now();
		overlay.open(OpenTrigger::Chord);
		assert!(overlay.take_focus_request());
		for ch in "Ana".chars() {
			overlay.handle_key(key(KeyCode::Char(ch), KeyModifiers::NONE), now);
		}
		overlay.close();

		overlay.open(OpenTrigger::Chord);
		assert_eq!(overlay.palette().query(), "");
		assert!(overlay.palette().view().is_empty());
		assert!(overlay.focus_pending());
		assert!(!overlay.palette().input().is_focused());
		assert!(overlay.take_focus_request());
		assert!(overlay.palette().input().is_focused());
		assert!(!overlay.take_focus_request());
	}

	#[test]
	fn requests_from_trigger_open_overlay() {
		let mut overlay = controller();
		let trigger = overlay.trigger();
		trigger.request_open();
		trigger.request_open();
		assert!(overlay.pump_requests());
		assert!(overlay.is_open());
		assert!(!overlay.pump_requests());
	}

	#[test]
	fn escape_closes() {
		let mut overlay = controller();
		overlay.open(OpenTrigger::Slash);
		let action = overlay.handle_key(key(KeyCode::Esc, KeyModifiers::NONE), Instant::now());
		assert_eq!(action, OverlayAction::Closed);
		assert_eq!(overlay.state(), OverlayState::Closed);
	}

	#[test]
	fn click_outside_panel_closes() {
		let mut overlay = controller();
		overlay.open(OpenTrigger::Chord);
		overlay.set_bounds(Rect::new(10, 5, 40, 10));
		assert_eq!(overlay.handle_mouse(click(12, 6)), OverlayAction::None);
		assert!(overlay.is_open());
		assert_eq!(overlay.handle_mouse(click(2, 1)), OverlayAction::Closed);
		assert!(!overlay.is_open());
	}

	#[test]
	fn any_button_outside_panel_closes() {
		for button in [MouseButton::Right, MouseButton::Middle] {
			let mut overlay = controller();
			overlay.open(OpenTrigger::Chord);
			overlay.set_bounds(Rect::new(10, 5, 40, 10));
			assert_eq!(overlay.handle_mouse(press(button, 12, 6)), OverlayAction::None);
			assert!(overlay.is_open());
			assert_eq!(overlay.handle_mouse(press(button, 60, 20)), OverlayAction::Closed);
			assert!(!overlay.is_open());
		}
	}

	#[test]
	fn enter_navigation_closes_and_emits_request() {
		let mut overlay = controller();
		let start = Instant::now();
		overlay.open(OpenTrigger::Chord);
		for ch in "Rita".chars() {
			overlay.handle_key(key(KeyCode::Char(ch), KeyModifiers::NONE), start);
		}
		overlay.tick(start + PALETTE_DEBOUNCE);

		let deadline = Instant::now() + Duration::from_secs(2);
		while overlay.palette().view().is_empty() && Instant::now() < deadline {
			std::thread::sleep(Duration::from_millis(5));
			overlay.tick(start + PALETTE_DEBOUNCE);
		}

		overlay.handle_key(key(KeyCode::Down, KeyModifiers::NONE), start);
		let action = overlay.handle_key(key(KeyCode::Enter, KeyModifiers::NONE), start);
		assert_eq!(
			action,
			OverlayAction::Navigate(NavigationRequest::new("/portal/catecumeno/?nome=Rita"))
		);
		assert!(!overlay.is_open());
	}
}
