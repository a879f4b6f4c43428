use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Single-line text field backing both search surfaces.
pub struct SearchInput {
	textarea: TextArea<'static>,
	focused: bool,
}

impl Default for SearchInput {
	fn default() -> Self {
		Self::new("")
	}
}

impl SearchInput {
	#[must_use]
	pub fn new(text: &str) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
			focused: false,
		};
		input.textarea.set_cursor_line_style(Style::default());
		input.set_text(text);
		input.set_focused(false);
		input
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key to the editor. Line breaks are swallowed so the field
	/// stays single-line. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m' | 'j')));
		if newline {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn set_text(&mut self, text: &str) {
		let line = text.lines().next().unwrap_or_default();
		self.textarea = TextArea::new(vec![line.to_string()]);
		self.textarea.set_cursor_line_style(Style::default());
		self.textarea.move_cursor(CursorMove::End);
		self.set_focused(self.focused);
	}

	pub fn clear(&mut self) {
		self.set_text("");
	}

	/// Show or hide the cursor block.
	pub fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
		let style = if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
