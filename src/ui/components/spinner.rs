use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::ui::style::Theme;

/// Draw a right-aligned spinner and label on the first row of `area`.
pub fn render_spinner(
	frame: &mut Frame,
	area: Rect,
	label: &str,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let muted_style = theme.empty_style();
	let spinner = Throbber::default()
		.style(muted_style)
		.throbber_style(theme.accent_style());
	let mut line = Line::default();
	line.spans.push(spinner.to_symbol_span(throbber_state));
	if !label.is_empty() {
		line.spans.push(Span::styled(label.to_string(), muted_style));
	}

	let width = (line.width() as u16).min(area.width);
	let start_x = area.right().saturating_sub(width);
	frame
		.buffer_mut()
		.set_line(start_x, area.top(), &line, width);
}
