use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use super::rows::ListLine;
use crate::ui::style::Theme;

/// Screen rows occupied by a flat item after the last paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListHitbox {
	pub area: Rect,
	pub index: usize,
}

/// Find the item painted under `position`.
#[must_use]
pub fn hit_test(hitboxes: &[ListHitbox], position: Position) -> Option<usize> {
	hitboxes
		.iter()
		.find(|hitbox| hitbox.area.contains(position))
		.map(|hitbox| hitbox.index)
}

/// Scrolled window over pre-built [`ListLine`]s.
pub struct ResultList<'a> {
	lines: &'a [ListLine],
	offset: usize,
	active: Option<usize>,
	theme: &'a Theme,
}

impl<'a> ResultList<'a> {
	#[must_use]
	pub fn new(lines: &'a [ListLine], theme: &'a Theme) -> Self {
		Self {
			lines,
			offset: 0,
			active: None,
			theme,
		}
	}

	#[must_use]
	pub fn offset(mut self, offset: usize) -> Self {
		self.offset = offset;
		self
	}

	#[must_use]
	pub fn active(mut self, active: Option<usize>) -> Self {
		self.active = active;
		self
	}

	/// Paint the visible lines and return the hitboxes of painted items.
	pub fn render(self, frame: &mut Frame, area: Rect) -> Vec<ListHitbox> {
		let mut hitboxes: Vec<ListHitbox> = Vec::new();
		if area.width == 0 || area.height == 0 {
			return hitboxes;
		}

		let height = usize::from(area.height);
		let visible = self.lines.iter().skip(self.offset).take(height);
		for (row, list_line) in visible.enumerate() {
			let y = area.y + row as u16;
			let line_area = Rect::new(area.x, y, area.width, 1);
			let mut paragraph = Paragraph::new(list_line.line.clone());
			if list_line.item.is_some() && list_line.item == self.active {
				paragraph = paragraph.style(self.theme.row_highlight_style());
			}
			frame.render_widget(paragraph, line_area);

			let Some(index) = list_line.item else {
				continue;
			};
			match hitboxes.last_mut() {
				Some(last) if last.index == index && last.area.bottom() == y => {
					last.area.height += 1;
				}
				_ => hitboxes.push(ListHitbox {
					area: line_area,
					index,
				}),
			}
		}

		if self.lines.len() > height {
			let mut state = ScrollbarState::new(self.lines.len().saturating_sub(height))
				.position(self.offset);
			frame.render_stateful_widget(
				Scrollbar::new(ScrollbarOrientation::VerticalRight)
					.begin_symbol(None)
					.end_symbol(None)
					.style(self.theme.border_style()),
				area,
				&mut state,
			);
		}

		hitboxes
	}
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::text::Line;

	use super::*;

	fn lines() -> Vec<ListLine> {
		vec![
			ListLine {
				line: Line::from("HEADER"),
				item: None,
			},
			ListLine {
				line: Line::from("first a"),
				item: Some(0),
			},
			ListLine {
				line: Line::from("first b"),
				item: Some(0),
			},
			ListLine {
				line: Line::from("second a"),
				item: Some(1),
			},
			ListLine {
				line: Line::from("second b"),
				item: Some(1),
			},
		]
	}

	#[test]
	fn hitboxes_cover_each_painted_item() {
		let mut terminal = Terminal::new(TestBackend::new(20, 4)).expect("terminal");
		let lines = lines();
		let theme = Theme::default();
		let mut hitboxes = Vec::new();
		terminal
			.draw(|frame| {
				hitboxes = ResultList::new(&lines, &theme)
					.offset(1)
					.active(Some(1))
					.render(frame, frame.area());
			})
			.expect("draw");

		assert_eq!(hitboxes.len(), 2);
		assert_eq!(hitboxes[0].area, Rect::new(0, 0, 20, 2));
		assert_eq!(hitboxes[1].area, Rect::new(0, 2, 20, 2));
		assert_eq!(hit_test(&hitboxes, Position::new(3, 3)), Some(1));
		assert_eq!(hit_test(&hitboxes, Position::new(3, 9)), None);

		let buffer = terminal.backend().buffer();
		let highlight = theme.row_highlight_style().bg;
		assert_eq!(buffer[(0, 2)].bg, highlight.unwrap_or_default());
	}
}
