//! Frame layout for the landing page and the palette panel.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use throbber_widgets_tui::ThrobberState;

use super::app::{App, Focus};
use super::components::{ResultList, RowLabels, build_lines, render_spinner};
use super::config::UiConfig;
use super::input::SearchInput;
use super::palette::PaletteSession;
use super::status::SearchStatus;
use super::style::Theme;

const PAGE_WIDTH: u16 = 84;
const PALETTE_WIDTH: u16 = 72;
const PALETTE_HEIGHT: u16 = 26;

impl App {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let [page] = Layout::horizontal([Constraint::Max(PAGE_WIDTH)])
			.flex(Flex::Center)
			.areas(area);
		let [header, hero_input, hero_results, button, footer] = Layout::vertical([
			Constraint::Length(3),
			Constraint::Length(3),
			Constraint::Min(1),
			Constraint::Length(1),
			Constraint::Length(1),
		])
		.areas(page);

		self.render_header(frame, header);
		self.render_hero(frame, hero_input, hero_results);
		self.render_button(frame, button);
		render_hints(frame, footer, page_hints(self.focus), &self.theme);

		if self.overlay.is_open() {
			let bounds = palette_bounds(area);
			render_palette(
				frame,
				bounds,
				self.overlay.palette_mut(),
				&self.theme,
				&self.ui,
				&self.throbber_state,
			);
			self.overlay.set_bounds(bounds);
		}
	}

	fn render_header(&self, frame: &mut Frame, area: Rect) {
		let lines = vec![
			Line::from(Span::styled(self.ui.title.clone(), self.theme.title_style())),
			Line::from(Span::styled(self.ui.subtitle.clone(), self.theme.empty_style())),
		];
		frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
	}

	fn render_hero(&mut self, frame: &mut Frame, input_area: Rect, results_area: Rect) {
		let focused = self.focus == Focus::Hero;
		let inner = render_input_box(
			frame,
			input_area,
			self.hero.input(),
			&self.ui.placeholder,
			focused,
			&self.theme,
		);
		self.hero_input_area = Some(input_area);
		if self.hero.is_loading() {
			render_spinner(frame, inner, "", &self.throbber_state, &self.theme);
		}

		let status = self.hero.status();
		if status != SearchStatus::Results {
			self.hero.set_hitboxes(Vec::new());
			let text = match status {
				SearchStatus::NoResults => self.ui.no_results(self.hero.query()),
				SearchStatus::TooShort => self.ui.too_short(self.hero.min_query_len()),
				SearchStatus::Prompt | SearchStatus::Loading | SearchStatus::Results => String::new(),
			};
			render_message(frame, results_area, &[text], &self.theme);
			return;
		}

		let lines = build_lines(
			self.hero.view(),
			labels(&self.ui),
			&self.theme,
			results_area.width,
		);
		let hitboxes = ResultList::new(&lines, &self.theme).render(frame, results_area);
		self.hero.set_hitboxes(hitboxes);
	}

	fn render_button(&mut self, frame: &mut Frame, area: Rect) {
		let label = Line::from(vec![
			Span::styled(format!("[ {} ", self.ui.search_button), self.theme.accent_style()),
			Span::styled("/", self.theme.badge_style()),
			Span::styled(" ]", self.theme.accent_style()),
		]);
		let width = (label.width() as u16).min(area.width);
		let [button] = Layout::horizontal([Constraint::Length(width)])
			.flex(Flex::Center)
			.areas(area);
		frame.render_widget(Paragraph::new(label), button);
		self.button_area = Some(button);
	}
}

/// Draw the palette panel inside `bounds`.
pub(crate) fn render_palette(
	frame: &mut Frame,
	bounds: Rect,
	palette: &mut PaletteSession,
	theme: &Theme,
	ui: &UiConfig,
	throbber_state: &ThrobberState,
) {
	frame.render_widget(Clear, bounds);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(theme.focus_border_style())
		.title(Span::styled(format!(" {} ", ui.search_button), theme.header_style()));
	let inner = block.inner(bounds);
	frame.render_widget(block, bounds);

	let [input_row, separator, results, footer] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Length(1),
		Constraint::Min(1),
		Constraint::Length(1),
	])
	.areas(inner);

	palette.input().render(frame, input_row);
	if palette.query().is_empty() {
		render_placeholder(frame, input_row, &ui.placeholder, theme);
	}
	if palette.is_loading() {
		render_spinner(frame, input_row, "", throbber_state, theme);
	}
	frame.render_widget(
		Paragraph::new("─".repeat(usize::from(separator.width))).style(theme.border_style()),
		separator,
	);

	match palette.status() {
		SearchStatus::Results => {
			let lines = build_lines(palette.view(), labels(ui), theme, results.width);
			palette.scroll_to_active(&lines, usize::from(results.height));
			let hitboxes = ResultList::new(&lines, theme)
				.offset(palette.scroll_offset())
				.active(palette.active())
				.render(frame, results);
			palette.set_hitboxes(hitboxes);
		}
		status => {
			palette.set_hitboxes(Vec::new());
			let message = match status {
				SearchStatus::Prompt => vec![ui.empty_prompt.clone(), ui.empty_hint.clone()],
				SearchStatus::TooShort => vec![ui.too_short(palette.min_query_len())],
				SearchStatus::NoResults => vec![ui.no_results(palette.query())],
				SearchStatus::Loading | SearchStatus::Results => Vec::new(),
			};
			render_message(frame, results, &message, theme);
		}
	}

	render_hints(
		frame,
		footer,
		&[("↑↓", "navegar"), ("Enter", "abrir"), ("Esc", "fechar")],
		theme,
	);
}

/// Centered panel area for the palette.
#[must_use]
pub(crate) fn palette_bounds(area: Rect) -> Rect {
	let width = PALETTE_WIDTH.min(area.width.saturating_sub(4)).max(area.width.min(20));
	let height = PALETTE_HEIGHT.min(area.height.saturating_sub(2)).max(area.height.min(6));
	let [row] = Layout::vertical([Constraint::Length(height)])
		.flex(Flex::Center)
		.areas(area);
	let [panel] = Layout::horizontal([Constraint::Length(width)])
		.flex(Flex::Center)
		.areas(row);
	panel
}

fn render_input_box(
	frame: &mut Frame,
	area: Rect,
	input: &SearchInput,
	placeholder: &str,
	focused: bool,
	theme: &Theme,
) -> Rect {
	let border = if focused {
		theme.focus_border_style()
	} else {
		theme.border_style()
	};
	let block = Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(border);
	let inner = block.inner(area);
	frame.render_widget(block, area);
	input.render(frame, inner);
	if input.text().is_empty() {
		render_placeholder(frame, inner, placeholder, theme);
	}
	inner
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	// Leave the first column for the cursor block.
	let start = area.left().saturating_add(1);
	let width = area.width.saturating_sub(1);
	let display: String = text.chars().take(usize::from(width)).collect();
	frame.buffer_mut().set_line(
		start,
		area.top(),
		&Line::from(Span::styled(display, theme.empty_style())),
		width,
	);
}

fn render_message(frame: &mut Frame, area: Rect, lines: &[String], theme: &Theme) {
	if area.height == 0 {
		return;
	}
	let lines: Vec<Line> = lines
		.iter()
		.map(|line| Line::from(Span::styled(line.clone(), theme.empty_style())))
		.collect();
	let [middle] = Layout::vertical([Constraint::Length(lines.len() as u16)])
		.flex(Flex::Center)
		.areas(area);
	frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
}

fn render_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], theme: &Theme) {
	let mut spans = Vec::with_capacity(hints.len() * 3);
	for (index, (key, action)) in hints.iter().enumerate() {
		if index > 0 {
			spans.push(Span::raw("  "));
		}
		spans.push(Span::styled((*key).to_string(), theme.accent_style()));
		spans.push(Span::styled(format!(" {action}"), theme.empty_style()));
	}
	frame.render_widget(
		Paragraph::new(Line::from(spans))
			.alignment(Alignment::Center)
			.style(Style::default()),
		area,
	);
}

fn page_hints(focus: Focus) -> &'static [(&'static str, &'static str)] {
	match focus {
		Focus::Hero => &[("Enter", "pesquisa completa"), ("Tab", "sair"), ("Ctrl+K", "paleta")],
		Focus::Page | Focus::Palette => &[
			("Tab", "pesquisar"),
			("/", "paleta"),
			("s", "paleta"),
			("q", "sair"),
		],
	}
}

fn labels(ui: &UiConfig) -> RowLabels<'_> {
	RowLabels {
		people: &ui.people_label,
		contacts: &ui.contacts_label,
		guardian_badge: &ui.guardian_badge,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn palette_fits_inside_small_terminals() {
		let area = Rect::new(0, 0, 30, 10);
		let bounds = palette_bounds(area);
		assert!(bounds.width <= area.width);
		assert!(bounds.height <= area.height);
		assert!(bounds.width >= 20);
	}

	#[test]
	fn palette_is_centered_on_large_terminals() {
		let bounds = palette_bounds(Rect::new(0, 0, 120, 40));
		assert_eq!(bounds.width, PALETTE_WIDTH);
		assert_eq!(bounds.height, PALETTE_HEIGHT);
		assert_eq!(bounds.x, (120 - PALETTE_WIDTH) / 2);
	}
}
