//! Line layout for result lists.
//!
//! Each hit takes two lines (identity, then phase and schedule). Section
//! headers take one line. Lines remember which flat item they belong to so
//! the list can map pointer rows and scroll spans back to items.

use std::ops::Range;

use portal_search_api::{GroupContactHit, PersonHit};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use super::phase::phase_chip;
use crate::search::{Hit, HitCategory, ResultView, Section};
use crate::ui::style::Theme;

const INDENT: &str = "    ";
const ELLIPSIS: &str = "…";

/// Labels for section headers and badges.
#[derive(Debug, Clone, Copy)]
pub struct RowLabels<'a> {
	pub people: &'a str,
	pub contacts: &'a str,
	pub guardian_badge: &'a str,
}

/// One rendered line of a result list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListLine {
	pub line: Line<'static>,
	/// Flat index of the hit this line draws, `None` for headers.
	pub item: Option<usize>,
}

impl ListLine {
	fn header(line: Line<'static>) -> Self {
		Self { line, item: None }
	}

	fn item(line: Line<'static>, index: usize) -> Self {
		Self {
			line,
			item: Some(index),
		}
	}
}

/// Lay out every section of `view`, truncating lines to `width` columns.
#[must_use]
pub fn build_lines(view: &ResultView, labels: RowLabels<'_>, theme: &Theme, width: u16) -> Vec<ListLine> {
	let width = usize::from(width);
	let mut lines = Vec::with_capacity(view.len() * 2 + view.sections().len());

	for section in view.sections() {
		lines.push(ListLine::header(truncate_line(
			section_header(section, labels, theme),
			width,
		)));
		for index in section.range.clone() {
			let Some(item) = view.get(index) else {
				continue;
			};
			let [first, second] = match &item.hit {
				Hit::Person(hit) => person_lines(hit, labels, theme),
				Hit::GroupContact(hit) => contact_lines(hit, theme),
			};
			lines.push(ListLine::item(truncate_line(first, width), index));
			lines.push(ListLine::item(truncate_line(second, width), index));
		}
	}

	lines
}

/// Line span occupied by item `index` inside `lines`.
#[must_use]
pub fn item_span(lines: &[ListLine], index: usize) -> Option<Range<usize>> {
	let start = lines.iter().position(|line| line.item == Some(index))?;
	let len = lines[start..]
		.iter()
		.take_while(|line| line.item == Some(index))
		.count();
	Some(start..start + len)
}

fn section_header(section: &Section, labels: RowLabels<'_>, theme: &Theme) -> Line<'static> {
	let label = match section.category {
		HitCategory::Person => labels.people,
		HitCategory::GroupContact => labels.contacts,
	};
	let count = if section.shown() < section.total {
		format!(" ({}/{})", section.shown(), section.total)
	} else {
		format!(" ({})", section.total)
	};
	Line::from(vec![
		Span::styled(label.to_uppercase(), theme.header_style()),
		Span::styled(count, theme.empty_style()),
	])
}

fn person_lines(hit: &PersonHit, labels: RowLabels<'_>, theme: &Theme) -> [Line<'static>; 2] {
	let mut first = vec![
		avatar(&hit.name, theme),
		Span::styled(
			hit.name.clone(),
			theme.text_style().add_modifier(Modifier::BOLD),
		),
	];
	if hit.matched_via_guardian() {
		first.push(Span::raw("  "));
		first.push(Span::styled(
			format!("[{}]", labels.guardian_badge),
			theme.badge_style(),
		));
		if let Some(guardian) = non_empty(hit.guardian.as_deref()) {
			first.push(Span::styled(format!(" {guardian}"), theme.empty_style()));
		}
	}

	let mut second = vec![Span::raw(INDENT), phase_chip(&hit.phase_label)];
	if let Some(group) = non_empty(hit.group.as_deref()) {
		second.push(Span::styled(format!(" {group}"), theme.text_style()));
	}
	push_schedule(
		&mut second,
		hit.location.as_deref(),
		hit.day.as_deref(),
		hit.time.as_deref(),
		theme,
	);

	[Line::from(first), Line::from(second)]
}

fn contact_lines(hit: &GroupContactHit, theme: &Theme) -> [Line<'static>; 2] {
	let contacts = hit.contacts();
	let first = vec![
		avatar(&contacts, theme),
		Span::styled(contacts, theme.text_style().add_modifier(Modifier::BOLD)),
	];

	let mut second = vec![
		Span::raw(INDENT),
		phase_chip(&hit.phase_label),
		Span::styled(format!(" {}", hit.group), theme.text_style()),
	];
	push_schedule(
		&mut second,
		hit.location.as_deref(),
		hit.day.as_deref(),
		hit.time.as_deref(),
		theme,
	);

	[Line::from(first), Line::from(second)]
}

fn avatar(name: &str, theme: &Theme) -> Span<'static> {
	let initial = name
		.trim()
		.chars()
		.next()
		.map_or_else(|| "?".to_string(), |ch| ch.to_uppercase().to_string());
	Span::styled(
		format!(" {initial}  "),
		theme.accent_style().add_modifier(Modifier::BOLD),
	)
}

fn push_schedule(
	spans: &mut Vec<Span<'static>>,
	location: Option<&str>,
	day: Option<&str>,
	time: Option<&str>,
	theme: &Theme,
) {
	let when = [non_empty(day), non_empty(time)]
		.into_iter()
		.flatten()
		.collect::<Vec<_>>()
		.join(" ");
	let parts: Vec<&str> = [non_empty(location), non_empty(Some(when.as_str()))]
		.into_iter()
		.flatten()
		.collect();
	if parts.is_empty() {
		return;
	}
	spans.push(Span::styled(
		format!(" · {}", parts.join(" · ")),
		theme.empty_style(),
	));
}

fn non_empty(value: Option<&str>) -> Option<&str> {
	value.map(str::trim).filter(|value| !value.is_empty())
}

/// Cut a line to `width` columns, ending with an ellipsis when shortened.
fn truncate_line(line: Line<'static>, width: usize) -> Line<'static> {
	if line.width() <= width {
		return line;
	}
	let budget = width.saturating_sub(ELLIPSIS.width());
	let mut used = 0;
	let mut spans = Vec::with_capacity(line.spans.len() + 1);
	let mut last_style = Style::default();

	for span in line.spans {
		if used >= budget {
			break;
		}
		let (kept, kept_width) = span.content.unicode_truncate(budget - used);
		used += kept_width;
		last_style = span.style;
		spans.push(Span::styled(kept.to_string(), span.style));
	}
	if width > 0 {
		spans.push(Span::styled(ELLIPSIS, last_style));
	}
	Line::from(spans)
}
