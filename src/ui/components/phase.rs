use portal_search_api::Phase;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Chip colour per phase; anything unlisted uses [`FALLBACK`].
const PHASE_COLORS: &[(Phase, Color)] = &[
	(Phase::First, Color::Rgb(14, 165, 233)),
	(Phase::Second, Color::Rgb(139, 92, 246)),
	(Phase::Third, Color::Rgb(245, 158, 11)),
	(Phase::PreCatechumenate, Color::Rgb(16, 185, 129)),
	(Phase::Catechumenate, Color::Rgb(239, 68, 68)),
];

const FALLBACK: Color = Color::Rgb(100, 116, 139);

#[must_use]
pub fn phase_color(phase: Phase) -> Color {
	PHASE_COLORS
		.iter()
		.find(|(candidate, _)| *candidate == phase)
		.map_or(FALLBACK, |(_, color)| *color)
}

/// Coloured chip showing the phase label as the portal sent it.
#[must_use]
pub fn phase_chip(label: &str) -> Span<'static> {
	let phase = Phase::from_label(label);
	let text = match label.trim() {
		"" => phase.to_string(),
		label => label.to_string(),
	};
	Span::styled(
		format!(" {text} "),
		Style::new()
			.fg(Color::Black)
			.bg(phase_color(phase))
			.add_modifier(Modifier::BOLD),
	)
}
