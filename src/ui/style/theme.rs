use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub title: Style,
	pub text: Style,
	pub muted: Style,
	pub border: Style,
	pub header: Style,
	pub row_highlight: Style,
	pub accent: Style,
	pub badge: Style,
}

impl Theme {
	#[must_use]
	pub fn title_style(&self) -> Style {
		self.title
	}

	#[must_use]
	pub fn text_style(&self) -> Style {
		self.text
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.muted
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		self.border
	}

	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn accent_style(&self) -> Style {
		self.accent
	}

	#[must_use]
	pub fn badge_style(&self) -> Style {
		self.badge
	}

	/// Border colour for a focused widget.
	#[must_use]
	pub fn focus_border_style(&self) -> Style {
		self.accent.add_modifier(Modifier::BOLD)
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// A built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	fn matches(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}

const fn fg(color: Color) -> Style {
	Style::new().fg(color)
}

const SLATE: Theme = Theme {
	title: fg(Color::Rgb(241, 245, 249)).add_modifier(Modifier::BOLD),
	text: fg(Color::Rgb(226, 232, 240)),
	muted: fg(Color::Rgb(100, 116, 139)),
	border: fg(Color::Rgb(71, 85, 105)),
	header: fg(Color::Rgb(148, 163, 184)).add_modifier(Modifier::BOLD),
	row_highlight: Style::new().bg(Color::Rgb(30, 41, 59)),
	accent: fg(Color::Rgb(56, 189, 248)),
	badge: fg(Color::Rgb(251, 191, 36)),
};

const LIGHT: Theme = Theme {
	title: fg(Color::Rgb(15, 23, 42)).add_modifier(Modifier::BOLD),
	text: fg(Color::Rgb(30, 41, 59)),
	muted: fg(Color::Rgb(100, 116, 139)),
	border: fg(Color::Rgb(203, 213, 225)),
	header: fg(Color::Rgb(71, 85, 105)).add_modifier(Modifier::BOLD),
	row_highlight: Style::new().bg(Color::Rgb(226, 232, 240)),
	accent: fg(Color::Rgb(2, 132, 199)),
	badge: fg(Color::Rgb(180, 83, 9)),
};

const SOLARIZED: Theme = Theme {
	title: fg(Color::Rgb(253, 246, 227)).add_modifier(Modifier::BOLD),
	text: fg(Color::Rgb(147, 161, 161)),
	muted: fg(Color::Rgb(88, 110, 117)),
	border: fg(Color::Rgb(7, 54, 66)),
	header: fg(Color::Rgb(181, 137, 0)).add_modifier(Modifier::BOLD),
	row_highlight: Style::new().bg(Color::Rgb(7, 54, 66)),
	accent: fg(Color::Rgb(38, 139, 210)),
	badge: fg(Color::Rgb(203, 75, 22)),
};

static DEFINITIONS: [ThemeDefinition; 3] = [
	ThemeDefinition::new("slate", SLATE).with_aliases(&["dark", "default"]),
	ThemeDefinition::new("light", LIGHT),
	ThemeDefinition::new("solarized", SOLARIZED).with_aliases(&["solarized-dark"]),
];

#[must_use]
pub fn definitions() -> &'static [ThemeDefinition] {
	&DEFINITIONS
}

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Look a theme up by name or alias, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	DEFINITIONS
		.iter()
		.find(|definition| definition.matches(name))
		.map(|definition| definition.theme)
}

#[must_use]
pub fn names() -> Vec<&'static str> {
	DEFINITIONS.iter().map(|definition| definition.name).collect()
}
