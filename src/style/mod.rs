//! Styling and theme configuration.

use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for the UI elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Style for the table header and borders.
	pub header: Style,
	/// Style for the highlighted table row.
	pub row_highlight: Style,
	/// Style for empty states, hints, and muted chrome.
	pub empty: Style,
	/// Style for error messages.
	pub error: Style,
	/// Style for the active mode tab.
	pub tab_active: Style,
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// The theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	Theme {
		header: Style::default().fg(Color::Cyan),
		row_highlight: Style::default()
			.bg(Color::DarkGray)
			.add_modifier(Modifier::BOLD),
		empty: Style::default().fg(Color::DarkGray),
		error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
		tab_active: Style::default()
			.fg(Color::Yellow)
			.add_modifier(Modifier::BOLD),
	}
}

/// Builtin themes, selectable by name.
#[must_use]
pub fn builtin_themes() -> Vec<(&'static str, Theme)> {
	let mono = Theme {
		header: Style::default().add_modifier(Modifier::BOLD),
		row_highlight: Style::default().add_modifier(Modifier::REVERSED),
		empty: Style::default().add_modifier(Modifier::DIM),
		error: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
		tab_active: Style::default().add_modifier(Modifier::BOLD),
	};
	let ocean = Theme {
		header: Style::default().fg(Color::Blue),
		row_highlight: Style::default()
			.bg(Color::Blue)
			.fg(Color::White)
			.add_modifier(Modifier::BOLD),
		empty: Style::default().fg(Color::Gray),
		error: Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
		tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
	};

	vec![("default", default_theme()), ("mono", mono), ("ocean", ocean)]
}

/// Names of the builtin themes, in registration order.
#[must_use]
pub fn theme_names() -> Vec<&'static str> {
	builtin_themes().into_iter().map(|(name, _)| name).collect()
}

/// Look up a builtin theme by name, case-insensitively.
#[must_use]
pub fn find_theme(name: &str) -> Option<Theme> {
	builtin_themes()
		.into_iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
		.map(|(_, theme)| theme)
}

/// Current style and theme configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleConfig {
	/// The active theme.
	pub theme: Theme,
}
