//! Table rendering and configuration.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;

/// Fixed column headers for the results table.
pub const RESULT_HEADERS: [&str; 5] =
	["Title", "Subtitle", "Author(s)", "Publisher", "Published Date"];

/// Column width constraints matching [`RESULT_HEADERS`].
#[must_use]
pub fn result_widths() -> Vec<Constraint> {
	vec![
		Constraint::Fill(2),
		Constraint::Fill(2),
		Constraint::Fill(2),
		Constraint::Fill(1),
		Constraint::Length(14),
	]
}

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	/// Column headers.
	pub headers: Vec<String>,
	/// Column width constraints.
	pub widths: Vec<Constraint>,
	/// Rendered table rows.
	pub rows: Vec<Row<'a>>,
	/// Optional title for the bordered table.
	pub title: Option<String>,
}

/// Render the table inside a rounded border using the provided spec.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(header_style(theme));

	if let Some(title) = spec.title.clone() {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	let header_cells = spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>();
	let header = Row::new(header_cells)
		.style(header_style(theme))
		.height(1)
		.bottom_margin(1);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, inner, table_state);

	render_header_separator(frame, inner, theme);
}

fn header_style(theme: &Theme) -> Style {
	Style::default().fg(theme.header.fg.unwrap_or(ratatui::style::Color::Reset))
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	const HEADER_HEIGHT: u16 = 1;
	if HEADER_HEIGHT >= area.height {
		return;
	}

	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: area.y + HEADER_HEIGHT,
		width: area.width,
		height: 1,
	};
	if width <= 2 {
		frame.render_widget(Paragraph::new(" ".repeat(width)), sep_rect);
		return;
	}

	let middle = Span::styled("─".repeat(width - 2), header_style(theme));
	let spans = vec![Span::raw(" "), middle, Span::raw(" ")];
	let para = Paragraph::new(Text::from(Line::from(spans)));
	frame.render_widget(para, sep_rect);
}
