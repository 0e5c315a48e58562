//! Mode selector line.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::api::SearchMode;
use crate::style::Theme;

/// Render the search-mode selector as a single line of labels, with the
/// active mode highlighted.
pub fn render_mode_tabs(frame: &mut Frame, area: Rect, active: SearchMode, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let mut spans = vec![Span::styled("Mode: ", theme.empty)];
	for (idx, mode) in SearchMode::ALL.iter().enumerate() {
		if idx > 0 {
			spans.push(Span::styled(" │ ", theme.empty));
		}
		let style = if *mode == active {
			theme.tab_active
		} else {
			theme.empty
		};
		spans.push(Span::styled(mode.label(), style));
	}

	frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
