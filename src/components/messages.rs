//! Message paragraphs for idle, empty, and error states.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

/// Render a single centered message in the results area.
pub fn render_message(frame: &mut Frame, area: Rect, text: &str, style: Style) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	// Drop the message onto the vertical middle of the area.
	let message_area = Rect {
		x: area.x,
		y: area.y + area.height / 2,
		width: area.width,
		height: 1,
	};

	let para = Paragraph::new(text)
		.style(style)
		.alignment(Alignment::Center);
	frame.render_widget(para, message_area);
}
