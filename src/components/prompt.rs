//! Input prompt rendering and progress display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::input::SearchInput;
use crate::style::Theme;

/// Argument bundle for rendering the input area.
pub struct InputContext<'a> {
	/// The query input widget.
	pub search_input: &'a SearchInput<'a>,
	/// Placeholder text shown when input is empty.
	pub placeholder: Option<&'a str>,
	/// Rendering area.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Progress information for the prompt progress indicator.
pub struct ProgressState<'a> {
	/// Text describing the in-flight request, empty when idle.
	pub progress_text: &'a str,
	/// Spinner animation state.
	pub throbber_state: &'a ThrobberState,
}

/// Render the input row with optional placeholder and a right-aligned
/// progress indicator while a request is in flight.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>, progress: ProgressState<'_>) {
	let InputContext {
		search_input,
		placeholder,
		area,
		theme,
	} = input;

	search_input.render(frame, area);

	if search_input.text().is_empty()
		&& let Some(placeholder_text) = placeholder
	{
		render_placeholder(frame, area, placeholder_text, theme);
	}

	render_progress(frame, area, progress, theme);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	let available_width = area.width as usize;
	let display_text: String = text.chars().take(available_width).collect();
	let buffer = frame.buffer_mut();
	buffer.set_line(
		area.left(),
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty)),
		area.width,
	);
}

fn render_progress(frame: &mut Frame, area: Rect, progress: ProgressState<'_>, theme: &Theme) {
	let ProgressState {
		progress_text,
		throbber_state,
	} = progress;

	if area.width == 0 || area.height == 0 || progress_text.is_empty() {
		return;
	}

	let spinner = Throbber::default()
		.style(theme.empty)
		.throbber_style(theme.empty);
	let mut line = Line::default();
	line.spans.push(spinner.to_symbol_span(throbber_state));
	line.spans
		.push(Span::styled(progress_text.to_string(), theme.empty));

	let line_width = line.width() as u16;
	if line_width == 0 {
		return;
	}

	let start_x = if line_width >= area.width {
		area.left()
	} else {
		area.right().saturating_sub(line_width)
	};
	let max_width = area.right().saturating_sub(start_x).min(line_width);
	if max_width == 0 {
		return;
	}

	let buffer = frame.buffer_mut();
	buffer.set_line(start_x, area.top(), &line, max_width);
}
