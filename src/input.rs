//! Single-line query input backed by `tui_textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// The query editor: a one-line textarea with the default cursor-line
/// styling stripped so it renders as a bare prompt.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	/// Create an input pre-filled with `initial`, cursor at the end.
	#[must_use]
	pub fn new(initial: String) -> Self {
		let mut textarea = TextArea::new(vec![initial]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the query text, cursor at the end.
	pub fn set_text(&mut self, text: &str) {
		*self = Self::new(text.to_string());
	}

	/// Feed a key press to the editor. Returns `true` when the text changed.
	///
	/// Enter and Tab are submission/mode keys handled by the caller; they
	/// never reach the textarea, which would otherwise insert a line break
	/// or an indent.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Enter | KeyCode::Tab => false,
			_ => self.textarea.input(key),
		}
	}

	/// Render the editor into `area`.
	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::KeyModifiers;

	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_to_the_query() {
		let mut input = SearchInput::new(String::new());
		assert!(input.input(key(KeyCode::Char('a'))));
		assert!(input.input(key(KeyCode::Char('b'))));
		assert_eq!(input.text(), "ab");
	}

	#[test]
	fn backspace_removes_the_last_character() {
		let mut input = SearchInput::new("abc".to_string());
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "ab");
	}

	#[test]
	fn enter_and_tab_leave_the_text_untouched() {
		let mut input = SearchInput::new("abc".to_string());
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(key(KeyCode::Tab)));
		assert_eq!(input.text(), "abc");
	}
}
