//! Keyboard handling for the terminal application.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;

impl App<'_> {
	/// Process a keyboard event. Returns `true` when the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Esc => return true,
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return true;
			}
			KeyCode::Enter => self.submit(),
			KeyCode::Tab => self.cycle_mode(),
			KeyCode::Up => self.move_selection(-1),
			KeyCode::Down => self.move_selection(1),
			_ => {
				self.search_input.input(key);
			}
		}
		false
	}
}
