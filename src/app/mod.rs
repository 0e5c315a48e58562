//! Core state container for the terminal front-end.
//!
//! The `app` module exposes the [`App`] struct which bundles together the
//! query input, the active search mode, the lifecycle phase, and the fetch
//! runtime that settles submissions in the background.

mod actions;
mod render;
mod runtime;
mod search;
pub mod state;

use anyhow::{Result, anyhow};
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use crate::api::{BooksClient, FetchRuntime, SearchMode};
use crate::input::SearchInput;
use crate::settings::ResolvedConfig;
use crate::style::{self, StyleConfig};
use state::SearchPhase;

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	/// Text input widget for the query term.
	pub(crate) search_input: SearchInput<'a>,
	/// Route discriminator for the next submission.
	pub(crate) mode: SearchMode,
	/// Current lifecycle phase; mutated only through [`App::transition`].
	pub(crate) phase: SearchPhase,
	/// Current style and theme configuration.
	pub(crate) style: StyleConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) table_state: TableState,
	pub(crate) fetch: FetchRuntime,
}

impl<'a> App<'a> {
	/// Construct an [`App`] from resolved settings, spawning the fetch
	/// worker.
	pub fn new(settings: &ResolvedConfig) -> Result<Self> {
		let client = BooksClient::new(settings.base_url.clone(), settings.timeout)?;

		let mut style = StyleConfig::default();
		if let Some(name) = &settings.theme {
			style.theme = style::find_theme(name)
				.ok_or_else(|| anyhow!("unknown theme '{name}' (see --list-themes)"))?;
		}

		Ok(Self {
			search_input: SearchInput::new(settings.initial_query.clone()),
			mode: settings.start_mode,
			phase: SearchPhase::Idle,
			style,
			throbber_state: ThrobberState::default(),
			table_state: TableState::default(),
			fetch: FetchRuntime::new(client),
		})
	}

	/// Switch to the next search mode. The displayed result is kept until
	/// the user submits again.
	pub(crate) fn cycle_mode(&mut self) {
		self.mode = self.mode.next();
	}

	/// Number of rows in the currently displayed result.
	pub(crate) fn row_count(&self) -> usize {
		self.phase.result().map(|result| result.items.len()).unwrap_or(0)
	}

	/// Move the table selection by `delta`, clamping to the row range.
	pub(crate) fn move_selection(&mut self, delta: isize) {
		let rows = self.row_count();
		if rows == 0 {
			self.table_state.select(None);
			return;
		}

		let current = self.table_state.selected().unwrap_or(0) as isize;
		let next = (current + delta).clamp(0, rows as isize - 1) as usize;
		self.table_state.select(Some(next));
	}

	/// Reset the selection after a settlement: first row when there are
	/// rows, none otherwise.
	pub(crate) fn reset_selection(&mut self) {
		if self.row_count() == 0 {
			self.table_state.select(None);
		} else {
			self.table_state.select(Some(0));
		}
	}
}


#[cfg(test)]
mod tests {
	use super::test_support::offline_settings;
	use super::*;
	use crate::api::{BookRecord, SearchResult};

	fn app_with_rows(rows: usize) -> App<'static> {
		let mut app = App::new(&offline_settings()).expect("app builds");
		app.phase = SearchPhase::Loaded(SearchResult {
			total_items: Some(rows as u64),
			items: vec![BookRecord::default(); rows],
		});
		app.reset_selection();
		app
	}

	#[test]
	fn selection_clamps_to_row_range() {
		let mut app = app_with_rows(3);
		assert_eq!(app.table_state.selected(), Some(0));

		app.move_selection(-1);
		assert_eq!(app.table_state.selected(), Some(0));

		app.move_selection(5);
		assert_eq!(app.table_state.selected(), Some(2));
	}

	#[test]
	fn selection_clears_without_rows() {
		let mut app = app_with_rows(0);
		assert_eq!(app.table_state.selected(), None);

		app.move_selection(1);
		assert_eq!(app.table_state.selected(), None);
	}

	#[test]
	fn unknown_theme_is_an_error() {
		let mut settings = offline_settings();
		settings.theme = Some("does-not-exist".to_string());
		assert!(App::new(&settings).is_err());
	}
}
