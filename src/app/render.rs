//! Frame rendering for the terminal application.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin};

use super::App;
use super::state::{IDLE_HINT, NO_BOOKS_MESSAGE, SearchPhase};
use crate::components::{
	InputContext, ProgressState, RESULT_HEADERS, TableSpec, build_book_rows, render_input,
	render_message, render_mode_tabs, render_table, result_widths,
};

const QUERY_PLACEHOLDER: &str = "Enter search term...";
const SEARCHING_LABEL: &str = "Searching...";

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let area = area.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
			])
			.split(area);

		let progress_text = if self.phase.is_loading() {
			SEARCHING_LABEL
		} else {
			""
		};
		let input_ctx = InputContext {
			search_input: &self.search_input,
			placeholder: Some(QUERY_PLACEHOLDER),
			area: layout[0],
			theme: &self.style.theme,
		};
		let progress = ProgressState {
			progress_text,
			throbber_state: &self.throbber_state,
		};
		render_input(frame, input_ctx, progress);

		render_mode_tabs(frame, layout[1], self.mode, &self.style.theme);

		let results_area = layout[2];
		match &self.phase {
			SearchPhase::Idle => {
				render_message(frame, results_area, IDLE_HINT, self.style.theme.empty);
			}
			// The spinner in the input row is the loading indicator; the
			// previous result was already discarded on submission.
			SearchPhase::Loading => {}
			SearchPhase::Rejected(message) | SearchPhase::Failed(message) => {
				render_message(frame, results_area, message, self.style.theme.error);
			}
			SearchPhase::Loaded(result) if result.items.is_empty() => {
				render_message(frame, results_area, NO_BOOKS_MESSAGE, self.style.theme.empty);
			}
			SearchPhase::Loaded(result) => {
				let spec = TableSpec {
					headers: RESULT_HEADERS.map(String::from).to_vec(),
					widths: result_widths(),
					rows: build_book_rows(&result.items),
					title: result.total_items.map(|n| format!("Total books found: {n}")),
				};
				render_table(
					frame,
					results_area,
					&mut self.table_state,
					spec,
					&self.style.theme,
				);
			}
		}
	}
}
