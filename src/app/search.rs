//! Submission handling and settlement of search outcomes.

use std::sync::mpsc::TryRecvError;

use crate::api::SearchRequest;
use crate::api::fetch::FetchOutcome;

use super::App;
use super::state::{EMPTY_QUERY_MESSAGE, SearchEvent};

impl App<'_> {
	/// Validate the current input and submit a search for the active mode.
	///
	/// A term that is empty after trimming transitions straight to the
	/// rejected phase; no ticket is issued and nothing reaches the network.
	/// Any outstanding ticket is invalidated so a settlement from an earlier
	/// submission cannot displace the rejection.
	pub(crate) fn submit(&mut self) {
		match SearchRequest::new(self.mode, self.search_input.text()) {
			Some(request) => {
				self.fetch.submit(request);
				self.transition(SearchEvent::Submitted);
			}
			None => {
				self.fetch.invalidate();
				self.transition(SearchEvent::Rejected(EMPTY_QUERY_MESSAGE.to_string()));
			}
		}
	}

	/// Drain settled outcomes waiting on the receiver channel.
	pub(crate) fn pump_fetch_outcomes(&mut self) {
		loop {
			match self.fetch.try_recv() {
				Ok(settled) => self.handle_outcome(settled),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	/// Apply a settlement if it corresponds to the most recent submission.
	fn handle_outcome(&mut self, settled: FetchOutcome) {
		if !self.fetch.is_current(settled.id) {
			return;
		}

		self.fetch.settle(settled.id);
		self.transition(SearchEvent::Settled(settled.outcome));
		self.reset_selection();
	}

	/// Advance the phase machine by one event.
	pub(crate) fn transition(&mut self, event: SearchEvent) {
		let phase = std::mem::take(&mut self.phase);
		self.phase = phase.apply(event);
	}
}
