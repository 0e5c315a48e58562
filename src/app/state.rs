//! Search lifecycle state, modeled as explicit phases with pure transitions.
//!
//! The phase machine is the single mutable record the UI owns. Transitions
//! consume the current phase and an event and produce the next phase, so the
//! whole lifecycle is unit-testable without a terminal.

use crate::api::{FetchError, SearchResult};

/// Fixed message shown when a submission is empty after trimming.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search item";

/// Message shown when a successful response carries zero items.
pub const NO_BOOKS_MESSAGE: &str = "No books found matching your search criteria.";

/// Hint shown before the first submission.
pub const IDLE_HINT: &str = "Type a query and press Enter to search.";

/// Where the search lifecycle currently rests.
///
/// `Idle` plus one of `Rejected`, `Loaded`, or `Failed` are the externally
/// visible rest states; `Loading` persists only while a submission is in
/// flight. Any rest state changes only on a new user-initiated submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchPhase {
	/// Nothing submitted yet.
	#[default]
	Idle,
	/// A submission is in flight.
	Loading,
	/// The last submission failed local validation.
	Rejected(String),
	/// The last submission settled successfully.
	Loaded(SearchResult),
	/// The last submission settled with a transport failure.
	Failed(String),
}

/// Events that drive the phase machine.
#[derive(Debug)]
pub enum SearchEvent {
	/// A valid submission went out on the wire.
	Submitted,
	/// A submission was rejected before reaching the network.
	Rejected(String),
	/// The in-flight submission settled.
	Settled(Result<SearchResult, FetchError>),
}

impl SearchPhase {
	/// Apply one event, consuming the current phase.
	///
	/// A settlement discards whatever was displayed before, so after a
	/// failure the error message is the sole visible state.
	#[must_use]
	pub fn apply(self, event: SearchEvent) -> SearchPhase {
		match event {
			SearchEvent::Submitted => SearchPhase::Loading,
			SearchEvent::Rejected(message) => SearchPhase::Rejected(message),
			SearchEvent::Settled(Ok(result)) => SearchPhase::Loaded(result),
			SearchEvent::Settled(Err(err)) => SearchPhase::Failed(format!("Error: {err}")),
		}
	}

	/// Whether a submission is awaiting its outcome.
	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self, SearchPhase::Loading)
	}

	/// The loaded result, when this phase carries one.
	#[must_use]
	pub fn result(&self) -> Option<&SearchResult> {
		match self {
			SearchPhase::Loaded(result) => Some(result),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::{BookRecord, BooksClient, SearchMode, SearchRequest};

	fn loaded_one() -> SearchPhase {
		SearchPhase::Loaded(SearchResult {
			total_items: Some(1),
			items: vec![BookRecord::default()],
		})
	}

	fn transport_error() -> FetchError {
		// Build a real transport error by failing a connect to a closed port.
		let client =
			BooksClient::new("http://127.0.0.1:1", std::time::Duration::from_secs(1))
				.expect("client builds");
		let request = SearchRequest::new(SearchMode::All, "x").expect("valid input");
		client.search(&request).expect_err("connect fails")
	}

	#[test]
	fn submission_enters_loading() {
		let phase = SearchPhase::Idle.apply(SearchEvent::Submitted);
		assert!(phase.is_loading());
	}

	#[test]
	fn rejection_carries_the_validation_message() {
		let phase = SearchPhase::Idle.apply(SearchEvent::Rejected(EMPTY_QUERY_MESSAGE.to_string()));
		assert_eq!(
			phase,
			SearchPhase::Rejected(EMPTY_QUERY_MESSAGE.to_string())
		);
	}

	#[test]
	fn successful_settlement_loads_the_result() {
		let result = SearchResult {
			total_items: Some(2),
			items: Vec::new(),
		};
		let phase = SearchPhase::Loading.apply(SearchEvent::Settled(Ok(result.clone())));
		assert_eq!(phase.result(), Some(&result));
		assert!(!phase.is_loading());
	}

	#[test]
	fn failed_settlement_discards_the_previous_result() {
		// A new submission from a loaded state that then fails must leave
		// only the error visible.
		let phase = loaded_one()
			.apply(SearchEvent::Submitted)
			.apply(SearchEvent::Settled(Err(transport_error())));

		match phase {
			SearchPhase::Failed(message) => {
				assert!(message.starts_with("Error: "), "message: {message}");
			}
			other => panic!("expected Failed, got {other:?}"),
		}
	}

	#[test]
	fn resubmission_from_any_rest_state_enters_loading() {
		for rest in [
			SearchPhase::Idle,
			SearchPhase::Rejected(EMPTY_QUERY_MESSAGE.to_string()),
			loaded_one(),
			SearchPhase::Failed("Error: boom".to_string()),
		] {
			assert!(rest.apply(SearchEvent::Submitted).is_loading());
		}
	}
}
