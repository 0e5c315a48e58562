//! Background worker that executes search submissions off the UI thread.
//!
//! Submissions carry a monotonically increasing ticket id. The worker drains
//! its queue to the newest submission before touching the network, and the
//! runtime only treats an outcome as current when its ticket matches the
//! latest one handed out. A stale response therefore never overwrites the
//! state of a newer submission, and every applied submission settles to
//! exactly one outcome.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

use super::SearchRequest;
use super::client::{BooksClient, FetchError};
use super::models::SearchResult;

/// Commands sent to the fetch worker thread.
pub enum FetchCommand {
	/// Execute a search submission.
	Fetch {
		/// Ticket id for this submission.
		id: u64,
		/// The validated submission.
		request: SearchRequest,
	},
	/// Shut down the worker thread.
	Shutdown,
}

/// Settled outcome of one submission.
pub struct FetchOutcome {
	/// Ticket id of the submission this outcome belongs to.
	pub id: u64,
	/// The result-or-error value the submission settled to.
	pub outcome: Result<SearchResult, FetchError>,
}

/// Spawn the background fetch worker and return its channels.
pub fn spawn(client: BooksClient) -> (Sender<FetchCommand>, Receiver<FetchOutcome>) {
	let (command_tx, command_rx) = std::sync::mpsc::channel();
	let (outcome_tx, outcome_rx) = std::sync::mpsc::channel();

	thread::Builder::new()
		.name("fetch-worker".into())
		.spawn(move || worker_loop(client, command_rx, outcome_tx))
		.expect("failed to spawn fetch worker thread");

	(command_tx, outcome_rx)
}

fn worker_loop(
	client: BooksClient,
	command_rx: Receiver<FetchCommand>,
	outcome_tx: Sender<FetchOutcome>,
) {
	while let Ok(command) = command_rx.recv() {
		match command {
			FetchCommand::Fetch { id, request } => {
				// Skip straight to the newest submission when several queued
				// up while a request was on the wire.
				let Some((id, request)) = drain_to_latest(&command_rx, id, request) else {
					break;
				};

				let outcome = client.search(&request);

				// If the receiver is gone, just exit gracefully.
				if outcome_tx.send(FetchOutcome { id, outcome }).is_err() {
					break;
				}
			}
			FetchCommand::Shutdown => break,
		}
	}
}

/// Drain the command channel and return the most recent submission, or
/// `None` when a shutdown was queued behind it.
fn drain_to_latest(
	rx: &Receiver<FetchCommand>,
	mut id: u64,
	mut request: SearchRequest,
) -> Option<(u64, SearchRequest)> {
	loop {
		match rx.try_recv() {
			Ok(FetchCommand::Fetch {
				id: newer_id,
				request: newer_request,
			}) => {
				id = newer_id;
				request = newer_request;
			}
			Ok(FetchCommand::Shutdown) => return None,
			Err(_) => return Some((id, request)),
		}
	}
}

/// Handle for issuing submissions and collecting their outcomes.
///
/// Tracks the most recent ticket so callers can discard outcomes of
/// superseded submissions.
pub struct FetchRuntime {
	tx: Sender<FetchCommand>,
	rx: Receiver<FetchOutcome>,
	next_id: u64,
	current_id: Option<u64>,
}

impl FetchRuntime {
	/// Create a runtime with its background worker.
	pub fn new(client: BooksClient) -> Self {
		let (tx, rx) = spawn(client);
		Self {
			tx,
			rx,
			next_id: 0,
			current_id: None,
		}
	}

	/// Submit a request, superseding any outstanding one. Returns the ticket.
	pub fn submit(&mut self, request: SearchRequest) -> u64 {
		self.next_id = self.next_id.wrapping_add(1);
		let id = self.next_id;
		self.current_id = Some(id);

		let _ = self.tx.send(FetchCommand::Fetch { id, request });

		id
	}

	/// Try to receive a settled outcome without blocking.
	pub fn try_recv(&self) -> Result<FetchOutcome, TryRecvError> {
		self.rx.try_recv()
	}

	/// Whether an outcome belongs to the most recent submission.
	#[must_use]
	pub fn is_current(&self, id: u64) -> bool {
		self.current_id == Some(id)
	}

	/// Whether a submission is still awaiting its outcome.
	#[must_use]
	pub fn is_in_flight(&self) -> bool {
		self.current_id.is_some()
	}

	/// Mark the current submission as settled.
	pub fn settle(&mut self, id: u64) {
		if self.is_current(id) {
			self.current_id = None;
		}
	}

	/// Drop the outstanding ticket without settling it. Its outcome will
	/// fail the [`FetchRuntime::is_current`] check when it arrives.
	pub fn invalidate(&mut self) {
		self.current_id = None;
	}

	/// Shut down the fetch worker.
	pub fn shutdown(&self) {
		let _ = self.tx.send(FetchCommand::Shutdown);
	}
}

impl Drop for FetchRuntime {
	fn drop(&mut self) {
		self.shutdown();
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;
	use crate::api::SearchMode;

	fn offline_runtime() -> FetchRuntime {
		// Port 1 is reserved; submissions settle quickly with a connect error.
		let client =
			BooksClient::new("http://127.0.0.1:1", Duration::from_secs(1)).expect("client builds");
		FetchRuntime::new(client)
	}

	fn request(term: &str) -> SearchRequest {
		SearchRequest::new(SearchMode::All, term).expect("valid input")
	}

	#[test]
	fn newer_submission_supersedes_older_ticket() {
		let mut runtime = offline_runtime();

		let first = runtime.submit(request("one"));
		let second = runtime.submit(request("two"));

		assert!(!runtime.is_current(first));
		assert!(runtime.is_current(second));
		assert!(runtime.is_in_flight());
	}

	#[test]
	fn settling_the_current_ticket_clears_in_flight_state() {
		let mut runtime = offline_runtime();
		let id = runtime.submit(request("one"));

		runtime.settle(id);
		assert!(!runtime.is_in_flight());
	}

	#[test]
	fn settling_a_stale_ticket_changes_nothing() {
		let mut runtime = offline_runtime();
		let first = runtime.submit(request("one"));
		let second = runtime.submit(request("two"));

		runtime.settle(first);
		assert!(runtime.is_current(second));
		assert!(runtime.is_in_flight());
	}

	#[test]
	fn invalidating_drops_the_outstanding_ticket() {
		let mut runtime = offline_runtime();
		let id = runtime.submit(request("one"));

		runtime.invalidate();
		assert!(!runtime.is_in_flight());

		// The worker still reports the outcome, but it no longer counts
		// as current and would be discarded on arrival.
		let settled = runtime
			.rx
			.recv_timeout(Duration::from_secs(5))
			.expect("worker reports an outcome");
		assert_eq!(settled.id, id);
		assert!(!runtime.is_current(settled.id));
	}

	#[test]
	fn each_submission_settles_to_one_outcome() {
		let mut runtime = offline_runtime();
		let id = runtime.submit(request("one"));

		let settled = runtime
			.rx
			.recv_timeout(Duration::from_secs(5))
			.expect("worker reports an outcome");
		assert_eq!(settled.id, id);
		assert!(settled.outcome.is_err(), "no backend is listening");
	}
}
