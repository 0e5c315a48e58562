//! Blocking HTTP client for the book-search backend.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use thiserror::Error;

use super::SearchRequest;
use super::models::SearchResult;

/// Any condition preventing a successful, parseable 2xx response.
///
/// The UI collapses all of these into one human-readable message; the
/// variants exist so the message names what actually went wrong.
#[derive(Debug, Error)]
pub enum FetchError {
	/// The request could not be sent, timed out, or the body did not parse.
	#[error("{0}")]
	Request(#[from] reqwest::Error),
	/// The backend answered with a non-2xx status.
	#[error("backend returned {status}")]
	BadStatus {
		/// Status reported by the backend.
		status: StatusCode,
	},
}

/// A configured connection to the book-search backend.
pub struct BooksClient {
	http: Client,
	base_url: String,
}

impl BooksClient {
	/// Build a client for the backend at `base_url` with a per-request
	/// timeout.
	pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
		let http = Client::builder().timeout(timeout).build()?;
		Ok(Self {
			http,
			base_url: base_url.into(),
		})
	}

	/// Issue exactly one GET for the submission and parse the body.
	pub fn search(&self, request: &SearchRequest) -> Result<SearchResult, FetchError> {
		let url = request.url(&self.base_url);
		let response = self
			.http
			.get(url)
			.header(ACCEPT, "application/json")
			.send()?;

		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::BadStatus { status });
		}

		Ok(response.json()?)
	}
}
