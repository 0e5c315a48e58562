//! Request model and transport for the book-search backend.
//!
//! The backend exposes four logical routes: a free-text search taking the
//! term as a `q` parameter, and three field-scoped searches taking the term
//! as the final path segment. Everything in this module up to
//! [`BooksClient`] is pure and deterministic so the route table can be
//! tested without a network.

mod client;
pub mod fetch;
mod models;

pub use client::{BooksClient, FetchError};
pub use fetch::FetchRuntime;
pub use models::{BookRecord, MISSING_FIELD, SearchResult, VolumeInfo};

use clap::ValueEnum;
use serde::Deserialize;

/// Discriminator selecting which backend route a query is sent to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
	/// Free-text search across all fields.
	#[default]
	All,
	/// Search by book title.
	Title,
	/// Search by author name.
	Author,
	/// Search by category.
	Category,
}

impl SearchMode {
	/// Every mode, in the order they cycle through the UI.
	pub const ALL: [SearchMode; 4] = [
		SearchMode::All,
		SearchMode::Title,
		SearchMode::Author,
		SearchMode::Category,
	];

	/// Human-readable label for the mode selector.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			SearchMode::All => "All Books",
			SearchMode::Title => "Title",
			SearchMode::Author => "Author",
			SearchMode::Category => "Category",
		}
	}

	/// The mode after this one, wrapping around.
	#[must_use]
	pub fn next(self) -> Self {
		match self {
			SearchMode::All => SearchMode::Title,
			SearchMode::Title => SearchMode::Author,
			SearchMode::Author => SearchMode::Category,
			SearchMode::Category => SearchMode::All,
		}
	}
}

/// A validated search submission.
///
/// Construction is the validation boundary: a term that is empty after
/// trimming never becomes a `SearchRequest`, so it can never reach the
/// network layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
	/// Route discriminator.
	pub mode: SearchMode,
	/// Trimmed, non-empty query term.
	term: String,
}

impl SearchRequest {
	/// Validate raw input into a request. Returns `None` when the term is
	/// empty or whitespace-only.
	pub fn new(mode: SearchMode, raw: &str) -> Option<Self> {
		let term = raw.trim();
		if term.is_empty() {
			return None;
		}
		Some(Self {
			mode,
			term: term.to_string(),
		})
	}

	/// The validated query term.
	#[must_use]
	pub fn term(&self) -> &str {
		&self.term
	}

	/// Build the full request URL against `base`.
	///
	/// `All` passes the term as the `q` parameter; the scoped modes append it
	/// as a percent-encoded path segment. Identical requests always produce
	/// identical URLs.
	#[must_use]
	pub fn url(&self, base: &str) -> String {
		let base = base.trim_end_matches('/');
		let term = urlencoding::encode(&self.term);
		match self.mode {
			SearchMode::All => format!("{base}/books?q={term}"),
			SearchMode::Title => format!("{base}/books/title/{term}"),
			SearchMode::Author => format!("{base}/books/author/{term}"),
			SearchMode::Category => format!("{base}/books/category/{term}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const BASE: &str = "http://localhost:8000";

	#[test]
	fn whitespace_only_input_is_rejected() {
		assert_eq!(SearchRequest::new(SearchMode::All, ""), None);
		assert_eq!(SearchRequest::new(SearchMode::Title, "   \t "), None);
	}

	#[test]
	fn term_is_trimmed_before_use() {
		let request = SearchRequest::new(SearchMode::All, "  dune  ").expect("valid input");
		assert_eq!(request.term(), "dune");
	}

	#[test]
	fn each_mode_targets_its_route() {
		let urls: Vec<String> = SearchMode::ALL
			.iter()
			.map(|mode| {
				SearchRequest::new(*mode, "dune")
					.expect("valid input")
					.url(BASE)
			})
			.collect();

		assert_eq!(
			urls,
			vec![
				"http://localhost:8000/books?q=dune",
				"http://localhost:8000/books/title/dune",
				"http://localhost:8000/books/author/dune",
				"http://localhost:8000/books/category/dune",
			]
		);
	}

	#[test]
	fn terms_are_percent_encoded() {
		let request = SearchRequest::new(SearchMode::Title, "the left hand of darkness")
			.expect("valid input");
		assert_eq!(
			request.url(BASE),
			"http://localhost:8000/books/title/the%20left%20hand%20of%20darkness"
		);

		let request = SearchRequest::new(SearchMode::All, "C++ & Rust?").expect("valid input");
		assert_eq!(
			request.url(BASE),
			"http://localhost:8000/books?q=C%2B%2B%20%26%20Rust%3F"
		);

		let request = SearchRequest::new(SearchMode::Author, "Stanisław Lem").expect("valid input");
		assert_eq!(
			request.url(BASE),
			"http://localhost:8000/books/author/Stanis%C5%82aw%20Lem"
		);
	}

	#[test]
	fn trailing_slash_on_base_is_tolerated() {
		let request = SearchRequest::new(SearchMode::Category, "fiction").expect("valid input");
		assert_eq!(
			request.url("http://localhost:8000/"),
			"http://localhost:8000/books/category/fiction"
		);
	}

	#[test]
	fn mode_cycle_wraps_around() {
		let mut mode = SearchMode::All;
		for expected in [
			SearchMode::Title,
			SearchMode::Author,
			SearchMode::Category,
			SearchMode::All,
		] {
			mode = mode.next();
			assert_eq!(mode, expected);
		}
	}
}
