//! Response body shapes for the book-search backend.
//!
//! The wire format follows the Google Books volume shape: every descriptive
//! field may be absent, and absent fields project to the `N/A` placeholder
//! when displayed.

use serde::Deserialize;

/// Placeholder rendered for any missing or empty field.
pub const MISSING_FIELD: &str = "N/A";

/// A successful search response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchResult {
	/// Total match count reported by the backend, when it reports one.
	#[serde(rename = "totalItems")]
	pub total_items: Option<u64>,
	/// Result records, in backend order.
	pub items: Vec<BookRecord>,
}

/// One search result item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BookRecord {
	/// Backend identifier for the volume.
	pub id: String,
	/// Descriptive metadata, all fields optional.
	#[serde(rename = "volumeInfo")]
	pub volume_info: VolumeInfo,
}

/// Descriptive metadata attached to a volume.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VolumeInfo {
	pub title: Option<String>,
	pub subtitle: Option<String>,
	pub authors: Option<Vec<String>>,
	pub publisher: Option<String>,
	pub published_date: Option<String>,
}

impl BookRecord {
	/// Project the record into its five display cells, in column order:
	/// title, subtitle, authors, publisher, published date.
	///
	/// Authors join with a comma-and-space separator; everything missing or
	/// empty becomes [`MISSING_FIELD`].
	#[must_use]
	pub fn cells(&self) -> [String; 5] {
		let info = &self.volume_info;
		[
			present_or_missing(info.title.as_deref()),
			present_or_missing(info.subtitle.as_deref()),
			authors_cell(info.authors.as_deref()),
			present_or_missing(info.publisher.as_deref()),
			present_or_missing(info.published_date.as_deref()),
		]
	}
}

fn present_or_missing(value: Option<&str>) -> String {
	match value {
		Some(text) if !text.trim().is_empty() => text.to_string(),
		_ => MISSING_FIELD.to_string(),
	}
}

fn authors_cell(authors: Option<&[String]>) -> String {
	match authors {
		Some(list) if !list.is_empty() => list.join(", "),
		_ => MISSING_FIELD.to_string(),
	}
}
