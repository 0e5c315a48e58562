//! Table row construction for book records.

use ratatui::widgets::Row;

use crate::api::BookRecord;

/// Build one table row per record, in input order.
///
/// The projection is a pure function of the records: absent fields become
/// the `N/A` placeholder and author lists join with a comma and a space.
/// Records with duplicate ids are kept as-is; uniqueness is the backend's
/// invariant, not the renderer's.
pub fn build_book_rows(items: &[BookRecord]) -> Vec<Row<'static>> {
	items
		.iter()
		.map(|record| Row::new(record.cells().to_vec()))
		.collect()
}
