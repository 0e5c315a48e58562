//! UI building blocks shared across rendering and state modules.

/// Message paragraphs for idle, empty, and error states.
pub mod messages;
/// Input prompt rendering and progress display.
pub mod prompt;
/// Table row construction from book records.
pub mod rows;
/// Mode selector line.
pub mod tabs;
/// Table rendering and configuration.
pub mod tables;

pub use messages::render_message;
pub use prompt::{InputContext, ProgressState, render_input};
pub use rows::build_book_rows;
pub use tables::{RESULT_HEADERS, TableSpec, render_table, result_widths};
pub use tabs::render_mode_tabs;
