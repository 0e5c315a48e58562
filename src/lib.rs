//! Interactive terminal client for a book-search service.
//!
//! `tome` wraps a backend that proxies the Google Books API: the user types
//! a query, picks a search mode (free text, title, author, or category), and
//! gets the matching volumes in a five-column table. One HTTP GET goes out
//! per submission; the lifecycle between input and settled result is modeled
//! as an explicit state machine in [`app::state`].

pub mod api;
pub mod app;
pub mod app_dirs;
pub mod cli;
pub mod components;
pub mod input;
pub mod settings;
pub mod style;

pub use app::App;
