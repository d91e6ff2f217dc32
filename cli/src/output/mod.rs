//! Terminal rendering for search results and directory listings

pub mod terminal;

pub use terminal::{plain_text, render_dir_entries, render_results, render_summary};
