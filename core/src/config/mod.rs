//! Configuration module for rgview core
//!
//! Exports resolved data types and executable discovery. File loading lives in CLI layer.

pub mod locate;
pub mod types;

pub use locate::{bundled_search_executable, locate_search_executable, search_executable_name};
pub use types::{AppConfig, CaseMode, EditorConfig};
