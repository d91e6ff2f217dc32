//! Built-in endpoints

pub mod directory;
pub mod editor;
pub mod search;

pub use directory::{ListDirectoryEndpoint, ListDirectoryEndpointFactory};
pub use editor::{OpenInEditorEndpoint, OpenInEditorEndpointFactory};
pub use search::{SearchEndpoint, SearchEndpointFactory};
