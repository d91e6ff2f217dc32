//! CLI command implementations

pub mod endpoints;
pub mod interactive;
pub mod ls;
pub mod open;
pub mod pick;
pub mod search;
pub mod serve;

pub use endpoints::endpoints_command;
pub use interactive::interactive_command;
pub use ls::ls_command;
pub use open::open_command;
pub use pick::pick_command;
pub use search::{search_command, SearchArgs};
pub use serve::serve_command;
