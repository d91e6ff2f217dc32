//! Options carried from one interactive search to the next

use rgview_core::search::{OneOrMany, RawSearchRequest};
use rgview_core::CaseMode;
use std::path::PathBuf;

/// Case modes in the order the prompt lists them
pub const CASE_CHOICES: [CaseMode; 3] = [CaseMode::Smart, CaseMode::Sensitive, CaseMode::Insensitive];

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Primary search root
    pub root: PathBuf,
    /// Comma-separated extensions as typed
    pub extensions: String,
    pub case: CaseMode,
    /// Extra ripgrep flags as typed
    pub extra_args: String,
}

impl Session {
    pub fn new(root: PathBuf, case: CaseMode) -> Self {
        Self {
            root,
            extensions: String::new(),
            case,
            extra_args: String::new(),
        }
    }

    /// Index of the current case mode in [`CASE_CHOICES`]
    pub fn case_index(&self) -> usize {
        CASE_CHOICES
            .iter()
            .position(|c| *c == self.case)
            .unwrap_or(0)
    }

    /// Build the same payload shape the UI sends to `run_ripgrep`
    pub fn to_raw_request(&self, query: &str) -> RawSearchRequest {
        let case_sensitive = match self.case {
            CaseMode::Smart => None,
            CaseMode::Sensitive => Some(true),
            CaseMode::Insensitive => Some(false),
        };

        RawSearchRequest {
            query: query.to_string(),
            path: Some(OneOrMany::One(self.root.to_string_lossy().into_owned())),
            paths: None,
            extensions: Some(OneOrMany::One(self.extensions.clone())),
            case_sensitive,
            extra_args: Some(self.extra_args.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_session() {
        let mut session = Session::new(PathBuf::from("/proj"), CaseMode::Smart);
        session.extensions = "rs, toml".to_string();
        session.case = CaseMode::Insensitive;
        session.extra_args = "--hidden".to_string();

        let request = session
            .to_raw_request("needle")
            .into_request(CaseMode::Sensitive)
            .unwrap();

        assert_eq!(request.query, "needle");
        assert_eq!(request.paths, vec![PathBuf::from("/proj")]);
        assert_eq!(request.extensions, vec!["rs", "toml"]);
        assert_eq!(request.case, CaseMode::Insensitive);
        assert_eq!(request.extra_args.as_deref(), Some("--hidden"));
    }

    #[test]
    fn test_blank_options_are_dropped() {
        let session = Session::new(PathBuf::from("/proj"), CaseMode::Smart);
        let request = session
            .to_raw_request("needle")
            .into_request(CaseMode::Smart)
            .unwrap();

        assert!(request.extensions.is_empty());
        assert_eq!(request.extra_args, None);
        assert_eq!(request.case, CaseMode::Smart);
    }

    #[test]
    fn test_case_index() {
        let mut session = Session::new(PathBuf::from("/"), CaseMode::Smart);
        assert_eq!(session.case_index(), 0);
        session.case = CaseMode::Insensitive;
        assert_eq!(session.case_index(), 2);
    }
}
