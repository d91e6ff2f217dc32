//! Search request types and boundary normalization

use crate::config::CaseMode;
use crate::error::ArgumentError;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A fully validated search request. Immutable per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    /// Text or pattern handed to ripgrep
    pub query: String,
    /// Absolute search roots; the first is the primary root
    pub paths: Vec<PathBuf>,
    /// Bare extensions such as `py`, without dot or glob
    pub extensions: Vec<String>,
    /// Case handling
    pub case: CaseMode,
    /// Raw passthrough flags, tokenized at build time
    pub extra_args: Option<String>,
}

impl SearchRequest {
    /// Create a request for one query over the given roots
    pub fn new<I, P>(query: impl Into<String>, paths: I) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let query = query.into();
        if query.is_empty() {
            return Err(ArgumentError::EmptyQuery);
        }

        let paths: Vec<PathBuf> = paths
            .into_iter()
            .filter(|p| !p.as_ref().trim().is_empty())
            .map(|p| paths::normalize(p.as_ref()))
            .collect();
        if paths.is_empty() {
            return Err(ArgumentError::NoPaths);
        }

        Ok(Self {
            query,
            paths,
            extensions: Vec::new(),
            case: CaseMode::default(),
            extra_args: None,
        })
    }

    /// Set the extension filter from any mix of `py`, `.py`, `*.py` entries
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .filter_map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }

    /// Set the case mode
    pub fn with_case(mut self, case: CaseMode) -> Self {
        self.case = case;
        self
    }

    /// Set the passthrough argument string; blank strings are dropped
    pub fn with_extra_args(mut self, extra: impl Into<String>) -> Self {
        let extra = extra.into();
        self.extra_args = if extra.trim().is_empty() {
            None
        } else {
            Some(extra)
        };
        self
    }

    /// Root that relative paths reported by ripgrep are joined against
    pub fn primary_root(&self) -> &PathBuf {
        &self.paths[0]
    }
}

/// Strip whitespace and any leading `*.`/`.`; `None` for empty entries
fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let bare = trimmed
        .strip_prefix("*.")
        .or_else(|| trimmed.strip_prefix('.'))
        .unwrap_or(trimmed)
        .trim();
    if bare.is_empty() {
        None
    } else {
        Some(bare.to_string())
    }
}

/// A string or a list of strings, as the UI sends either
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Items split on commas when a single string was sent
    pub fn split_commas(self) -> Vec<String> {
        match self {
            OneOrMany::One(s) => s.split(',').map(str::to_string).collect(),
            OneOrMany::Many(v) => v,
        }
    }

    /// Items taken verbatim
    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

/// Loosely-typed search payload as received from the UI
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub path: Option<OneOrMany>,
    #[serde(default)]
    pub paths: Option<OneOrMany>,
    #[serde(default)]
    pub extensions: Option<OneOrMany>,
    #[serde(default)]
    pub case_sensitive: Option<bool>,
    #[serde(default)]
    pub extra_args: Option<String>,
}

impl RawSearchRequest {
    /// Normalize into a typed request, filling the case mode from `default_case`
    pub fn into_request(self, default_case: CaseMode) -> Result<SearchRequest, ArgumentError> {
        let mut paths = Vec::new();
        if let Some(path) = self.path {
            paths.extend(path.into_vec());
        }
        if let Some(more) = self.paths {
            paths.extend(more.into_vec());
        }

        let mut request = SearchRequest::new(self.query, paths)?
            .with_case(CaseMode::from_flag(self.case_sensitive, default_case));

        if let Some(extensions) = self.extensions {
            request = request.with_extensions(extensions.split_commas());
        }
        if let Some(extra) = self.extra_args {
            request = request.with_extra_args(extra);
        }

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_query_rejected() {
        assert_eq!(
            SearchRequest::new("", ["/proj"]).unwrap_err(),
            ArgumentError::EmptyQuery
        );
    }

    #[test]
    fn test_blank_paths_rejected() {
        assert_eq!(
            SearchRequest::new("foo", ["", "  "]).unwrap_err(),
            ArgumentError::NoPaths
        );
    }

    #[test]
    fn test_extensions_are_normalized() {
        let request =
            SearchRequest::new("foo", ["/proj"]).unwrap().with_extensions([" py", ".rs", "*.js", "", " . "]);
        assert_eq!(request.extensions, vec!["py", "rs", "js"]);
    }

    #[test]
    fn test_raw_request_with_comma_string() {
        let raw: RawSearchRequest = serde_json::from_value(json!({
            "query": "foo",
            "path": "/proj",
            "extensions": "py, js",
            "case_sensitive": false
        }))
        .unwrap();

        let request = raw.into_request(CaseMode::Smart).unwrap();
        assert_eq!(request.paths, vec![PathBuf::from("/proj")]);
        assert_eq!(request.extensions, vec!["py", "js"]);
        assert_eq!(request.case, CaseMode::Insensitive);
        assert!(request.extra_args.is_none());
    }

    #[test]
    fn test_raw_request_with_path_list_and_default_case() {
        let raw: RawSearchRequest = serde_json::from_value(json!({
            "query": "foo",
            "paths": ["/a", "/b"],
            "extensions": ["md"],
            "extra_args": "   "
        }))
        .unwrap();

        let request = raw.into_request(CaseMode::Sensitive).unwrap();
        assert_eq!(request.paths.len(), 2);
        assert_eq!(request.primary_root(), &PathBuf::from("/a"));
        assert_eq!(request.case, CaseMode::Sensitive);
        assert!(request.extra_args.is_none());
    }

    #[test]
    fn test_raw_request_without_path() {
        let raw: RawSearchRequest = serde_json::from_value(json!({"query": "foo"})).unwrap();
        assert_eq!(
            raw.into_request(CaseMode::Smart).unwrap_err(),
            ArgumentError::NoPaths
        );
    }
}
