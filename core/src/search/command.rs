//! Builds ripgrep invocations from search requests

use super::args::split_arguments;
use super::request::SearchRequest;
use crate::config::{AppConfig, CaseMode};
use crate::error::{ConfigError, Result};
use std::path::PathBuf;
use tracing::debug;

/// A ready-to-spawn ripgrep invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

/// Assembles argument vectors for the configured search executable
pub struct CommandBuilder<'a> {
    config: &'a AppConfig,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Build `[query] [paths...] [-g *.ext ...] [case flag] --json [extra...]`
    pub fn build(&self, request: &SearchRequest) -> Result<SearchCommand> {
        let program = &self.config.search_executable;
        if !program.is_file() {
            return Err(ConfigError::SearchExecutableNotFound {
                path: program.display().to_string(),
            }
            .into());
        }

        let args = build_args(request)?;
        debug!("ripgrep command: {} {:?}", program.display(), args);

        Ok(SearchCommand {
            program: program.clone(),
            args,
        })
    }
}

/// Argument vector for a request, without the program
pub fn build_args(request: &SearchRequest) -> Result<Vec<String>> {
    let mut args = Vec::new();

    // A leading dash would otherwise be parsed as a flag
    if request.query.starts_with('-') {
        args.push("-e".to_string());
    }
    args.push(request.query.clone());

    for path in &request.paths {
        args.push(path.to_string_lossy().into_owned());
    }

    for ext in &request.extensions {
        args.push("-g".to_string());
        args.push(format!("*.{}", ext));
    }

    match request.case {
        CaseMode::Sensitive => {}
        CaseMode::Insensitive => args.push("-i".to_string()),
        CaseMode::Smart => args.push("--smart-case".to_string()),
    }

    args.push("--json".to_string());

    if let Some(extra) = &request.extra_args {
        args.extend(split_arguments(extra)?);
    }

    Ok(args)
}
