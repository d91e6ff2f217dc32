//! Error types and handling for rgview core

use thiserror::Error;

/// Result type alias for rgview operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for rgview core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Request argument errors
    #[error("Argument error: {0}")]
    Argument(#[from] ArgumentError),

    /// External process errors
    #[error("Process error: {0}")]
    Process(#[from] ProcessError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Search executable not found: {path}")]
    SearchExecutableNotFound { path: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

/// Errors in user-supplied search or endpoint arguments
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Search query must not be empty")]
    EmptyQuery,

    #[error("At least one search path is required")]
    NoPaths,

    #[error("Unbalanced {quote} quote starting at position {position}")]
    UnbalancedQuote { quote: char, position: usize },

    #[error("Trailing backslash with nothing to escape")]
    TrailingEscape,

    #[error("Invalid parameters: {message}")]
    InvalidParameters { message: String },
}

/// Failures while running an external program
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Process exited with code {code}: {stderr}")]
    ExitStatus { code: i32, stderr: String },
}

/// Problems with a single line of search output.
///
/// These never abort a search; the offending line is logged and skipped.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed JSON record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Match record is missing field: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}
