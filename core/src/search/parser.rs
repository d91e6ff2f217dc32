//! Parser for ripgrep's `--json` output
//!
//! ripgrep emits one JSON object per line: `begin`, `match`, `context`,
//! `end` and `summary` records. Only `match` records are kept; anything that
//! fails to parse is logged and skipped.

use super::highlight::SubmatchSpan;
use crate::error::ParseError;
use base64::Engine;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

/// Envelope shared by every ripgrep JSON record
#[derive(Debug, Deserialize)]
struct Record {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// ripgrep's "arbitrary data": UTF-8 text, or base64 for anything else
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RgData {
    Text { text: String },
    Bytes { bytes: String },
}

impl RgData {
    /// Raw bytes as ripgrep saw them
    pub fn into_bytes(self) -> Result<Vec<u8>, ParseError> {
        match self {
            RgData::Text { text } => Ok(text.into_bytes()),
            RgData::Bytes { bytes } => Ok(base64::engine::general_purpose::STANDARD.decode(bytes)?),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RgSubmatch {
    start: usize,
    end: usize,
}

#[derive(Debug, Deserialize)]
struct RgMatch {
    path: Option<RgData>,
    lines: RgData,
    line_number: Option<u64>,
    #[serde(default)]
    submatches: Vec<RgSubmatch>,
}

/// One matched line, still in raw form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMatch {
    /// Path exactly as ripgrep reported it (lossily decoded)
    pub path: String,
    /// 1-based line number
    pub line_number: u64,
    /// Raw line bytes with the line terminator removed
    pub line: Vec<u8>,
    /// Submatch byte spans, in the order ripgrep listed them
    pub spans: Vec<SubmatchSpan>,
}

impl ParsedMatch {
    pub fn path_buf(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }
}

/// Parse one output line; `Ok(None)` for records that are not matches
pub fn parse_record(line: &str) -> Result<Option<ParsedMatch>, ParseError> {
    let record: Record = serde_json::from_str(line)?;
    if record.kind != "match" {
        return Ok(None);
    }

    let data: RgMatch = serde_json::from_value(record.data)?;
    let path = data
        .path
        .ok_or(ParseError::MissingField { field: "path" })?
        .into_bytes()?;
    let line_number = data
        .line_number
        .ok_or(ParseError::MissingField {
            field: "line_number",
        })?;

    let mut line = data.lines.into_bytes()?;
    while matches!(line.last(), Some(b'\n') | Some(b'\r')) {
        line.pop();
    }

    Ok(Some(ParsedMatch {
        path: String::from_utf8_lossy(&path).into_owned(),
        line_number,
        line,
        spans: data
            .submatches
            .into_iter()
            .map(|s| SubmatchSpan::new(s.start, s.end))
            .collect(),
    }))
}

/// Parse a complete buffered stdout, keeping matches in output order
pub fn parse_output(stdout: &[u8]) -> Vec<ParsedMatch> {
    let text = String::from_utf8_lossy(stdout);
    let mut matches = Vec::new();
    let mut skipped = 0usize;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(line) {
            Ok(Some(m)) => matches.push(m),
            Ok(None) => {}
            Err(e) => {
                skipped += 1;
                debug!("Skipping unparseable ripgrep line: {}", e);
            }
        }
    }

    if skipped > 0 {
        debug!("Skipped {} unparseable ripgrep lines", skipped);
    }
    matches
}
