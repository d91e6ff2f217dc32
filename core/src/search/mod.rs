//! ripgrep search pipeline: request -> command -> process -> parse -> group

pub mod args;
pub mod command;
pub mod group;
pub mod highlight;
pub mod parser;
pub mod request;

pub use args::split_arguments;
pub use command::{build_args, CommandBuilder, SearchCommand};
pub use group::{group_by_file, GroupedResults};
pub use highlight::{escape_html, highlight_line, render_html, segment_line, Segment, SubmatchSpan};
pub use parser::{parse_output, parse_record, ParsedMatch};
pub use request::{OneOrMany, RawSearchRequest, SearchRequest};

use crate::config::AppConfig;
use crate::error::{ProcessError, Result};
use crate::paths;
use crate::process;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// One matched line ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Path as reported by ripgrep
    pub file: String,
    /// Absolute path used to open the file
    pub full_path: String,
    /// 1-based line number
    pub line_num: u64,
    /// Escaped line with `<span class="...">` around each submatch
    pub content_html: String,
    /// Decoded segments for non-HTML renderers
    #[serde(skip)]
    pub segments: Vec<Segment>,
}

impl MatchRecord {
    /// Render a parsed match against the primary search root
    pub fn from_parsed(parsed: ParsedMatch, primary_root: &Path, highlight_class: &str) -> Self {
        let full_path = paths::resolve_reported(&parsed.path_buf(), primary_root);
        let segments = segment_line(&parsed.line, &parsed.spans);
        let content_html = render_html(&segments, highlight_class);

        Self {
            file: parsed.path,
            full_path: full_path.display().to_string(),
            line_num: parsed.line_number,
            content_html,
            segments,
        }
    }
}

/// Successful search payload: `{ success, data, count }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub data: GroupedResults,
    pub count: usize,
}

impl SearchResponse {
    pub fn new(data: GroupedResults) -> Self {
        let count = data.match_count();
        Self {
            success: true,
            data,
            count,
        }
    }
}

/// Turn buffered ripgrep stdout into grouped, highlighted records
pub fn collect_matches(stdout: &[u8], request: &SearchRequest, config: &AppConfig) -> GroupedResults {
    parse_output(stdout)
        .into_iter()
        .map(|m| MatchRecord::from_parsed(m, request.primary_root(), &config.highlight_class))
        .collect()
}

/// Run ripgrep for `request` and return the grouped results.
///
/// Exit code 1 means "no matches" and is not an error.
pub async fn run_search(config: &AppConfig, request: &SearchRequest) -> Result<SearchResponse> {
    let command = CommandBuilder::new(config).build(request)?;

    info!(
        "Searching for {:?} in {} path(s)",
        request.query,
        request.paths.len()
    );

    let output = process::run_to_completion(&command.program, &command.args).await?;

    debug!(
        "ripgrep exited with {} after {}ms ({} bytes of output)",
        output.exit_code,
        output.duration_ms,
        output.stdout.len()
    );

    if output.exit_code != 0 && output.exit_code != 1 {
        return Err(ProcessError::ExitStatus {
            code: output.exit_code,
            stderr: output.stderr.trim().to_string(),
        }
        .into());
    }

    let grouped = collect_matches(&output.stdout, request, config);
    info!(
        "Found {} matches in {} files",
        grouped.match_count(),
        grouped.file_count()
    );

    Ok(SearchResponse::new(grouped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, Error};

    fn match_line(path: &str, line_number: u64, text: &str, spans: &[(usize, usize)]) -> String {
        let submatches: Vec<serde_json::Value> = spans
            .iter()
            .map(|&(s, e)| serde_json::json!({"match": {"text": ""}, "start": s, "end": e}))
            .collect();
        serde_json::json!({
            "type": "match",
            "data": {
                "path": {"text": path},
                "lines": {"text": format!("{}\n", text)},
                "line_number": line_number,
                "absolute_offset": 0,
                "submatches": submatches,
            }
        })
        .to_string()
    }

    #[test]
    fn test_collect_matches_groups_and_resolves() {
        let request = SearchRequest::new("foo", ["/proj"]).unwrap();
        let config = AppConfig::new("/usr/bin/rg");
        let stdout = [
            r#"{"type":"begin","data":{"path":{"text":"b.py"}}}"#.to_string(),
            match_line("b.py", 1, "foo bar foo", &[(0, 3), (8, 11)]),
            match_line("/abs/a.py", 4, "x = foo", &[(4, 7)]),
            match_line("b.py", 7, "<foo>", &[(1, 4)]),
        ]
        .join("\n");

        let grouped = collect_matches(stdout.as_bytes(), &request, &config);
        assert_eq!(grouped.files().collect::<Vec<_>>(), vec!["b.py", "/abs/a.py"]);

        let b = grouped.get("b.py").unwrap();
        assert_eq!(
            b[0].content_html,
            r#"<span class="highlight">foo</span> bar <span class="highlight">foo</span>"#
        );
        assert_eq!(b[1].content_html, r#"&lt;<span class="highlight">foo</span>&gt;"#);
        assert!(Path::new(&b[0].full_path).ends_with("proj/b.py"));

        let a = grouped.get("/abs/a.py").unwrap();
        assert_eq!(a[0].line_num, 4);
        #[cfg(unix)]
        assert_eq!(a[0].full_path, "/abs/a.py");
    }

    #[test]
    fn test_response_payload_shape() {
        let request = SearchRequest::new("foo", ["/proj"]).unwrap();
        let config = AppConfig::new("/usr/bin/rg").with_highlight_class("hit");
        let stdout = match_line("a.rs", 2, "foo", &[(0, 3)]);

        let response = SearchResponse::new(collect_matches(stdout.as_bytes(), &request, &config));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["count"], 1);
        let record = &value["data"]["a.rs"][0];
        assert_eq!(record["file"], "a.rs");
        assert_eq!(record["line_num"], 2);
        assert_eq!(record["content_html"], r#"<span class="hit">foo</span>"#);
        assert!(record.get("full_path").is_some());
        assert!(record.get("segments").is_none());
    }

    #[tokio::test]
    async fn test_missing_executable() {
        let config = AppConfig::new("/definitely/not/here/rg");
        let request = SearchRequest::new("foo", ["/proj"]).unwrap();
        let err = run_search(&config, &request).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::SearchExecutableNotFound { .. })
        ));
    }

    #[cfg(unix)]
    mod fake_rg {
        use super::*;
        use std::os::unix::fs::PermissionsExt;

        /// Write an executable shell script standing in for ripgrep
        fn fake_rg(dir: &Path, body: &str) -> std::path::PathBuf {
            let path = dir.join("rg");
            std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[tokio::test]
        async fn test_run_search_end_to_end() {
            let dir = tempfile::tempdir().unwrap();
            let out = dir.path().join("out.jsonl");
            let lines = [
                match_line("src/main.rs", 10, "fn foo() {}", &[(3, 6)]),
                "garbage".to_string(),
                match_line("src/lib.rs", 1, "foo", &[(0, 3)]),
                match_line("src/main.rs", 12, "foo();", &[(0, 3)]),
            ];
            std::fs::write(&out, lines.join("\n")).unwrap();
            let rg = fake_rg(dir.path(), &format!("cat '{}'", out.display()));

            let config = AppConfig::new(rg);
            let request = SearchRequest::new("foo", [dir.path().to_string_lossy()]).unwrap();
            let response = run_search(&config, &request).await.unwrap();

            assert!(response.success);
            assert_eq!(response.count, 3);
            assert_eq!(
                response.data.files().collect::<Vec<_>>(),
                vec!["src/main.rs", "src/lib.rs"]
            );
            let main = response.data.get("src/main.rs").unwrap();
            assert_eq!(
                main[0].full_path,
                dir.path().join("src/main.rs").display().to_string()
            );
        }

        #[tokio::test]
        async fn test_receives_built_arguments() {
            let dir = tempfile::tempdir().unwrap();
            let log = dir.path().join("args.txt");
            let rg = fake_rg(
                dir.path(),
                &format!("for a in \"$@\"; do echo \"$a\" >> '{}'; done", log.display()),
            );

            let config = AppConfig::new(rg);
            let request = SearchRequest::new("foo", ["/proj"])
                .unwrap()
                .with_extensions(["py"])
                .with_extra_args(r#"--type-add "web:*.html""#);
            let response = run_search(&config, &request).await.unwrap();
            assert_eq!(response.count, 0);

            let logged = std::fs::read_to_string(&log).unwrap();
            let args: Vec<&str> = logged.lines().collect();
            assert_eq!(
                args,
                vec!["foo", "/proj", "-g", "*.py", "--smart-case", "--json", "--type-add", "web:*.html"]
            );
        }

        #[tokio::test]
        async fn test_no_matches_exit_code_is_success() {
            let dir = tempfile::tempdir().unwrap();
            let rg = fake_rg(dir.path(), "exit 1");

            let config = AppConfig::new(rg);
            let request = SearchRequest::new("foo", ["/proj"]).unwrap();
            let response = run_search(&config, &request).await.unwrap();
            assert_eq!(response.count, 0);
            assert!(response.data.is_empty());
        }

        #[tokio::test]
        async fn test_error_exit_code_is_process_error() {
            let dir = tempfile::tempdir().unwrap();
            let rg = fake_rg(dir.path(), "echo 'rg: bad regex' >&2; exit 2");

            let config = AppConfig::new(rg);
            let request = SearchRequest::new("(", ["/proj"]).unwrap();
            let err = run_search(&config, &request).await.unwrap_err();
            match err {
                Error::Process(ProcessError::ExitStatus { code, stderr }) => {
                    assert_eq!(code, 2);
                    assert_eq!(stderr, "rg: bad regex");
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }
}
