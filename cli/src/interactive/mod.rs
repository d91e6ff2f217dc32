//! Prompt-driven search loop
//!
//! Each round asks for a query, a root and the search options, prints the
//! grouped results and then lets the user pick matches to open in the editor.
//! The options of the previous round are offered as defaults.

pub mod history;
pub mod session;

use crate::output::{plain_text, render_results, render_summary};
use anyhow::Result;
use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use rgview_core::editor::open_in_editor;
use rgview_core::{paths, run_search, AppConfig, MatchRecord, SearchResponse};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

pub use history::QueryHistory;
pub use session::{Session, CASE_CHOICES};

/// Longest match preview shown in the picker
const PREVIEW_CHARS: usize = 80;

/// Run the interactive loop until the user submits an empty query
pub async fn run_interactive(config: Arc<AppConfig>, start_root: PathBuf) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut session = Session::new(start_root, config.default_case);
    let mut history = QueryHistory::new();
    history.load().await;

    println!(
        "{} {}",
        "rgview".cyan().bold(),
        format!("v{}", rgview_core::VERSION).dimmed()
    );
    println!("{}", "Submit an empty query to quit.\n".dimmed());

    loop {
        if !history.is_empty() {
            let recent: Vec<&str> = history.recent(5).collect();
            println!("{} {}", "Recent:".dimmed(), recent.join(" · ").dimmed());
        }

        let query: String = Input::with_theme(&theme)
            .with_prompt("Search")
            .with_initial_text(history.most_recent().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        if query.trim().is_empty() {
            break;
        }

        session.root = choose_root(&theme, &session)?;
        session.extensions = Input::with_theme(&theme)
            .with_prompt("Extensions (e.g. py, js)")
            .with_initial_text(session.extensions.clone())
            .allow_empty(true)
            .interact_text()?;
        session.case = choose_case(&theme, &session)?;
        session.extra_args = Input::with_theme(&theme)
            .with_prompt("Extra ripgrep flags")
            .with_initial_text(session.extra_args.clone())
            .allow_empty(true)
            .interact_text()?;

        if history.add_entry(&query) {
            if let Err(e) = history.save_if_needed().await {
                debug!("Failed to save history: {}", e);
            }
        }

        match search(&config, &session, &query).await {
            Ok(response) => {
                print!("{}", render_results(&response.data));
                println!("{}\n", render_summary(&response));
                if response.count > 0 {
                    browse_matches(&theme, &config, &session, &response)?;
                }
            }
            Err(e) => eprintln!("{} {}\n", "Error:".red().bold(), e),
        }
    }

    Ok(())
}

async fn search(
    config: &AppConfig,
    session: &Session,
    query: &str,
) -> rgview_core::Result<SearchResponse> {
    let request = session
        .to_raw_request(query)
        .into_request(config.default_case)?;
    run_search(config, &request).await
}

fn choose_root(theme: &ColorfulTheme, session: &Session) -> Result<PathBuf> {
    let items = [
        format!("{}", session.root.display()),
        "Browse…".to_string(),
        "Type a path".to_string(),
    ];

    let choice = Select::with_theme(theme)
        .with_prompt("Search in")
        .items(&items)
        .default(0)
        .interact_opt()?;

    match choice {
        Some(1) => match crate::dialog::pick_folder(Some(&session.root)) {
            Some(folder) => Ok(folder),
            None => {
                println!("{}", "No folder selected".yellow());
                prompt_path(theme, session)
            }
        },
        Some(2) => prompt_path(theme, session),
        _ => Ok(session.root.clone()),
    }
}

fn prompt_path(theme: &ColorfulTheme, session: &Session) -> Result<PathBuf> {
    let typed: String = Input::with_theme(theme)
        .with_prompt("Path")
        .with_initial_text(session.root.display().to_string())
        .interact_text()?;
    Ok(paths::normalize(&typed))
}

fn choose_case(theme: &ColorfulTheme, session: &Session) -> Result<rgview_core::CaseMode> {
    let items: Vec<&str> = CASE_CHOICES.iter().map(|c| c.as_str()).collect();
    let choice = Select::with_theme(theme)
        .with_prompt("Case")
        .items(&items)
        .default(session.case_index())
        .interact_opt()?;

    Ok(choice.map(|i| CASE_CHOICES[i]).unwrap_or(session.case))
}

/// Let the user open matches until they go back to a new search
fn browse_matches(
    theme: &ColorfulTheme,
    config: &AppConfig,
    session: &Session,
    response: &SearchResponse,
) -> Result<()> {
    let records: Vec<&MatchRecord> = response
        .data
        .iter()
        .flat_map(|(_, records)| records.iter())
        .collect();

    let mut items: Vec<String> = records.iter().map(|r| match_label(r)).collect();
    items.push("← New search".to_string());

    let root = session.root.to_string_lossy();
    let mut selected = 0;
    loop {
        let choice = Select::with_theme(theme)
            .with_prompt("Open match")
            .items(&items)
            .default(selected)
            .max_length(15)
            .interact_opt()?;

        let Some(index) = choice.filter(|i| *i < records.len()) else {
            return Ok(());
        };
        selected = index;

        let record = records[index];
        let opened = open_in_editor(
            &config.editor,
            &record.full_path,
            record.line_num,
            Some(root.as_ref()),
        );
        if opened {
            println!("{} {}:{}", "Opened".green(), record.file, record.line_num);
        } else {
            println!(
                "{} could not start '{}'",
                "Error:".red().bold(),
                config.editor.command
            );
        }
    }
}

/// `file:line  text`, with the text trimmed to a single short row
fn match_label(record: &MatchRecord) -> String {
    let text = plain_text(&record.segments);
    format!(
        "{}:{}  {}",
        record.file,
        record.line_num,
        truncate_chars(text.trim(), PREVIEW_CHARS)
    )
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}…", &text[..end]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgview_core::search::{segment_line, SubmatchSpan};

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exactly", 7), "exactly");
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo…");
    }

    #[test]
    fn test_match_label() {
        let record = MatchRecord {
            file: "src/lib.rs".to_string(),
            full_path: "/proj/src/lib.rs".to_string(),
            line_num: 42,
            content_html: String::new(),
            segments: segment_line(b"    let needle = 1;", &[SubmatchSpan::new(8, 14)]),
        };
        assert_eq!(match_label(&record), "src/lib.rs:42  let needle = 1;");
    }
}
