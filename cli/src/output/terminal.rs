//! Colored terminal rendering
//!
//! Works from the segment form of each match, so highlighting in the
//! terminal lines up with the HTML the UI receives.

use colored::Colorize;
use rgview_core::fs::DirEntry;
use rgview_core::search::Segment;
use rgview_core::{GroupedResults, SearchResponse};

/// Render a line with matched spans in bold red
pub fn render_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| {
            if segment.highlighted {
                segment.text.red().bold().to_string()
            } else {
                segment.text.clone()
            }
        })
        .collect()
}

/// The line text without any styling
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

/// One block per file: a header, then `line: text` rows
pub fn render_results(results: &GroupedResults) -> String {
    let mut out = String::new();

    for (file, records) in results.iter() {
        out.push_str(&format!(
            "{} {}\n",
            file.cyan().bold(),
            format!("({})", records.len()).dimmed()
        ));

        let width = records
            .iter()
            .map(|r| r.line_num.to_string().len())
            .max()
            .unwrap_or(1);

        for record in records {
            let number = format!("{:>width$}", record.line_num, width = width);
            out.push_str(&format!(
                "  {}: {}\n",
                number.green(),
                render_segments(&record.segments)
            ));
        }
        out.push('\n');
    }

    out
}

/// "N matches in M files"
pub fn render_summary(response: &SearchResponse) -> String {
    if response.count == 0 {
        return "No matches found".yellow().to_string();
    }

    let files = response.data.file_count();
    format!(
        "{} {} in {} {}",
        response.count,
        if response.count == 1 { "match" } else { "matches" },
        files,
        if files == 1 { "file" } else { "files" }
    )
}

/// Directories (with a trailing `/`) then files, one per line
pub fn render_dir_entries(entries: &[DirEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        if entry.is_dir {
            out.push_str(&format!("{}/", entry.name).blue().bold().to_string());
        } else {
            out.push_str(&entry.name);
        }
        out.push('\n');
    }
    out
}
