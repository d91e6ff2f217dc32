//! Byte-offset highlighting of matched lines
//!
//! ripgrep reports submatches as byte offsets into the raw line. Lines are
//! sliced as bytes and every slice is decoded with replacement, so offsets
//! that land inside a multi-byte character degrade to U+FFFD instead of
//! panicking.

use serde::{Deserialize, Serialize};

/// Byte range of one submatch within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubmatchSpan {
    pub start: usize,
    pub end: usize,
}

impl SubmatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A decoded piece of a line, either plain or highlighted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    fn plain(bytes: &[u8]) -> Self {
        Self {
            text: String::from_utf8_lossy(bytes).into_owned(),
            highlighted: false,
        }
    }

    fn highlight(bytes: &[u8]) -> Self {
        Self {
            text: String::from_utf8_lossy(bytes).into_owned(),
            highlighted: true,
        }
    }
}

/// Split a raw line into gap and match segments.
///
/// Spans are sorted by start first. Offsets past the end are clamped, a span
/// overlapping the previous one starts at the previous end, and an inverted
/// span yields an empty highlight.
pub fn segment_line(line: &[u8], spans: &[SubmatchSpan]) -> Vec<Segment> {
    let mut sorted = spans.to_vec();
    sorted.sort_by_key(|s| s.start);

    let len = line.len();
    let mut segments = Vec::with_capacity(sorted.len() * 2 + 1);
    let mut cursor = 0;

    for span in sorted {
        let start = span.start.clamp(cursor, len);
        let end = span.end.clamp(start, len);

        if start > cursor {
            segments.push(Segment::plain(&line[cursor..start]));
        }
        segments.push(Segment::highlight(&line[start..end]));
        cursor = end;
    }

    if cursor < len {
        segments.push(Segment::plain(&line[cursor..]));
    }

    segments
}

/// Escape text for safe insertion into HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Render segments as escaped HTML, wrapping matches in `<span class="...">`
pub fn render_html(segments: &[Segment], class: &str) -> String {
    let mut html = String::new();
    for segment in segments {
        if segment.highlighted {
            html.push_str("<span class=\"");
            html.push_str(class);
            html.push_str("\">");
            html.push_str(&escape_html(&segment.text));
            html.push_str("</span>");
        } else {
            html.push_str(&escape_html(&segment.text));
        }
    }
    html
}

/// Segment and render a line in one step
pub fn highlight_line(line: &[u8], spans: &[SubmatchSpan], class: &str) -> String {
    render_html(&segment_line(line, spans), class)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(pairs: &[(usize, usize)]) -> Vec<SubmatchSpan> {
        pairs.iter().map(|&(s, e)| SubmatchSpan::new(s, e)).collect()
    }

    fn concat(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_two_matches() {
        let html = highlight_line(b"foo bar foo", &spans(&[(0, 3), (8, 11)]), "highlight");
        assert_eq!(
            html,
            r#"<span class="highlight">foo</span> bar <span class="highlight">foo</span>"#
        );
    }

    #[test]
    fn test_no_submatches_is_plain_escape() {
        let line = r#"if a < b && c > "d" { 'e' }"#;
        assert_eq!(highlight_line(line.as_bytes(), &[], "highlight"), escape_html(line));
        assert!(!highlight_line(line.as_bytes(), &[], "highlight").contains("<span"));
    }

    #[test]
    fn test_escape_inside_match() {
        let html = highlight_line(b"x <b> y", &spans(&[(2, 5)]), "hl");
        assert_eq!(html, r#"x <span class="hl">&lt;b&gt;</span> y"#);
    }

    #[test]
    fn test_unsorted_spans_render_like_sorted() {
        let line = b"alpha beta gamma";
        let sorted = highlight_line(line, &spans(&[(0, 5), (6, 10), (11, 16)]), "h");
        let shuffled = highlight_line(line, &spans(&[(11, 16), (0, 5), (6, 10)]), "h");
        assert_eq!(sorted, shuffled);
    }

    #[test]
    fn test_segments_reconstruct_line() {
        let line = "héllo wörld, ünïcode ok";
        let bytes = line.as_bytes();
        // "wörld" starts after "héllo " (7 bytes) and spans 6 bytes
        let segments = segment_line(bytes, &spans(&[(7, 13), (15, 23)]));
        assert_eq!(concat(&segments), line);
        assert_eq!(segments[1].text, "wörld");
        assert!(segments[1].highlighted);
    }

    #[test]
    fn test_mid_codepoint_offsets_do_not_panic() {
        let line = "日本語のテキスト".as_bytes();
        for start in 0..line.len() {
            for end in start..=line.len() + 2 {
                let html = highlight_line(line, &[SubmatchSpan::new(start, end)], "h");
                assert!(html.contains("<span"));
            }
        }
        let html = highlight_line(line, &spans(&[(1, 4)]), "h");
        assert!(html.contains('\u{FFFD}'));
    }

    #[test]
    fn test_out_of_range_and_overlap() {
        let segments = segment_line(b"abcdef", &spans(&[(1, 4), (2, 5), (10, 20)]));
        assert_eq!(concat(&segments), "abcdef");
        assert_eq!(segments[1].text, "bcd");
        assert_eq!(segments[2].text, "e");
        assert_eq!(segments.last().unwrap().text, "");
    }

    #[test]
    fn test_empty_line() {
        assert!(segment_line(b"", &[]).is_empty());
        assert_eq!(highlight_line(b"", &[], "h"), "");
    }
}
