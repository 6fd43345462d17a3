//! Display and logging helpers.
//!
//! Upstream article text needs light cleanup before it is printed: some
//! sources embed HTML in descriptions, and the API truncates `content` with
//! a trailing `[+N chars]` marker.

use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

/// Matches the upstream truncation marker at the end of `content`,
/// e.g. `"... politics [+2840 chars]"`.
static CONTENT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\[\+\d+ chars\]$").expect("valid regex"));

/// Strip HTML tags from a fragment, keeping its text content.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(strip_html("<p>Hello <b>world</b></p>"), "Hello world");
/// ```
pub fn strip_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    fragment.root_element().text().collect::<String>()
}

/// Remove the upstream `[+N chars]` truncation marker from article content.
pub fn clean_content(content: &str) -> String {
    CONTENT_MARKER.replace(content, "").into_owned()
}

/// Format an RFC 3339 publish timestamp as "Month D, YYYY".
///
/// Timestamps that do not parse are returned unchanged; upstream dates are
/// occasionally malformed and a raw date beats no date.
pub fn format_date(published_at: &str) -> String {
    match DateTime::parse_from_rfc3339(published_at) {
        Ok(dt) => dt.format("%B %-d, %Y").to_string(),
        Err(_) => published_at.to_string(),
    }
}

/// Truncate a string for logging purposes, appending the remaining byte
/// count when cut.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…(+{} bytes)", &s[..end], s.len() - end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_removes_tags() {
        assert_eq!(strip_html("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(strip_html("plain text"), "plain text");
    }

    #[test]
    fn test_strip_html_nested_markup() {
        assert_eq!(
            strip_html(r#"<div><a href="https://x.test">link</a> and <i>em</i></div>"#),
            "link and em"
        );
    }

    #[test]
    fn test_clean_content_strips_marker() {
        assert_eq!(
            clean_content("The story continues [+2840 chars]"),
            "The story continues"
        );
    }

    #[test]
    fn test_clean_content_leaves_plain_text() {
        assert_eq!(clean_content("No marker here."), "No marker here.");
        // Marker only counts at the end of the content.
        assert_eq!(
            clean_content("[+10 chars] in the middle stays"),
            "[+10 chars] in the middle stays"
        );
    }

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(format_date("2025-05-06T14:30:00Z"), "May 6, 2025");
        assert_eq!(format_date("2025-12-25T00:00:00+02:00"), "December 25, 2025");
    }

    #[test]
    fn test_format_date_passes_through_garbage() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_truncate_for_log() {
        assert_eq!(truncate_for_log("short", 100), "short");
        let long = "a".repeat(500);
        let result = truncate_for_log(&long, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        let s = "ééééé"; // 2 bytes per char
        let result = truncate_for_log(s, 3);
        assert!(result.starts_with('é'));
    }
}
