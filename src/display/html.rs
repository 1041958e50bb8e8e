//! HTML rendering for the demo server's index page.

use crate::metrics::MetricsSummary;
use crate::models::{Film, Page};
use crate::stats::FilmStats;
use std::fmt::Write;

/// Escape text for safe inclusion in HTML element content or attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the index page.
///
/// `films` is either the film list or the message of the failure that
/// prevented fetching it; the page renders in both cases.
pub fn render_index_html(
    films: Result<&Page<Film>, String>,
    summary: &MetricsSummary,
    cache_size: usize,
) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>SWAPI Explorer</title>\n</head>\n<body>\n");
    out.push_str("<h1>SWAPI Explorer</h1>\n");

    match films {
        Ok(page) => {
            let stats = FilmStats::from_films(&page.results);
            let _ = writeln!(out, "<h2>Films ({})</h2>\n<ol>", stats.count);
            for title in &stats.chronological {
                let _ = writeln!(out, "<li>{}</li>", escape_html(title));
            }
            out.push_str("</ol>\n");
        }
        Err(message) => {
            let _ = writeln!(
                out,
                "<p class=\"error\">Could not load films: {}</p>",
                escape_html(&message)
            );
        }
    }

    out.push_str("<h2>Statistics</h2>\n<ul>\n");
    let _ = writeln!(out, "<li>Requests: {}</li>", summary.fetch_count);
    let _ = writeln!(out, "<li>Errors: {}</li>", summary.error_count);
    let _ = writeln!(out, "<li>Bytes received: {}</li>", summary.total_bytes);
    let _ = writeln!(out, "<li>Cached endpoints: {}</li>", cache_size);
    out.push_str("</ul>\n");
    out.push_str("<p><a href=\"/api\">/api</a> | <a href=\"/stats\">/stats</a></p>\n");
    out.push_str("</body>\n</html>\n");
    out
}
