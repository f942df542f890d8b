//! HTML table rendering
//!
//! Emits the same table fragment the original results page shows: a
//! code cell that hyperlinks the details page when one exists, the
//! description, and a metadata cell with an optional "View Details"
//! link. All data is escaped.

use crate::model::ResolvedCode;

/// Escape text for HTML element and attribute content
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Render a result set as an HTML `<table>` fragment
pub fn render_table(results: &[&ResolvedCode]) -> String {
    let mut out = String::new();
    out.push_str("<table>\n");
    out.push_str("  <thead>\n");
    out.push_str("    <tr><th>Code</th><th>Description</th><th>Details</th></tr>\n");
    out.push_str("  </thead>\n");
    out.push_str("  <tbody>\n");
    for row in results {
        out.push_str(&render_row(row));
    }
    out.push_str("  </tbody>\n");
    out.push_str("</table>\n");
    out
}

fn render_row(row: &ResolvedCode) -> String {
    let code = escape(&row.code.diagnostic_code);
    let url = row.code.details_url().map(escape);

    let code_cell = match &url {
        Some(url) => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" \
             title=\"Open details for {}\"><strong>{}</strong></a>",
            url, code, code
        ),
        None => code.clone(),
    };

    let metadata = escape(&row.metadata());
    let details_cell = match &url {
        Some(url) => format!(
            "{}<br><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" \
             title=\"View full info for {}\">View Details</a>",
            metadata, url, code
        ),
        None => metadata,
    };

    format!(
        "    <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        code_cell,
        escape(&row.code.description),
        details_cell
    )
}
