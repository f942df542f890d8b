//! Shared helper functions for CLI commands

use console::style;

/// Truncate a string to max_len, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}

/// Escape pipe characters for markdown table cells
pub fn escape_md(s: &str) -> String {
    s.replace('|', "\\|")
}

/// Print a styled warning to stderr
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("warning:").yellow().bold(), msg);
}

/// Print the "no information found" line for a lookup miss.
///
/// A miss is an answer, not an error; it goes to stderr so structured
/// stdout output stays parseable.
pub fn print_not_found(code: &str) {
    eprintln!(
        "No information found for '{}'.",
        style(code).yellow()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }

    #[test]
    fn test_escape_md() {
        assert_eq!(escape_md("a|b|c"), "a\\|b\\|c");
        assert_eq!(escape_md("plain"), "plain");
    }
}
