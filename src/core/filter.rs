//! Filter predicate over the joined code list

use crate::model::ResolvedCode;

/// Filter predicate for the joined code list.
///
/// Both parts are optional and case-insensitive; an empty filter
/// matches every row. The make is compared against the resolved make
/// label, so callers normalize a short make key to its display name
/// first (see `Dataset::find_make`).
#[derive(Debug, Default, Clone)]
pub struct CodeFilter {
    make: Option<String>,
    codes: Vec<String>,
}

impl CodeFilter {
    /// Restrict to codes whose resolved make equals `make`
    pub fn with_make(mut self, make: &str) -> Self {
        let make = make.trim();
        if !make.is_empty() {
            self.make = Some(make.to_ascii_lowercase());
        }
        self
    }

    /// Restrict to the given code strings (set membership)
    pub fn with_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.codes = codes
            .into_iter()
            .map(|c| c.as_ref().trim().to_ascii_lowercase())
            .filter(|c| !c.is_empty())
            .collect();
        self
    }

    /// Split user input into code strings: commas and whitespace both
    /// separate, blanks dropped.
    pub fn parse_codes(input: &str) -> Vec<String> {
        input
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// The normalized code list, if any
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// True when no predicate is set
    pub fn is_empty(&self) -> bool {
        self.make.is_none() && self.codes.is_empty()
    }

    /// Apply both predicates to a joined row
    pub fn matches(&self, row: &ResolvedCode) -> bool {
        let make_ok = match &self.make {
            Some(make) => row.make.to_ascii_lowercase() == *make,
            None => true,
        };

        let code_ok = self.codes.is_empty()
            || self
                .codes
                .iter()
                .any(|c| row.code.diagnostic_code.eq_ignore_ascii_case(c));

        make_ok && code_ok
    }
}
