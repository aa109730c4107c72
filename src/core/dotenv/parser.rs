// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line parser for `.env` files.
//!
//! ```text
//! "  # comment  "          --> None
//! "NOTANASSIGNMENT"        --> None
//! " KEY = \"a b\" "         --> KEY / a b
//! "URL=http://h/a=b"       --> URL / http://h/a=b   (first '=' only)
//! ```
//!
//! Parsing is permissive: there are no escapes, no interpolation and no
//! error cases. A line the parser does not understand is skipped.

/// One `KEY=VALUE` line after trimming and quote removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub key: String,
    pub value: String,
}

/// Parses a single line.
///
/// Returns `None` for blank lines, `#` comments and lines without `=`.
#[must_use]
pub fn parse_line(line: &str) -> Option<Assignment> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    Some(Assignment {
        key: key.trim().to_owned(),
        value: strip_quotes(value.trim()).to_owned(),
    })
}

/// Parses file contents into assignments, in file order.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Duplicate keys are kept;
/// applying them in order makes the last one win.
#[must_use]
pub fn parse_str(contents: &str) -> Vec<Assignment> {
    contents.split(['\r', '\n']).filter_map(parse_line).collect()
}

/// Removes one matching pair of outer `"` or `'` quotes.
///
/// A lone quote character and mismatched quotes are returned unchanged.
#[must_use]
pub fn strip_quotes(value: &str) -> &str {
    ['"', '\'']
        .into_iter()
        .find_map(|quote| value.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(value)
}
