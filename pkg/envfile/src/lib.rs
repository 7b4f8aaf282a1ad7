//! Environment-file parsing.
//!
//! Converts `.env`-style text into a map of Secret-ready entries: validated
//! key names mapped to base64-encoded values, plus line-level diagnostics
//! for everything that could not be interpreted. Parsing never fails;
//! malformed lines degrade to diagnostics.

pub mod grammar;
pub mod strip;

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Diagnostic message for a line that fits none of the recognized grammars.
pub const INVALID_FORMAT: &str = "Invalid environment variable format";

/// A non-fatal record of a line the parser could not fully interpret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based line number in the input text.
    pub line: usize,
    pub message: String,
}

/// Result of one `parse` call. Entries are keyed by validated name and hold
/// base64-encoded values; duplicate keys resolve last-write-wins.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub entries: BTreeMap<String, String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse `.env`-style text into encoded entries plus diagnostics.
///
/// Per line: trim, drop blank and `#`-leading lines, strip inline comments
/// (quote- and escape-aware), match the ordered grammars, validate the key,
/// then store the base64 of the value's UTF-8 bytes. A line that fails the
/// grammar or key check is recorded in `diagnostics` and skipped; the rest
/// of the input still parses.
pub fn parse(text: &str) -> ParseResult {
    let mut result = ParseResult::default();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;

        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = strip::strip_inline_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = grammar::match_line(line) else {
            result.diagnostics.push(Diagnostic {
                line: line_no,
                message: INVALID_FORMAT.to_string(),
            });
            continue;
        };

        if let Err(e) = pkg_types::validate::validate_data_key(key) {
            result.diagnostics.push(Diagnostic {
                line: line_no,
                message: e.to_string(),
            });
            continue;
        }

        result
            .entries
            .insert(key.to_string(), STANDARD.encode(value.as_bytes()));
    }

    result
}
