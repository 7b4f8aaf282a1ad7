//! Ordered line grammars.
//!
//! Environment files in the wild mix `=` and `:` separators and quoted and
//! unquoted values. Each cleaned line is tried against these patterns in a
//! fixed order, first match wins. Quoted forms come before unquoted ones so
//! that a quoted value's inner characters are never misread as a separator
//! or comment marker.

use once_cell::sync::Lazy;
use regex::Regex;

const KEY: &str = "[A-Za-z_][A-Za-z0-9_]*";

static GRAMMARS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // KEY="..."  /  KEY='...'
        format!(r#"^({KEY})\s*=\s*"(.*)"$"#),
        format!(r"^({KEY})\s*=\s*'(.*)'$"),
        // KEY=value (value must not start with whitespace or '#')
        format!(r"^({KEY})\s*=\s*([^\s#].*)$"),
        // KEY=
        format!(r"^({KEY})\s*=$"),
        // KEY: "..."  /  KEY: '...'
        format!(r#"^({KEY})\s*:\s*"(.*)"$"#),
        format!(r"^({KEY})\s*:\s*'(.*)'$"),
        // KEY: value
        format!(r"^({KEY})\s*:\s*([^\s#].*)$"),
        // KEY:
        format!(r"^({KEY})\s*:$"),
    ]
    .iter()
    .map(|p| Regex::new(p).expect("hard-coded grammar pattern compiles"))
    .collect()
});

/// Match a cleaned (trimmed, comment-stripped) line against the grammar set.
///
/// Returns the key and the raw (still unencoded) value. Empty-value forms
/// yield an empty value string. `None` means the line fits no dialect.
pub fn match_line(line: &str) -> Option<(&str, &str)> {
    for grammar in GRAMMARS.iter() {
        if let Some(caps) = grammar.captures(line) {
            let key = caps.get(1).map(|m| m.as_str())?;
            let value = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            return Some((key, value));
        }
    }
    None
}
