//! Inline comment stripping.

/// Truncate `line` at the first `#` that sits outside any quoted span.
///
/// Quote state toggles on `'` / `"` when not inside the other quote type.
/// A backslash escapes the following character (including `#` and quotes),
/// which is kept literally without affecting quote state. The returned slice
/// excludes the `#` and everything after it; callers re-trim the result.
pub fn strip_inline_comment(line: &str) -> &str {
    let mut in_single = false;
    let mut in_double = false;
    let mut escaped = false;

    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            '#' if !in_single && !in_double => return &line[..idx],
            _ => {}
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_comment_is_cut() {
        assert_eq!(strip_inline_comment("KEY=value # comment"), "KEY=value ");
        assert_eq!(strip_inline_comment("KEY=value#comment"), "KEY=value");
    }

    #[test]
    fn line_without_comment_is_untouched() {
        assert_eq!(strip_inline_comment("KEY=value"), "KEY=value");
        assert_eq!(strip_inline_comment(""), "");
    }

    #[test]
    fn hash_inside_quotes_survives() {
        assert_eq!(strip_inline_comment(r#"KEY="a#b""#), r#"KEY="a#b""#);
        assert_eq!(strip_inline_comment("KEY='a#b' # real"), "KEY='a#b' ");
    }

    #[test]
    fn quote_char_inside_other_quote_kind_does_not_toggle() {
        // The apostrophe inside double quotes must not open a single-quote span.
        assert_eq!(
            strip_inline_comment(r#"KEY="it's" # gone"#),
            r#"KEY="it's" "#
        );
    }

    #[test]
    fn escaped_hash_survives() {
        assert_eq!(strip_inline_comment(r"KEY=a\#b"), r"KEY=a\#b");
        assert_eq!(strip_inline_comment(r"KEY=a\#b # real"), r"KEY=a\#b ");
    }

    #[test]
    fn escaped_quote_does_not_toggle() {
        // The escaped double quote leaves us outside any span, so the `#` cuts.
        assert_eq!(strip_inline_comment(r#"KEY=\"a # b"#), r#"KEY=\"a "#);
    }

    #[test]
    fn comment_only_line_becomes_empty() {
        assert_eq!(strip_inline_comment("# whole line"), "");
    }
}
