//! Small text utilities shared by the fixup pipeline.

/// Strip HTML comment guards from inline stylesheet text.
///
/// Removes a leading `<!--` (and the whitespace before it) and a trailing
/// `-->` (and the whitespace after it). Markers elsewhere are left alone.
pub fn strip_html_comments(input: &str) -> &str {
    let mut s = input;
    if let Some(rest) = s.trim_start().strip_prefix("<!--") {
        s = rest;
    }
    if let Some(rest) = s.trim_end().strip_suffix("-->") {
        s = rest;
    }
    s
}

/// Trim spaces, commas and semicolons from both ends.
pub fn trim_space_punc(input: &str) -> &str {
    input.trim_matches([' ', ',', ';'])
}

/// Convert a hyphenated property name to its camel-cased style-interface
/// form: `-moz-box-sizing` becomes `MozBoxSizing`, `z-index` becomes
/// `zIndex`. A hyphen not followed by a lowercase letter is kept.
pub fn hyphen_to_camel(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            match chars.peek() {
                Some(&next) if next.is_ascii_lowercase() => {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                }
                _ => out.push('-'),
            }
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── HTML comment guards ──────────────────────────────────────────

    #[test]
    fn test_strip_guards_both_ends() {
        assert_eq!(
            strip_html_comments("  <!-- p { color: red; } --> "),
            " p { color: red; } "
        );
    }

    #[test]
    fn test_strip_guards_absent() {
        assert_eq!(strip_html_comments("p { color: red; }"), "p { color: red; }");
    }

    #[test]
    fn test_strip_guards_only_anchored() {
        // Markers in the middle of the text are not comment guards.
        assert_eq!(strip_html_comments("a <!-- b --> c"), "a <!-- b --> c");
    }

    #[test]
    fn test_strip_guards_leading_only() {
        assert_eq!(strip_html_comments("<!-- p {}"), " p {}");
    }

    // ── trim_space_punc ──────────────────────────────────────────────

    #[test]
    fn test_trim_space_punc() {
        assert_eq!(trim_space_punc(" ,;url(a.png) no-repeat;, "), "url(a.png) no-repeat");
    }

    #[test]
    fn test_trim_space_punc_all_punc() {
        assert_eq!(trim_space_punc(" ,; ;, "), "");
    }

    #[test]
    fn test_trim_space_punc_keeps_tabs() {
        // Only literal spaces count, matching the legacy behavior.
        assert_eq!(trim_space_punc("\turl(a)\t"), "\turl(a)\t");
    }

    // ── hyphen_to_camel ──────────────────────────────────────────────

    #[test]
    fn test_hyphen_to_camel_prefixed() {
        assert_eq!(hyphen_to_camel("-moz-box-sizing"), "MozBoxSizing");
    }

    #[test]
    fn test_hyphen_to_camel_plain() {
        assert_eq!(hyphen_to_camel("border-image"), "borderImage");
        assert_eq!(hyphen_to_camel("z-index"), "zIndex");
    }

    #[test]
    fn test_hyphen_to_camel_no_hyphen() {
        assert_eq!(hyphen_to_camel("color"), "color");
    }

    #[test]
    fn test_hyphen_to_camel_trailing_hyphen() {
        assert_eq!(hyphen_to_camel("foo-"), "foo-");
        assert_eq!(hyphen_to_camel("a--b"), "a-B");
    }
}
