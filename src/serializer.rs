//! Stylesheet serializer.
//!
//! Renders a rule tree back to CSS text in a fixed pretty form: selectors
//! one per line, declarations indented two spaces, a blank line between
//! sibling rules, group bodies indented one level deeper. Field text is
//! emitted verbatim, so whatever the parser or the fixup pass put in a
//! selector, condition or value comes back out byte for byte.

use crate::model::{GroupRule, Rule, StyleRule, Stylesheet};

/// Render a stylesheet as formatted CSS text.
pub fn stringify(stylesheet: &Stylesheet) -> String {
    let mut out = String::new();
    write_rules(&mut out, &stylesheet.rules, 0);
    out
}

fn write_rules(out: &mut String, rules: &[Rule], level: usize) {
    for (index, rule) in rules.iter().enumerate() {
        if index > 0 {
            out.push_str("\n\n");
        }
        match rule {
            Rule::Style(style) => write_style(out, style, level),
            Rule::Group(group) => write_group(out, group, level),
        }
    }
}

fn write_style(out: &mut String, style: &StyleRule, level: usize) {
    let pad = indent(level);
    let mut first = true;
    for selector in &style.selectors {
        if !first {
            out.push_str(",\n");
        }
        first = false;
        out.push_str(&pad);
        out.push_str(selector);
    }
    out.push_str(" {\n");
    for declaration in &style.declarations {
        out.push_str(&indent(level + 1));
        out.push_str(&declaration.property);
        out.push_str(": ");
        out.push_str(&declaration.value);
        out.push_str(";\n");
    }
    out.push_str(&pad);
    out.push('}');
}

fn write_group(out: &mut String, group: &GroupRule, level: usize) {
    let pad = indent(level);
    out.push_str(&pad);
    out.push('@');
    out.push_str(&group.name);
    if !group.condition.is_empty() {
        out.push(' ');
        out.push_str(&group.condition);
    }
    out.push_str(" {\n");
    if !group.rules.is_empty() {
        write_rules(out, &group.rules, level + 1);
        out.push('\n');
    }
    out.push_str(&pad);
    out.push('}');
}

fn indent(level: usize) -> String {
    "  ".repeat(level)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Declaration;
    use crate::parser::parse_stylesheet;

    // ── formatting ───────────────────────────────────────────────────

    #[test]
    fn test_single_rule() {
        let sheet = Stylesheet {
            rules: vec![Rule::Style(StyleRule::new(
                vec![".btn".into()],
                vec![
                    Declaration::new("color", "red"),
                    Declaration::synthesized("flex", "2 auto"),
                ],
            ))],
        };
        assert_eq!(stringify(&sheet), ".btn {\n  color: red;\n  flex: 2 auto;\n}");
    }

    #[test]
    fn test_selectors_one_per_line() {
        let sheet = Stylesheet {
            rules: vec![Rule::Style(StyleRule::new(
                vec!["h1".into(), ".a > .b".into()],
                vec![Declaration::new("margin", "0")],
            ))],
        };
        assert_eq!(stringify(&sheet), "h1,\n.a > .b {\n  margin: 0;\n}");
    }

    #[test]
    fn test_blank_line_between_rules() {
        let sheet = Stylesheet {
            rules: vec![
                Rule::Style(StyleRule::new(
                    vec!["a".into()],
                    vec![Declaration::new("color", "red")],
                )),
                Rule::Style(StyleRule::new(
                    vec!["b".into()],
                    vec![Declaration::new("margin", "0")],
                )),
            ],
        };
        assert_eq!(
            stringify(&sheet),
            "a {\n  color: red;\n}\n\nb {\n  margin: 0;\n}"
        );
    }

    #[test]
    fn test_group_rule_indents_its_body() {
        let sheet = Stylesheet {
            rules: vec![Rule::Group(GroupRule::new(
                "media",
                "screen and (max-width: 600px)",
                vec![Rule::Style(StyleRule::new(
                    vec![".a".into()],
                    vec![Declaration::new("display", "flex")],
                ))],
            ))],
        };
        assert_eq!(
            stringify(&sheet),
            "@media screen and (max-width: 600px) {\n  .a {\n    display: flex;\n  }\n}"
        );
    }

    #[test]
    fn test_empty_stylesheet_is_empty_text() {
        assert_eq!(stringify(&Stylesheet::new()), "");
    }

    // ── round-trip ───────────────────────────────────────────────────

    #[test]
    fn test_output_reparses_to_the_same_tree() {
        let source = "h1, .a { color: red; margin: 0 auto; } \
                      @media screen { .b { background: url(data:image/png;base64,AA); } }";
        let parsed = parse_stylesheet(source).unwrap();
        let reparsed = parse_stylesheet(&stringify(&parsed)).unwrap();
        assert_eq!(parsed, reparsed);
    }
}
