//! Depth-first rule traversal.
//!
//! Visits every style rule in source order, including rules nested in
//! media and supports blocks, and runs the classifier over each one.
//! Rules are never reordered or removed; the only mutation is the
//! classifier appending synthesized declarations.

use crate::classifier::{fixup_rule, FixupOptions};
use crate::model::{Rule, Stylesheet};

/// Appends synthesized declarations to every rule of the stylesheet.
pub fn apply_fixups(stylesheet: &mut Stylesheet, options: &FixupOptions) {
    for rule in &mut stylesheet.rules {
        visit(rule, options);
    }
}

fn visit(rule: &mut Rule, options: &FixupOptions) {
    match rule {
        Rule::Style(style) => fixup_rule(&mut style.declarations, options),
        Rule::Group(group) => {
            for child in &mut group.rules {
                visit(child, options);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Declaration, GroupRule, StyleRule};

    fn style_rule(selector: &str, decls: &[(&str, &str)]) -> Rule {
        Rule::Style(StyleRule::new(
            vec![selector.to_string()],
            decls
                .iter()
                .map(|(p, v)| Declaration::new(*p, *v))
                .collect(),
        ))
    }

    fn synthesized_of(rule: &Rule) -> Vec<(String, String)> {
        rule.as_style()
            .map(|style| {
                style
                    .declarations
                    .iter()
                    .filter(|d| d.synthesized)
                    .map(|d| (d.property.clone(), d.value.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_walks_top_level_rules_in_order() {
        let mut sheet = Stylesheet {
            rules: vec![
                style_rule(".a", &[("display", "-webkit-box")]),
                style_rule(".b", &[("-webkit-box-flex", "1")]),
            ],
        };
        apply_fixups(&mut sheet, &FixupOptions::default());

        assert_eq!(
            synthesized_of(&sheet.rules[0]),
            vec![("display".to_string(), "inline-flex".to_string())]
        );
        assert_eq!(
            synthesized_of(&sheet.rules[1]),
            vec![("flex".to_string(), "1 auto".to_string())]
        );
    }

    #[test]
    fn test_recurses_into_nested_groups() {
        let inner = style_rule(".c", &[("-webkit-box-pack", "justify")]);
        let media = Rule::Group(GroupRule::new(
            "media",
            "screen and (max-width: 600px)",
            vec![inner],
        ));
        let outer = Rule::Group(GroupRule::new("supports", "(display: flex)", vec![media]));
        let mut sheet = Stylesheet { rules: vec![outer] };

        apply_fixups(&mut sheet, &FixupOptions::default());

        let group = sheet.rules[0].as_group().unwrap();
        let nested = group.rules[0].as_group().unwrap();
        assert_eq!(
            synthesized_of(&nested.rules[0]),
            vec![("justify-content".to_string(), "space-between".to_string())]
        );
    }

    #[test]
    fn test_sibling_lookup_stays_within_one_rule() {
        // box-orient in a *different* rule must not affect resolution
        let mut sheet = Stylesheet {
            rules: vec![
                style_rule(".a", &[("-webkit-box-orient", "vertical")]),
                style_rule(".b", &[("-webkit-box-direction", "reverse")]),
            ],
        };
        apply_fixups(&mut sheet, &FixupOptions::default());

        assert_eq!(
            synthesized_of(&sheet.rules[0]),
            vec![("flex-direction".to_string(), "column".to_string())]
        );
        assert_eq!(
            synthesized_of(&sheet.rules[1]),
            vec![("flex-direction".to_string(), "row-reverse".to_string())]
        );
    }

    #[test]
    fn test_empty_stylesheet_is_untouched() {
        let mut sheet = Stylesheet::new();
        apply_fixups(&mut sheet, &FixupOptions::default());
        assert!(sheet.is_empty());
    }
}
