//! Extraction of the synthesized fragment.
//!
//! After the walker runs, every rule holds its original declarations plus
//! whatever was synthesized. The injectable fragment is the subset with
//! only the synthesized declarations, keeping just the rules that still
//! have something in them.

use crate::model::{Declaration, GroupRule, Rule, StyleRule, Stylesheet};

/// Deep-copies the stylesheet, retaining only synthesized declarations
/// and the rules that keep at least one declaration or child rule.
pub fn synthesized_subset(stylesheet: &Stylesheet) -> Stylesheet {
    Stylesheet {
        rules: stylesheet.rules.iter().filter_map(subset_rule).collect(),
    }
}

fn subset_rule(rule: &Rule) -> Option<Rule> {
    match rule {
        Rule::Style(style) => {
            let declarations: Vec<Declaration> = style
                .declarations
                .iter()
                .filter(|d| d.synthesized)
                .cloned()
                .collect();
            if declarations.is_empty() {
                return None;
            }
            Some(Rule::Style(StyleRule::new(
                style.selectors.clone(),
                declarations,
            )))
        }
        Rule::Group(group) => {
            let rules: Vec<Rule> = group.rules.iter().filter_map(subset_rule).collect();
            if rules.is_empty() {
                return None;
            }
            Some(Rule::Group(GroupRule::new(
                group.name.clone(),
                group.condition.clone(),
                rules,
            )))
        }
    }
}
