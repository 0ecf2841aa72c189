//! Rule tree: Stylesheet, Rule, StyleRule, GroupRule, Declaration.

/// A single CSS property declaration, e.g. `color: red`.
///
/// Property and value are kept as opaque strings; the transforms only
/// inspect them where a rewrite requires it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The property name, e.g. `"background"`, `"-webkit-box-flex"`.
    pub property: String,
    /// The raw value text, verbatim from the source (trimmed).
    pub value: String,
    /// Provenance flag: `false` for parsed declarations, `true` for
    /// declarations this engine synthesized.
    pub synthesized: bool,
}

impl Declaration {
    /// Create a parsed (non-synthesized) declaration.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            synthesized: false,
        }
    }

    /// Create an engine-synthesized declaration.
    pub fn synthesized(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            synthesized: true,
        }
    }
}

/// A style rule: one or more selectors paired with declarations.
///
/// Selector text is preserved verbatim and never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// The selectors for this rule (comma-separated in CSS).
    pub selectors: Vec<String>,
    /// The declarations inside the `{ ... }` block, in source order.
    /// Synthesized declarations are appended after the originals.
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    /// Create a style rule from selectors and declarations.
    pub fn new(selectors: Vec<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selectors,
            declarations,
        }
    }
}

/// A conditional group rule (`@media`, `@supports`) wrapping nested rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRule {
    /// The at-rule name without the `@`, e.g. `"media"`.
    pub name: String,
    /// The condition text, e.g. `"screen and (max-width: 600px)"`.
    pub condition: String,
    /// Nested rules, in source order. Groups may nest.
    pub rules: Vec<Rule>,
}

impl GroupRule {
    /// Create a group rule.
    pub fn new(name: impl Into<String>, condition: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            condition: condition.into(),
            rules,
        }
    }
}

/// One rule in a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// A selector block with declarations.
    Style(StyleRule),
    /// A conditional group with nested rules.
    Group(GroupRule),
}

impl Rule {
    /// The style rule inside, if this is one.
    pub fn as_style(&self) -> Option<&StyleRule> {
        match self {
            Rule::Style(style) => Some(style),
            Rule::Group(_) => None,
        }
    }

    /// The group rule inside, if this is one.
    pub fn as_group(&self) -> Option<&GroupRule> {
        match self {
            Rule::Style(_) => None,
            Rule::Group(group) => Some(group),
        }
    }
}

/// A parsed CSS stylesheet: an ordered list of rules.
///
/// The walker mutates a stylesheet in place by appending synthesized
/// declarations; rule order and selector text never change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Returns `true` if the stylesheet holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
