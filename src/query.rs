//! Sibling-declaration lookups used by the classifier.
//!
//! Two matching refinements beyond plain equality:
//!
//! - *prefix-agnostic*: a declaration also matches when its property minus
//!   the first 8 characters (the `-webkit-` prefix) equals the query, so
//!   `box-orient` finds `-webkit-box-orient`.
//! - *function-name-only*: a candidate value shaped like a function call
//!   also matches an existing value that invokes a function of the same
//!   name. An invocation only counts after a whitespace, `:` or `,`
//!   boundary (or at the start of the value); a hyphen is not a boundary,
//!   so `-webkit-gradient(` never counts as invoking `gradient`.

use crate::model::Declaration;

/// The value of the first declaration matching `property`.
pub fn value_of<'a>(
    declarations: &'a [Declaration],
    property: &str,
    prefix_agnostic: bool,
) -> Option<&'a str> {
    declarations
        .iter()
        .find(|d| property_matches(d, property, prefix_agnostic))
        .map(|d| d.value.as_str())
}

/// Returns `true` if an equivalent declaration already exists.
pub fn has_declaration(
    declarations: &[Declaration],
    property: &str,
    value: &str,
    prefix_agnostic: bool,
    function_name_only: bool,
) -> bool {
    let name = if function_name_only {
        function_name(value)
    } else {
        None
    };

    declarations.iter().any(|d| {
        property_matches(d, property, prefix_agnostic)
            && (d.value == value
                || name.is_some_and(|name| value_invokes(&d.value, name)))
    })
}

/// Returns `true` if a synthesized declaration with exactly this property
/// and value already exists. Used to keep repeated walks from re-copying.
pub fn has_synthesized(declarations: &[Declaration], property: &str, value: &str) -> bool {
    declarations
        .iter()
        .any(|d| d.synthesized && d.property == property && d.value == value)
}

fn property_matches(decl: &Declaration, property: &str, prefix_agnostic: bool) -> bool {
    decl.property == property
        || (prefix_agnostic && decl.property.get(8..) == Some(property))
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// The name of the first function call in `value`: the longest word run
/// immediately before a `(`. `linear-gradient(...)` yields `gradient`
/// (a hyphen is not a word character).
fn function_name(value: &str) -> Option<&str> {
    let bytes = value.as_bytes();
    let mut from = 0;

    while let Some(pos) = value[from..].find('(') {
        let at = from + pos;
        let mut start = at;
        while start > 0 && is_word_byte(bytes[start - 1]) {
            start -= 1;
        }
        if start < at {
            return Some(&value[start..at]);
        }
        from = at + 1;
    }

    None
}

/// Returns `true` if `value` invokes a function called `name` (ASCII
/// case-insensitive) at a value boundary.
fn value_invokes(value: &str, name: &str) -> bool {
    let haystack = value.to_ascii_lowercase();
    let needle = format!("{}(", name.to_ascii_lowercase());
    let mut from = 0;

    while let Some(pos) = haystack[from..].find(&needle) {
        let at = from + pos;
        let boundary = at == 0 || {
            let before = haystack.as_bytes()[at - 1];
            before.is_ascii_whitespace() || before == b':' || before == b','
        };
        if boundary {
            return true;
        }
        from = at + 1;
    }

    false
}
