//! 2009/2011 draft flexbox properties mapped to the final spec.
//!
//! `display: -webkit-box`, `-webkit-box-align`, `-webkit-box-pack` and
//! friends turn into their standard flexbox equivalents via a static
//! mapping table. Two things need more than a table lookup: `box-flex`
//! values follow a numeric rule, and the `box-direction`/`box-orient`
//! pair resolves jointly into one `flex-direction`.

use crate::model::Declaration;
use crate::properties::{strip_webkit_prefix, WEBKIT_PREFIX};
use crate::query::value_of;

/// One legacy-to-final mapping: an optional property rename plus keyword
/// substitutions. Unknown keywords pass through untouched.
pub struct Mapping {
    pub new_name: Option<&'static str>,
    pub value_map: &'static [(&'static str, &'static str)],
}

static DISPLAY: Mapping = Mapping {
    new_name: None,
    value_map: &[
        ("box", "inline-flex"),
        ("flexbox", "flex"),
        ("inline-box", "inline-flex"),
        ("inline-flexbox", "inline-flex"),
    ],
};

static BOX_ALIGN: Mapping = Mapping {
    new_name: Some("align-items"),
    value_map: &[("start", "flex-start"), ("end", "flex-end")],
};

static FLEX_DIRECTION: Mapping = Mapping {
    new_name: None,
    value_map: &[
        ("lr", "row"),
        ("rl", "row-reverse"),
        ("tb", "column"),
        ("bt", "column-reverse"),
    ],
};

static BOX_PACK: Mapping = Mapping {
    new_name: Some("justify-content"),
    value_map: &[
        ("start", "flex-start"),
        ("end", "flex-end"),
        ("justify", "space-between"),
    ],
};

static BOX_ORDINAL_GROUP: Mapping = Mapping {
    new_name: Some("order"),
    value_map: &[],
};

static BOX_FLEX: Mapping = Mapping {
    new_name: Some("flex"),
    value_map: &[],
};

/// Look up the mapping for a (prefix-stripped) legacy property. The 2011
/// draft aliases share their 2009 entries.
fn mapping_for(property: &str) -> Option<&'static Mapping> {
    match property {
        "display" => Some(&DISPLAY),
        "box-align" | "flex-align" => Some(&BOX_ALIGN),
        "flex-direction" => Some(&FLEX_DIRECTION),
        "box-pack" => Some(&BOX_PACK),
        "box-ordinal-group" | "flex-order" => Some(&BOX_ORDINAL_GROUP),
        "box-flex" => Some(&BOX_FLEX),
        _ => None,
    }
}

/// Map a legacy flexbox declaration to its final-spec `(property, value)`.
///
/// Always returns a pair; properties this module does not know pass
/// through unchanged and the admissibility gate downstream decides their
/// fate. `siblings` is the declaration list of the enclosing rule, needed
/// for the `box-direction`/`box-orient` joint resolution.
pub fn map_declaration(decl: &Declaration, siblings: &[Declaration]) -> (String, String) {
    let mut property = strip_webkit_prefix(&decl.property);
    let mut value = decl
        .value
        .strip_prefix(WEBKIT_PREFIX)
        .unwrap_or(&decl.value)
        .to_string();

    if let Some(mapping) = mapping_for(property) {
        if let Some(&(_, mapped)) = mapping.value_map.iter().find(|&&(from, _)| from == value) {
            value = mapped.to_string();
        }
        if let Some(new_name) = mapping.new_name {
            property = new_name;
        }
    }

    // box-flex: 0 means "don't flex"; any other value keeps its flex
    // factor and gets an auto basis.
    if property == "flex" {
        value = match decl.value.trim().parse::<f64>() {
            Ok(n) if n == 0.0 => "none".to_string(),
            _ => format!("{} auto", decl.value),
        };
    }

    // The 2009 draft split direction across two properties. Resolve the
    // pair jointly, consulting the sibling declarations (prefixed or not)
    // for whichever half this declaration is missing.
    if property == "box-direction" || property == "box-orient" {
        let (dir, orient) = if property == "box-direction" {
            (
                Some(value.clone()),
                value_of(siblings, "box-orient", true).map(str::to_string),
            )
        } else {
            (
                value_of(siblings, "box-direction", true).map(str::to_string),
                Some(value.clone()),
            )
        };

        value = if orient.as_deref() == Some("vertical") {
            "column".to_string()
        } else {
            "row".to_string()
        };
        if dir.as_deref() == Some("reverse") {
            value.push_str("-reverse");
        }
        property = "flex-direction";
    }

    (property.to_string(), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: run the mapper with no siblings.
    fn map(property: &str, value: &str) -> (String, String) {
        map_declaration(&Declaration::new(property, value), &[])
    }

    // ── Table substitutions ──────────────────────────────────────────

    #[test]
    fn test_display_values() {
        assert_eq!(map("display", "-webkit-box"), ("display".into(), "inline-flex".into()));
        assert_eq!(map("display", "-webkit-flexbox"), ("display".into(), "flex".into()));
        assert_eq!(map("display", "-webkit-inline-box"), ("display".into(), "inline-flex".into()));
        assert_eq!(map("display", "-webkit-inline-flexbox"), ("display".into(), "inline-flex".into()));
    }

    #[test]
    fn test_box_align_and_alias() {
        assert_eq!(map("-webkit-box-align", "start"), ("align-items".into(), "flex-start".into()));
        assert_eq!(map("-webkit-box-align", "end"), ("align-items".into(), "flex-end".into()));
        assert_eq!(map("-webkit-flex-align", "start"), ("align-items".into(), "flex-start".into()));
        // Unmapped keywords pass through.
        assert_eq!(map("-webkit-box-align", "center"), ("align-items".into(), "center".into()));
    }

    #[test]
    fn test_flex_direction_keywords() {
        assert_eq!(map("-webkit-flex-direction", "lr"), ("flex-direction".into(), "row".into()));
        assert_eq!(map("-webkit-flex-direction", "rl"), ("flex-direction".into(), "row-reverse".into()));
        assert_eq!(map("-webkit-flex-direction", "tb"), ("flex-direction".into(), "column".into()));
        assert_eq!(map("-webkit-flex-direction", "bt"), ("flex-direction".into(), "column-reverse".into()));
    }

    #[test]
    fn test_box_pack() {
        assert_eq!(map("-webkit-box-pack", "justify"), ("justify-content".into(), "space-between".into()));
        assert_eq!(map("-webkit-box-pack", "start"), ("justify-content".into(), "flex-start".into()));
    }

    #[test]
    fn test_box_ordinal_group_and_alias() {
        assert_eq!(map("-webkit-box-ordinal-group", "2"), ("order".into(), "2".into()));
        assert_eq!(map("-webkit-flex-order", "3"), ("order".into(), "3".into()));
    }

    // ── box-flex numeric rule ────────────────────────────────────────

    #[test]
    fn test_box_flex_zero_is_none() {
        assert_eq!(map("-webkit-box-flex", "0"), ("flex".into(), "none".into()));
        assert_eq!(map("-webkit-box-flex", "0.0"), ("flex".into(), "none".into()));
    }

    #[test]
    fn test_box_flex_nonzero_gets_auto() {
        assert_eq!(map("-webkit-box-flex", "2"), ("flex".into(), "2 auto".into()));
        assert_eq!(map("-webkit-box-flex", "1.5"), ("flex".into(), "1.5 auto".into()));
    }

    #[test]
    fn test_box_flex_non_numeric_gets_auto() {
        assert_eq!(map("-webkit-box-flex", "inherit"), ("flex".into(), "inherit auto".into()));
    }

    // ── box-direction / box-orient joint resolution ──────────────────

    #[test]
    fn test_orient_vertical_with_reverse_sibling() {
        let siblings = vec![
            Declaration::new("-webkit-box-orient", "vertical"),
            Declaration::new("-webkit-box-direction", "reverse"),
        ];
        let decl = Declaration::new("-webkit-box-orient", "vertical");
        assert_eq!(
            map_declaration(&decl, &siblings),
            ("flex-direction".into(), "column-reverse".into())
        );
    }

    #[test]
    fn test_direction_reverse_with_vertical_sibling() {
        let siblings = vec![Declaration::new("box-orient", "vertical")];
        let decl = Declaration::new("-webkit-box-direction", "reverse");
        assert_eq!(
            map_declaration(&decl, &siblings),
            ("flex-direction".into(), "column-reverse".into())
        );
    }

    #[test]
    fn test_orient_horizontal_alone_is_row() {
        assert_eq!(
            map("-webkit-box-orient", "horizontal"),
            ("flex-direction".into(), "row".into())
        );
    }

    #[test]
    fn test_direction_reverse_alone_is_row_reverse() {
        assert_eq!(
            map("-webkit-box-direction", "reverse"),
            ("flex-direction".into(), "row-reverse".into())
        );
    }

    // ── Pass-through ─────────────────────────────────────────────────

    #[test]
    fn test_unknown_property_passes_through() {
        assert_eq!(map("box-shadow", "0 0 4px #000"), ("box-shadow".into(), "0 0 4px #000".into()));
    }
}
