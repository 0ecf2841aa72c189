//! Per-declaration dispatch and admission.
//!
//! For every declaration in a rule the classifier decides whether to
//! synthesize a standards-compliant counterpart, then gates the candidate
//! before it joins the rule:
//!
//! 1. background fallback extraction (url or hex color welded onto a
//!    prefixed function in one value);
//! 2. flexbox-family properties go to [`crate::flexbox`];
//! 3. prefixed gradient values go to [`crate::gradient`];
//! 4. anything else carrying a `-webkit-` prefix is generically
//!    unprefixed;
//! 5. untouched declarations are copied verbatim so the synthesized
//!    fragment stands on its own.
//!
//! Candidates must name a standard property, survive an optional engine
//! capability probe, and not duplicate a declaration already present.
//! Originals are never removed; fixups are appended after the loop.

use log::{debug, trace, warn};

use crate::flexbox;
use crate::gradient;
use crate::model::Declaration;
use crate::properties::{is_standard_property, strip_webkit_prefix, WEBKIT_PREFIX};
use crate::query::{has_declaration, has_synthesized, value_of};
use crate::text::{hyphen_to_camel, trim_space_punc};

/// Capability probe against a live rendering engine.
///
/// `supports` receives a camel-cased property name (`boxSizing`,
/// `MozBoxSizing`) and reports whether the engine's style interface
/// knows it. Without a probe every standard property is assumed
/// supported.
pub trait StyleSupport {
    fn supports(&self, camel_property: &str) -> bool;
}

/// Settings for one fixup pass.
#[derive(Default)]
pub struct FixupOptions<'a> {
    /// Engine capability probe. Candidates the engine does not support
    /// are retried with a `-moz-` prefix, then dropped.
    pub support: Option<&'a dyn StyleSupport>,
    /// Log when a synthesized declaration shadows an author value that
    /// was not itself prefixed.
    pub warn_on_overwrite: bool,
}

/// What the classifier decided for one declaration.
enum Transform {
    /// Emit a rewritten property/value pair.
    Replace { property: String, value: String },
    /// Emit the original declaration unchanged.
    Copy,
    /// Emit nothing.
    Skip,
}

/// Runs the classifier over one rule's declarations, appending whatever
/// it synthesizes. Already-synthesized declarations suppress their own
/// re-emission, so repeated passes add nothing.
pub(crate) fn fixup_rule(declarations: &mut Vec<Declaration>, options: &FixupOptions) {
    let mut fixups: Vec<Declaration> = Vec::new();

    for index in 0..declarations.len() {
        extract_background_fallbacks(&mut declarations[index], &mut fixups);

        match classify(&declarations[index], declarations) {
            Transform::Replace { property, value } => {
                admit_transformed(property, value, declarations, &mut fixups, options);
            }
            Transform::Copy => admit_copy(&declarations[index], declarations, &mut fixups),
            Transform::Skip => {}
        }
    }

    declarations.extend(fixups);
}

fn classify(decl: &Declaration, siblings: &[Declaration]) -> Transform {
    if is_flexbox(decl) {
        let (property, value) = flexbox::map_declaration(decl, siblings);
        return Transform::Replace { property, value };
    }

    if gradient::has_prefixed_gradient(&decl.value) {
        return match gradient::rewrite_declaration(decl) {
            Ok((property, value)) => Transform::Replace { property, value },
            Err(err) => {
                debug!("skipping malformed gradient in {}: {err}", decl.property);
                Transform::Skip
            }
        };
    }

    if decl.property.starts_with(WEBKIT_PREFIX) || decl.value.contains(WEBKIT_PREFIX) {
        return Transform::Replace {
            property: strip_webkit_prefix(&decl.property).to_string(),
            value: decl.value.replace(WEBKIT_PREFIX, ""),
        };
    }

    Transform::Copy
}

fn is_flexbox(decl: &Declaration) -> bool {
    (decl.property == "display" && decl.value.ends_with("box"))
        || decl.property.contains("box-")
        || decl.property.contains("flex-")
}

/// Splits a fallback welded onto a prefixed function out of a shorthand
/// `background` value, so engines that reject the whole value still get
/// the fallback. The original value keeps only the prefixed part.
fn extract_background_fallbacks(decl: &mut Declaration, fixups: &mut Vec<Declaration>) {
    if decl.property != "background" {
        return;
    }
    if let Some((fallback, rest)) = split_url_fallback(&decl.value) {
        fixups.push(Declaration::synthesized("background", &fallback));
        decl.value = rest;
    }
    if let Some((fallback, rest)) = split_hex_fallback(&decl.value) {
        fixups.push(Declaration::synthesized("background", &fallback));
        decl.value = rest;
    }
}

/// A `url(...)` fragment sitting in front of the first `-webkit-` token.
/// Returns the trimmed fallback and the remaining value.
fn split_url_fallback(value: &str) -> Option<(String, String)> {
    let webkit = value.find(WEBKIT_PREFIX)?;
    let url = value[..webkit].find("url(")?;
    let fallback = trim_space_punc(&value[url..webkit]).to_string();
    let rest = format!("{}{}", &value[..url], &value[webkit..]);
    Some((fallback, rest))
}

/// A hex color (3 to 6 digits) immediately in front of the first
/// `-webkit-` token.
fn split_hex_fallback(value: &str) -> Option<(String, String)> {
    let webkit = value.find(WEBKIT_PREFIX)?;
    let lead = value[..webkit].trim_end();
    let digits = lead.len() - lead.trim_end_matches(|c: char| c.is_ascii_hexdigit()).len();
    if !(3..=6).contains(&digits) || !lead[..lead.len() - digits].ends_with('#') {
        return None;
    }
    let start = lead.len() - digits - 1;
    let fallback = lead[start..].to_string();
    let rest = format!("{}{}", &value[..start], &value[webkit..]);
    Some((fallback, rest))
}

fn admit_transformed(
    mut property: String,
    value: String,
    declarations: &[Declaration],
    fixups: &mut Vec<Declaration>,
    options: &FixupOptions,
) {
    // Better not to pseudo-standardize -webkit-something the standards
    // never picked up.
    if !is_standard_property(&property) {
        trace!("dropping candidate with non-standard property {property}");
        return;
    }

    // Some properties are still prefixed in Gecko; retry those with a
    // -moz- prefix before giving up.
    if let Some(support) = options.support {
        if !support.supports(&hyphen_to_camel(&property)) {
            let prefixed = format!("-moz-{property}");
            if support.supports(&hyphen_to_camel(&prefixed)) {
                property = prefixed;
            } else {
                debug!("engine supports neither {property} nor {prefixed}, dropping");
                return;
            }
        }
    }

    if has_declaration(fixups, &property, &value, false, true)
        || has_declaration(declarations, &property, &value, false, true)
    {
        return;
    }

    if options.warn_on_overwrite {
        let existing = value_of(fixups, &property, false)
            .or_else(|| value_of(declarations, &property, false));
        if let Some(existing) = existing {
            if !existing.contains(WEBKIT_PREFIX) && !existing.contains("box") {
                warn!(
                    "synthesized {property}: {value} shadows author value {property}: {existing}"
                );
            }
        }
    }

    fixups.push(Declaration::synthesized(&property, &value));
    complete_border_image(&property, declarations, fixups);
}

/// Verbatim copies keep the synthesized fragment self-contained. They
/// still have to name a standard property, and a copy that was already
/// synthesized by an earlier pass is not re-emitted.
fn admit_copy(decl: &Declaration, declarations: &[Declaration], fixups: &mut Vec<Declaration>) {
    if !is_standard_property(&decl.property) {
        trace!("not copying non-standard declaration {}", decl.property);
        return;
    }
    if has_synthesized(fixups, &decl.property, &decl.value)
        || has_synthesized(declarations, &decl.property, &decl.value)
    {
        return;
    }
    fixups.push(Declaration::synthesized(&decl.property, &decl.value));
    complete_border_image(&decl.property, declarations, fixups);
}

/// Gecko only renders border-image when a border style is set, so a
/// synthesized border-image without one gets `border-style: solid`
/// alongside.
fn complete_border_image(
    property: &str,
    declarations: &[Declaration],
    fixups: &mut Vec<Declaration>,
) {
    if property == "border-image"
        && value_of(fixups, "border-style", false).is_none()
        && value_of(declarations, "border-style", false).is_none()
    {
        fixups.push(Declaration::synthesized("border-style", "solid"));
    }
}
