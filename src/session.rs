//! Fixup session: configuration plus per-owner memoization.
//!
//! A [`Session`] drives the whole pipeline: strip HTML comment guards,
//! parse, walk the rule tree appending fixups, extract the synthesized
//! subset and render it. [`Session::fixup_owner`] additionally remembers
//! which stylesheets were already handled, keyed by a caller-chosen owner
//! id (an element id, a URL), so each is processed at most once per
//! session.

use std::collections::HashSet;

use log::debug;

use crate::classifier::{FixupOptions, StyleSupport};
use crate::extract::synthesized_subset;
use crate::parser::{parse_stylesheet, ParseError};
use crate::serializer::stringify;
use crate::text::strip_html_comments;
use crate::walker::apply_fixups;

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Pipeline configuration and the per-owner processed set.
#[derive(Default)]
pub struct Session {
    processed: HashSet<String>,
    support: Option<Box<dyn StyleSupport>>,
    warn_on_overwrite: bool,
}

impl Session {
    /// Create a new default session: no capability probe, no overwrite
    /// warnings, nothing processed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the engine capability probe (builder).
    pub fn with_support(mut self, support: impl StyleSupport + 'static) -> Self {
        self.support = Some(Box::new(support));
        self
    }

    /// Enable warnings when a fixup shadows an author value (builder).
    pub fn with_overwrite_warnings(mut self, warn: bool) -> Self {
        self.warn_on_overwrite = warn;
        self
    }

    /// Run the fixup pipeline over a CSS string.
    ///
    /// Returns the synthesized rules as CSS text, ready to append after
    /// the original stylesheet. `Ok(None)` means nothing was synthesized;
    /// malformed input returns the parse error and the stylesheet is left
    /// alone.
    pub fn fixup(&self, css: &str) -> Result<Option<String>, ParseError> {
        let mut stylesheet = parse_stylesheet(strip_html_comments(css))?;

        let options = FixupOptions {
            support: self.support.as_deref(),
            warn_on_overwrite: self.warn_on_overwrite,
        };
        apply_fixups(&mut stylesheet, &options);

        let subset = synthesized_subset(&stylesheet);
        if subset.is_empty() {
            Ok(None)
        } else {
            Ok(Some(stringify(&subset)))
        }
    }

    /// Like [`fixup`](Self::fixup), but at most once per owner.
    ///
    /// An owner already seen returns `Ok(None)` without reparsing. A
    /// successful run marks the owner processed even when nothing was
    /// synthesized; a parse failure leaves it unmarked, so the caller may
    /// retry once the text is corrected.
    pub fn fixup_owner(&mut self, owner: &str, css: &str) -> Result<Option<String>, ParseError> {
        if self.processed.contains(owner) {
            debug!("stylesheet '{owner}' already processed, skipping");
            return Ok(None);
        }
        let output = self.fixup(css)?;
        self.processed.insert(owner.to_string());
        Ok(output)
    }

    /// Mark an owner as processed without running the pipeline. The
    /// fragments this engine emits are themselves stylesheets; marking
    /// them keeps them from being reprocessed.
    pub fn mark_processed(&mut self, owner: impl Into<String>) {
        self.processed.insert(owner.into());
    }

    /// Whether an owner was processed (or marked) in this session.
    pub fn is_processed(&self, owner: &str) -> bool {
        self.processed.contains(owner)
    }

    /// Forget all processed owners.
    pub fn reset(&mut self) {
        self.processed.clear();
    }
}
