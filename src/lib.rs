//! # unprefix
//!
//! A CSS fixup engine that translates legacy `-webkit-`-prefixed styles
//! into their standards-compliant equivalents.
//!
//! Stylesheets written against the 2009-2012 WebKit drafts lean on prefixed
//! gradients, old box-model flexbox properties and prefixed one-offs that
//! other engines never shipped. This crate parses such a stylesheet,
//! classifies every declaration, synthesizes standard counterparts, and
//! renders the synthesized rules as a CSS fragment meant to be appended
//! after the original. Originals are never touched; because the fragment
//! comes later in the cascade, the standard form wins exactly where a
//! standard form exists.
//!
//! ## Core Systems
//!
//! - **[`parser`]** — CSS text to rule tree: comments, at-rules, raw values
//! - **[`model`]** — Stylesheet, Rule, Declaration shapes shared by every pass
//! - **[`walker`]** — Rule tree traversal applying the fixup pass per style rule
//! - **[`classifier`]** — Per-declaration dispatch, admission gates, fallback splits
//! - **[`flexbox`]** — 2009/2011 draft flexbox to final-spec mapping
//! - **[`gradient`]** — Legacy and prefixed gradient rewriting
//! - **[`calls`]** — Nested function-call scanner for gradient expressions
//! - **[`query`]** — Declaration-list lookups: values, duplicates, invocations
//! - **[`properties`]** — Standard-property registry and prefix helpers
//! - **[`extract`]** — Synthesized-subset extraction
//! - **[`serializer`]** — Rule tree back to CSS text
//! - **[`session`]** — Configuration, orchestration, per-owner memoization
//! - **[`text`]** — Small text utilities shared across passes

// Foundation
pub mod model;
pub mod properties;
pub mod text;

// Value scanning
pub mod calls;
pub mod query;

// Transforms
pub mod classifier;
pub mod flexbox;
pub mod gradient;

// Pipeline
pub mod extract;
pub mod parser;
pub mod serializer;
pub mod walker;

// Entry point
pub mod session;
