//! Gradient values rewritten to standard syntax.
//!
//! Two prefixed eras are handled:
//!
//! - The original Safari call syntax, `-webkit-gradient(linear | radial,
//!   ...)` with `from()`/`to()`/`color-stop()` stops. These are scanned
//!   into call trees and rebuilt as `linear-gradient()` or
//!   `radial-gradient()`.
//! - The later `-webkit-linear-gradient(...)` family, close enough to the
//!   standard syntax that three textual rewrites suffice: drop the
//!   prefix, turn a bare `top`/`bottom` keyword into a `to` direction,
//!   and rotate angle values into the standard coordinate system.

use crate::calls::{parse_calls, CallArg, CallError, FunctionCall};
use crate::model::Declaration;
use crate::properties::{strip_webkit_prefix, WEBKIT_PREFIX};

/// Errors raised while rebuilding a gradient value.
///
/// Callers treat every variant the same way: the offending declaration is
/// skipped and processing continues with the next one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GradientError {
    /// The value could not be scanned into call trees.
    #[error(transparent)]
    Scan(#[from] CallError),
    /// A `-webkit-gradient()` call lacks a required positional argument.
    #[error("gradient call missing argument {index}")]
    MissingArgument { index: usize },
    /// A stop argument is not one of `from()`, `to()` or `color-stop()`.
    #[error("unknown color stop: {0}")]
    UnknownStop(String),
    /// A stop call is missing its color or has a non-numeric position.
    #[error("malformed color stop: {0}")]
    MalformedStop(String),
    /// The value was routed here but holds no convertible gradient call.
    #[error("no convertible gradient call in value")]
    NoGradientCall,
}

/// Returns `true` if the value invokes a prefixed gradient function,
/// either the legacy call syntax or a prefixed modern one.
pub fn has_prefixed_gradient(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    let mut from = 0;
    while let Some(pos) = lower[from..].find(WEBKIT_PREFIX) {
        let at = from + pos;
        let rest = &lower[at + WEBKIT_PREFIX.len()..];
        if let Some(open) = rest.find('(') {
            let name = rest[..open].trim_end();
            if name == "gradient" || name.ends_with("-gradient") {
                return true;
            }
        }
        from = at + WEBKIT_PREFIX.len();
    }
    false
}

/// Rewrites a declaration whose value carries a prefixed gradient.
///
/// Returns the standard property name and the rewritten value. The legacy
/// call syntax is rebuilt structurally; anything else gets the textual
/// modern-syntax rewrites.
pub fn rewrite_declaration(decl: &Declaration) -> Result<(String, String), GradientError> {
    let property = strip_webkit_prefix(&decl.property).to_string();
    let value = if is_legacy(&decl.value) {
        rewrite_legacy(&decl.value)?
    } else {
        rewrite_modern(&decl.value)
    };
    Ok((property, value))
}

/// The legacy form is `-webkit-gradient(` followed by a `linear` or
/// `radial` type keyword. Anything failing that shape takes the modern
/// path instead.
fn is_legacy(value: &str) -> bool {
    let mut from = 0;
    while let Some(pos) = value[from..].find("-webkit-gradient") {
        let at = from + pos;
        let rest = value[at + "-webkit-gradient".len()..].trim_start();
        if let Some(args) = rest.strip_prefix('(') {
            let args = args.trim_start();
            if args.starts_with("linear") || args.starts_with("radial") {
                return true;
            }
        }
        from = at + "-webkit-gradient".len();
    }
    false
}

// ── legacy call syntax ──────────────────────────────────────────────

fn rewrite_legacy(value: &str) -> Result<String, GradientError> {
    // Text after the last ')' belongs to the surrounding shorthand
    // (no-repeat and friends), not to any call.
    let (expr, trailing) = match value.rfind(')') {
        Some(pos) => (&value[..=pos], &value[pos + 1..]),
        None => (value, ""),
    };

    let mut converted = Vec::new();
    for root in &parse_calls(expr)? {
        let Some(call) = root.as_call() else { continue };
        if call.name != "-webkit-gradient" {
            continue;
        }
        converted.push(rewrite_gradient_call(call)?);
    }
    if converted.is_empty() {
        return Err(GradientError::NoGradientCall);
    }

    let mut out = converted.join(", ");
    let trailing = trailing.trim();
    if !trailing.is_empty() && trailing != "," {
        out.push(' ');
        out.push_str(trailing);
    }
    Ok(out)
}

fn rewrite_gradient_call(call: &FunctionCall) -> Result<String, GradientError> {
    let argument = |index: usize| {
        call.arg(index)
            .ok_or(GradientError::MissingArgument { index })
    };

    let kind = argument(0)?.text();
    let mut out = format!("{kind}-gradient(");

    let stops_from = if kind == "linear" {
        let direction = linear_direction(argument(1)?.text(), argument(2)?.text())?;
        out.push_str(&direction);
        3
    } else {
        // radial: argument 1 is the inner center, 4 the outer radius
        let center = argument(1)?.text();
        let radius = argument(4)?.text();
        out.push_str("circle ");
        out.push_str(&px_tail(radius));
        out.push_str(" at ");
        out.push_str(&px_tail(&px_first_coord(center)));
        5
    };

    let mut stops: Vec<String> = Vec::new();
    let mut to_color: Option<String> = None;
    for arg in call.args.iter().skip(stops_from) {
        let Some(stop) = arg.as_call() else {
            return Err(GradientError::UnknownStop(arg.text().to_string()));
        };
        let (position, color_index) = match stop.name.as_str() {
            "color-stop" => {
                let position = stop
                    .arg(0)
                    .ok_or_else(|| GradientError::MalformedStop(stop.name.clone()))?
                    .text();
                (percentify(position, &stop.name)?, 1)
            }
            "to" => ("100%".to_string(), 0),
            "from" => ("0%".to_string(), 0),
            other => return Err(GradientError::UnknownStop(other.to_string())),
        };
        let color = stop
            .arg(color_index)
            .map(color_text)
            .ok_or_else(|| GradientError::MalformedStop(stop.name.clone()))?;
        match stop.name.as_str() {
            // from() stops belong at the front regardless of where they
            // were written; to() becomes the final 100% stop.
            "from" => stops.insert(0, format!("{color} {position}")),
            "to" => to_color = Some(color),
            _ => stops.push(format!("{color} {position}")),
        }
    }

    for stop in &stops {
        out.push_str(", ");
        out.push_str(stop);
    }
    if let Some(color) = to_color {
        out.push_str(", ");
        out.push_str(&color);
        out.push_str(" 100%");
    }
    out.push(')');
    Ok(out)
}

/// Derives the standard direction from the two legacy endpoint arguments.
///
/// Each endpoint splits on whitespace into an x/y keyword pair. Matching
/// y coordinates mean a horizontal run toward the end x, matching x
/// coordinates a vertical run toward the end y. Anything else is a
/// diagonal: 135deg when it starts at the top, 45deg otherwise.
fn linear_direction(start: &str, end: &str) -> Result<String, GradientError> {
    let points: Vec<&str> = start
        .split_whitespace()
        .chain(end.split_whitespace())
        .collect();
    if points.get(1) == points.get(3) {
        let target = points.get(2).ok_or(GradientError::MissingArgument { index: 2 })?;
        Ok(format!("to {target}"))
    } else if points.first() == points.get(2) {
        let target = points.get(3).ok_or(GradientError::MissingArgument { index: 2 })?;
        Ok(format!("to {target}"))
    } else if points.get(1) == Some(&"top") {
        Ok("135deg".to_string())
    } else {
        Ok("45deg".to_string())
    }
}

/// The original Safari syntax wrote fractions where percentages were
/// meant: `0.5` reads as `50%`. Positions already carrying `%` pass
/// through untouched.
fn percentify(position: &str, stop_name: &str) -> Result<String, GradientError> {
    if position.contains('%') {
        return Ok(position.to_string());
    }
    let fraction: f64 = position
        .trim()
        .parse()
        .map_err(|_| GradientError::MalformedStop(stop_name.to_string()))?;
    Ok(format!("{}%", fraction * 100.0))
}

fn color_text(arg: &CallArg) -> String {
    match arg {
        CallArg::Value(text) => text.clone(),
        // a color written as a call, rgb() and friends
        CallArg::Call(call) => {
            let args: Vec<&str> = call.args.iter().map(|a| a.text()).collect();
            format!("{}({})", call.name, args.join(", "))
        }
    }
}

/// Appends `px` to a bare trailing integer: `100` becomes `100px`,
/// `100px` and `50%` stay as they are.
fn px_tail(text: &str) -> String {
    if text.ends_with(|c: char| c.is_ascii_digit()) {
        format!("{text}px")
    } else {
        text.to_string()
    }
}

/// Gives the first bare integer followed by a space a `px` suffix, so a
/// `50 50` center pair becomes `50px 50` before [`px_tail`] fixes the
/// rest.
fn px_first_coord(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if bytes.get(i) == Some(&b' ') {
                return format!("{}px{}", &text[..i], &text[i..]);
            }
        } else {
            i += 1;
        }
    }
    text.to_string()
}

// ── modern prefixed syntax ──────────────────────────────────────────

/// Rewrites the later prefixed syntax. The three rewrites chain: prefix
/// drop first, then the `to` keyword, then the angle rotation.
fn rewrite_modern(value: &str) -> String {
    let mut out = value.replacen(WEBKIT_PREFIX, "", 1);
    if let Some(rewritten) = prepend_to_keyword(&out) {
        out = rewritten;
    }
    if let Some(rewritten) = rotate_angle(&out) {
        out = rewritten;
    }
    out
}

fn is_keyword_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-'
}

/// The old modern syntax said where the gradient starts, the standard
/// says where it goes: a bare `top` or `bottom` keyword needs `to` in
/// front of it. Keywords already following a `to` are left alone.
fn prepend_to_keyword(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    let mut first: Option<(usize, usize)> = None;
    for keyword in ["top", "bottom"] {
        let mut from = 0;
        while let Some(pos) = value[from..].find(keyword) {
            let at = from + pos;
            let end = at + keyword.len();
            let bounded = (at == 0 || !is_keyword_byte(bytes[at - 1]))
                && (end == bytes.len() || !is_keyword_byte(bytes[end]));
            if bounded && !follows_to_word(value, at) {
                if first.is_none_or(|(start, _)| at < start) {
                    first = Some((at, end));
                }
                break;
            }
            from = at + 1;
        }
    }
    first.map(|(at, end)| format!("{}to {}{}", &value[..at], &value[at..end], &value[end..]))
}

fn follows_to_word(value: &str, at: usize) -> bool {
    let before = value[..at].trim_end();
    before.ends_with("to")
        && !before[..before.len() - 2]
            .bytes()
            .next_back()
            .is_some_and(is_keyword_byte)
}

/// Legacy angles measured from a different origin than the standard;
/// subtracting 90 lines the first `<n>deg` value up.
fn rotate_angle(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    let mut from = 0;
    while let Some(pos) = value[from..].find("deg") {
        let at = from + pos;
        let mut start = at;
        while start > 0 && bytes[start - 1].is_ascii_digit() {
            start -= 1;
        }
        if start < at {
            if let Ok(angle) = value[start..at].parse::<i64>() {
                return Some(format!(
                    "{}{}deg{}",
                    &value[..start],
                    angle - 90,
                    &value[at + 3..]
                ));
            }
        }
        from = at + 1;
    }
    None
}
