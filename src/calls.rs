//! Scanner for legacy gradient expressions.
//!
//! Breaks a declaration value like
//! `-webkit-gradient(linear, left top, right top, from(#fff), to(#000))`
//! into function-call trees. The lexer (logos) only distinguishes `(`,
//! `)`, `,` and runs of everything else; an explicit frame stack turns
//! those tokens into nested calls. Unbalanced parentheses are hard errors
//! rather than silently malformed trees, so downstream code can index
//! argument positions without defensive field checks.

use logos::Logos;

/// Errors from scanning a call expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallError {
    #[error("unexpected ')' at byte {position} with no open call")]
    UnbalancedClose { position: usize },
    #[error("unclosed call: {0}(")]
    UnclosedCall(String),
}

/// Call-expression token. No skip pattern: whitespace stays inside text
/// runs and is trimmed when a run is flushed into the tree.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum CallToken {
    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token(",")]
    Comma,

    /// Everything between delimiters, whitespace included.
    #[regex(r"[^(),]+")]
    Text,
}

/// A function call with its arguments, e.g. `from(#fff)` or
/// `-webkit-gradient(linear, left top, ...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    /// The name before the `(`, trimmed. May be empty for a bare paren.
    pub name: String,
    /// Ordered arguments, comma-separated in the source.
    pub args: Vec<CallArg>,
}

impl FunctionCall {
    /// The argument at `index`, if present.
    pub fn arg(&self, index: usize) -> Option<&CallArg> {
        self.args.get(index)
    }
}

/// One argument slot: a nested call or a literal run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArg {
    /// A nested function call.
    Call(FunctionCall),
    /// A literal argument, e.g. `linear` or `left top`.
    Value(String),
}

impl CallArg {
    /// The nested call, if this argument is one.
    pub fn as_call(&self) -> Option<&FunctionCall> {
        match self {
            CallArg::Call(call) => Some(call),
            CallArg::Value(_) => None,
        }
    }

    /// The textual face of the argument: a literal's text, or a call's name.
    pub fn text(&self) -> &str {
        match self {
            CallArg::Call(call) => &call.name,
            CallArg::Value(value) => value,
        }
    }
}

/// An in-progress call while its `)` is still pending.
struct Frame {
    name: String,
    args: Vec<CallArg>,
}

/// Flush the pending text run as a literal argument of the innermost open
/// call (or of the root list). Whitespace-only runs are dropped.
fn flush_word(word: &mut String, stack: &mut Vec<Frame>, roots: &mut Vec<CallArg>) {
    let text = word.trim();
    if !text.is_empty() {
        let arg = CallArg::Value(text.to_string());
        match stack.last_mut() {
            Some(frame) => frame.args.push(arg),
            None => roots.push(arg),
        }
    }
    word.clear();
}

/// Parse a value into its root call/literal list.
///
/// `url(a.png), -webkit-gradient(linear, ...)` yields two roots. Literal
/// runs at the root (e.g. a trailing `no-repeat`) are kept as values.
pub fn parse_calls(input: &str) -> Result<Vec<CallArg>, CallError> {
    let mut roots: Vec<CallArg> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut word = String::new();

    for (result, span) in CallToken::lexer(input).spanned() {
        let Ok(token) = result else { continue };
        match token {
            CallToken::Text => word.push_str(&input[span]),
            CallToken::OpenParen => {
                stack.push(Frame {
                    name: word.trim().to_string(),
                    args: Vec::new(),
                });
                word.clear();
            }
            CallToken::Comma => flush_word(&mut word, &mut stack, &mut roots),
            CallToken::CloseParen => {
                flush_word(&mut word, &mut stack, &mut roots);
                let Some(frame) = stack.pop() else {
                    return Err(CallError::UnbalancedClose {
                        position: span.start,
                    });
                };
                let call = CallArg::Call(FunctionCall {
                    name: frame.name,
                    args: frame.args,
                });
                match stack.last_mut() {
                    Some(parent) => parent.args.push(call),
                    None => roots.push(call),
                }
            }
        }
    }

    if let Some(frame) = stack.pop() {
        return Err(CallError::UnclosedCall(frame.name));
    }
    flush_word(&mut word, &mut stack, &mut roots);

    Ok(roots)
}
