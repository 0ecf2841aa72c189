//! Recursive descent CSS parser.
//!
//! Parses CSS text into a [`Stylesheet`]. The engine rewrites whole
//! property/value strings, so selectors, conditions and values are kept
//! as raw source text; the parser's job is finding rule boundaries, not
//! understanding every value grammar. Values are sliced straight out of
//! the source between their surrounding punctuation, which preserves
//! interior spacing byte for byte.
//!
//! Media and supports blocks parse recursively into group rules. Every
//! other at-rule contributes nothing the engine could rewrite and is
//! dropped: statement at-rules at their `;`, block at-rules with their
//! whole body.

use logos::Logos;

use crate::model::{Declaration, GroupRule, Rule, StyleRule, Stylesheet};

/// Errors from CSS parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token at byte {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
}

/// Structural CSS token. Everything that is not punctuation, a string or
/// an at-keyword lexes as an opaque [`Token::Text`] run.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
enum Token {
    /// `@media`, `@import`, `@-moz-keyframes`, ...
    #[regex(r"@[a-zA-Z-]+")]
    AtKeyword,

    /// Double-quoted string literal.
    #[regex(r#""[^"]*""#)]
    DoubleQuoted,

    /// Single-quoted string literal.
    #[regex(r"'[^']*'")]
    SingleQuoted,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    /// Identifiers, numbers, units, combinators, `!important`, hex
    /// colors: any run free of structural characters.
    #[regex(r#"[^{};:,()'"@ \t\n\r\f]+"#)]
    Text,
}

/// A token with its byte span in the (comment-stripped) source.
#[derive(Debug, Clone)]
struct Spanned {
    token: Token,
    start: usize,
    end: usize,
}

/// Strips block comments, replacing each with a single space so token
/// boundaries survive (`a/*x*/b` stays two words). An unterminated
/// comment swallows the rest of the input.
fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let bytes = input.as_bytes();
    let mut plain_from = 0;
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] == b'/' && bytes[i + 1] == b'*' {
            out.push_str(&input[plain_from..i]);
            out.push(' ');
            match input[i + 2..].find("*/") {
                Some(comment_len) => {
                    i += 2 + comment_len + 2;
                    plain_from = i;
                }
                None => {
                    plain_from = input.len();
                    break;
                }
            }
        } else {
            i += 1;
        }
    }

    out.push_str(&input[plain_from..]);
    out
}

fn tokenize(input: &str) -> Vec<Spanned> {
    let mut tokens = Vec::new();
    for (result, span) in Token::lexer(input).spanned() {
        let Ok(token) = result else { continue };
        tokens.push(Spanned {
            token,
            start: span.start,
            end: span.end,
        });
    }
    tokens
}

/// Parse a CSS string into a [`Stylesheet`].
pub fn parse_stylesheet(input: &str) -> Result<Stylesheet, ParseError> {
    let cleaned = strip_comments(input);
    let tokens = tokenize(&cleaned);
    let mut parser = Parser {
        source: &cleaned,
        tokens,
        cursor: 0,
    };
    let rules = parser.parse_rules(false)?;
    Ok(Stylesheet { rules })
}

/// Recursive descent parser state.
struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Spanned>,
    cursor: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.cursor)
    }

    /// The current token's kind and span, copied out so the parser can
    /// advance while holding them.
    fn current(&self) -> Option<(Token, usize, usize)> {
        self.peek().map(|t| (t.token.clone(), t.start, t.end))
    }

    fn advance(&mut self) -> Option<Spanned> {
        let tok = self.tokens.get(self.cursor).cloned();
        if tok.is_some() {
            self.cursor += 1;
        }
        tok
    }

    fn expect(&mut self, expected: Token) -> Result<Spanned, ParseError> {
        match self.advance() {
            Some(tok) if tok.token == expected => Ok(tok),
            Some(tok) => Err(ParseError::UnexpectedToken {
                position: tok.start,
                message: format!(
                    "expected {:?}, got '{}'",
                    expected,
                    &self.source[tok.start..tok.end]
                ),
            }),
            None => Err(ParseError::UnexpectedEof(format!("expected {expected:?}"))),
        }
    }

    /// Parse rules until end of input, or until the closing brace of the
    /// surrounding group when `nested`.
    fn parse_rules(&mut self, nested: bool) -> Result<Vec<Rule>, ParseError> {
        let mut rules = Vec::new();
        while let Some(tok) = self.peek() {
            if nested && tok.token == Token::BraceClose {
                break;
            }
            let rule = if tok.token == Token::AtKeyword {
                self.parse_at_rule()?
            } else {
                Some(Rule::Style(self.parse_style_rule()?))
            };
            if let Some(rule) = rule {
                rules.push(rule);
            }
        }
        Ok(rules)
    }

    fn parse_style_rule(&mut self) -> Result<StyleRule, ParseError> {
        let selectors = self.parse_selectors()?;
        self.expect(Token::BraceOpen)?;
        let declarations = self.parse_declarations()?;
        self.expect(Token::BraceClose)?;
        Ok(StyleRule::new(selectors, declarations))
    }

    /// Everything up to the rule's `{`, split on top-level commas.
    /// Commas inside functional notation (`:not(.a, .b)`) do not split.
    fn parse_selectors(&mut self) -> Result<Vec<String>, ParseError> {
        let mut selectors = Vec::new();
        let mut depth = 0usize;
        let mut span: Option<(usize, usize)> = None;

        loop {
            let Some((token, start, end)) = self.current() else {
                return Err(ParseError::UnexpectedEof(
                    "selector without a rule body".into(),
                ));
            };
            match token {
                Token::BraceOpen if depth == 0 => {
                    selectors.push(self.selector_text(span, start)?);
                    return Ok(selectors);
                }
                Token::Comma if depth == 0 => {
                    selectors.push(self.selector_text(span, start)?);
                    span = None;
                    self.cursor += 1;
                    continue;
                }
                Token::BraceClose | Token::Semicolon if depth == 0 => {
                    return Err(ParseError::UnexpectedToken {
                        position: start,
                        message: format!(
                            "expected selector, got '{}'",
                            &self.source[start..end]
                        ),
                    });
                }
                Token::ParenOpen => depth += 1,
                Token::ParenClose => depth = depth.saturating_sub(1),
                _ => {}
            }
            span = Some(match span {
                None => (start, end),
                Some((s, _)) => (s, end),
            });
            self.cursor += 1;
        }
    }

    fn selector_text(
        &self,
        span: Option<(usize, usize)>,
        at: usize,
    ) -> Result<String, ParseError> {
        match span {
            Some((start, end)) => Ok(self.source[start..end].to_string()),
            None => Err(ParseError::UnexpectedToken {
                position: at,
                message: "empty selector".into(),
            }),
        }
    }

    fn parse_declarations(&mut self) -> Result<Vec<Declaration>, ParseError> {
        let mut declarations = Vec::new();
        while let Some(tok) = self.peek() {
            match tok.token {
                Token::BraceClose => break,
                // stray separators are fine
                Token::Semicolon => {
                    self.cursor += 1;
                }
                _ => declarations.push(self.parse_declaration()?),
            }
        }
        Ok(declarations)
    }

    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let prop = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof("expected property name".into()))?;
        if prop.token != Token::Text {
            return Err(ParseError::UnexpectedToken {
                position: prop.start,
                message: format!(
                    "expected property name, got '{}'",
                    &self.source[prop.start..prop.end]
                ),
            });
        }
        let property = self.source[prop.start..prop.end].to_string();

        self.expect(Token::Colon)?;
        let value = self.parse_value();

        if self.peek().is_some_and(|t| t.token == Token::Semicolon) {
            self.cursor += 1;
        }

        Ok(Declaration::new(property, value))
    }

    /// The raw value text up to the declaration's end. Semicolons inside
    /// parentheses (data URIs) do not terminate the value.
    fn parse_value(&mut self) -> String {
        let mut depth = 0usize;
        let mut span: Option<(usize, usize)> = None;

        while let Some((token, start, end)) = self.current() {
            match token {
                Token::Semicolon | Token::BraceClose | Token::BraceOpen if depth == 0 => break,
                Token::ParenOpen => depth += 1,
                Token::ParenClose => depth = depth.saturating_sub(1),
                _ => {}
            }
            span = Some(match span {
                None => (start, end),
                Some((s, _)) => (s, end),
            });
            self.cursor += 1;
        }

        span.map(|(s, e)| self.source[s..e].to_string())
            .unwrap_or_default()
    }

    /// Media and supports blocks become group rules; everything else is
    /// consumed and dropped.
    fn parse_at_rule(&mut self) -> Result<Option<Rule>, ParseError> {
        let at = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof("expected at-keyword".into()))?;
        let name = self.source[at.start + 1..at.end].to_string();

        let mut depth = 0usize;
        let mut span: Option<(usize, usize)> = None;
        let condition = loop {
            let Some((token, start, end)) = self.current() else {
                return Err(ParseError::UnexpectedEof(format!("unterminated @{name}")));
            };
            match token {
                // a statement at-rule like @import adds no rules
                Token::Semicolon if depth == 0 => {
                    self.cursor += 1;
                    return Ok(None);
                }
                Token::BraceOpen if depth == 0 => {
                    self.cursor += 1;
                    break span
                        .map(|(s, e)| self.source[s..e].to_string())
                        .unwrap_or_default();
                }
                Token::ParenOpen => depth += 1,
                Token::ParenClose => depth = depth.saturating_sub(1),
                _ => {}
            }
            span = Some(match span {
                None => (start, end),
                Some((s, _)) => (s, end),
            });
            self.cursor += 1;
        };

        if name == "media" || name == "supports" {
            let rules = self.parse_rules(true)?;
            self.expect(Token::BraceClose)?;
            Ok(Some(Rule::Group(GroupRule::new(name, condition, rules))))
        } else {
            self.skip_block(&name)?;
            Ok(None)
        }
    }

    /// Consumes a brace-balanced block whose `{` is already consumed.
    fn skip_block(&mut self, name: &str) -> Result<(), ParseError> {
        let mut depth = 1usize;
        while let Some(tok) = self.peek() {
            match tok.token {
                Token::BraceOpen => depth += 1,
                Token::BraceClose => {
                    depth -= 1;
                    if depth == 0 {
                        self.cursor += 1;
                        return Ok(());
                    }
                }
                _ => {}
            }
            self.cursor += 1;
        }
        Err(ParseError::UnexpectedEof(format!("unterminated @{name}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Stylesheet {
        parse_stylesheet(input).unwrap_or_else(|e| panic!("parse failed: {e}"))
    }

    fn first_style(input: &str) -> StyleRule {
        let sheet = parse(input);
        sheet.rules[0].as_style().cloned().expect("style rule")
    }

    // ── style rules ──────────────────────────────────────────────────

    #[test]
    fn test_simple_rule() {
        let rule = first_style(".btn { color: red; }");
        assert_eq!(rule.selectors, vec![".btn".to_string()]);
        assert_eq!(rule.declarations.len(), 1);
        assert_eq!(rule.declarations[0].property, "color");
        assert_eq!(rule.declarations[0].value, "red");
        assert!(!rule.declarations[0].synthesized);
    }

    #[test]
    fn test_value_text_is_preserved_byte_for_byte() {
        let rule = first_style(
            "a { background: url(f.png) -webkit-gradient(linear, 0 0, 0 100%, from(#fff), to(#f6f6f6)); }",
        );
        assert_eq!(
            rule.declarations[0].value,
            "url(f.png) -webkit-gradient(linear, 0 0, 0 100%, from(#fff), to(#f6f6f6))"
        );
    }

    #[test]
    fn test_selector_list_splits_on_top_level_commas() {
        let rule = first_style("h1, .a > .b, :not(.x, .y) i { margin: 0; }");
        assert_eq!(
            rule.selectors,
            vec![
                "h1".to_string(),
                ".a > .b".to_string(),
                ":not(.x, .y) i".to_string(),
            ]
        );
    }

    #[test]
    fn test_last_declaration_may_omit_semicolon() {
        let rule = first_style("a { color: red; margin: 0 }");
        assert_eq!(rule.declarations.len(), 2);
        assert_eq!(rule.declarations[1].value, "0");
    }

    #[test]
    fn test_important_flag_is_kept_in_the_value() {
        let rule = first_style("a { color: red !important; }");
        assert_eq!(rule.declarations[0].value, "red !important");
    }

    #[test]
    fn test_data_uri_semicolons_do_not_split() {
        let rule = first_style("a { background: url(data:image/png;base64,AAAA); color: red; }");
        assert_eq!(
            rule.declarations[0].value,
            "url(data:image/png;base64,AAAA)"
        );
        assert_eq!(rule.declarations[1].property, "color");
    }

    #[test]
    fn test_stray_semicolons_are_skipped() {
        let rule = first_style("a { ; color: red;; margin: 0; ; }");
        assert_eq!(rule.declarations.len(), 2);
    }

    #[test]
    fn test_comments_are_stripped() {
        let rule = first_style("a /* note */ { color: /* old */ red; }");
        assert_eq!(rule.selectors, vec!["a".to_string()]);
        assert_eq!(rule.declarations[0].value, "red");
    }

    // ── at-rules ─────────────────────────────────────────────────────

    #[test]
    fn test_media_block_parses_recursively() {
        let sheet = parse("@media screen and (max-width: 600px) { .a { color: red; } }");
        let group = sheet.rules[0].as_group().expect("group rule");
        assert_eq!(group.name, "media");
        assert_eq!(group.condition, "screen and (max-width: 600px)");
        assert_eq!(group.rules.len(), 1);
        assert!(group.rules[0].as_style().is_some());
    }

    #[test]
    fn test_supports_block_parses_recursively() {
        let sheet = parse("@supports (display: flex) { .a { display: flex; } }");
        let group = sheet.rules[0].as_group().expect("group rule");
        assert_eq!(group.name, "supports");
        assert_eq!(group.condition, "(display: flex)");
    }

    #[test]
    fn test_nested_media_blocks() {
        let sheet = parse("@media screen { @media (min-width: 10em) { a { color: red; } } }");
        let outer = sheet.rules[0].as_group().unwrap();
        let inner = outer.rules[0].as_group().unwrap();
        assert_eq!(inner.condition, "(min-width: 10em)");
        assert_eq!(inner.rules.len(), 1);
    }

    #[test]
    fn test_statement_at_rules_are_dropped() {
        let sheet = parse("@charset \"utf-8\"; @import url(x.css); a { color: red; }");
        assert_eq!(sheet.rules.len(), 1);
        assert!(sheet.rules[0].as_style().is_some());
    }

    #[test]
    fn test_block_at_rules_are_skipped_wholesale() {
        let sheet = parse(
            "@keyframes spin { from { transform: rotate(0); } to { transform: rotate(1turn); } } \
             a { color: red; }",
        );
        assert_eq!(sheet.rules.len(), 1);
        assert!(sheet.rules[0].as_style().is_some());
    }

    #[test]
    fn test_font_face_is_skipped() {
        let sheet = parse("@font-face { font-family: X; src: url(x.woff); } b { margin: 0; }");
        assert_eq!(sheet.rules.len(), 1);
    }

    // ── errors ───────────────────────────────────────────────────────

    #[test]
    fn test_missing_close_brace_is_an_eof_error() {
        assert!(matches!(
            parse_stylesheet("a { color: red;"),
            Err(ParseError::UnexpectedEof(_))
        ));
    }

    #[test]
    fn test_missing_colon_is_a_token_error() {
        assert!(matches!(
            parse_stylesheet("a { color red; }"),
            Err(ParseError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn test_stray_close_brace_is_a_token_error() {
        assert!(matches!(
            parse_stylesheet("} a { color: red; }"),
            Err(ParseError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn test_selector_without_body_is_an_eof_error() {
        assert!(matches!(
            parse_stylesheet(".dangling"),
            Err(ParseError::UnexpectedEof(_))
        ));
    }

    #[test]
    fn test_unterminated_media_prelude() {
        assert!(matches!(
            parse_stylesheet("@media screen"),
            Err(ParseError::UnexpectedEof(_))
        ));
    }

    #[test]
    fn test_empty_input_is_an_empty_stylesheet() {
        assert!(parse("").is_empty());
        assert!(parse("   \n\t  ").is_empty());
    }

    // ── comment stripping ────────────────────────────────────────────

    #[test]
    fn test_strip_comments_replaces_with_space() {
        assert_eq!(strip_comments("a/*x*/b"), "a b");
        assert_eq!(strip_comments("/* a */ b /* c */"), "  b  ");
    }

    #[test]
    fn test_unterminated_comment_swallows_rest() {
        assert_eq!(strip_comments("a { }/* never closed"), "a { } ");
    }
}
