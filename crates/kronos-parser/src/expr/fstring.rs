//! F-string bodies: an alternating run of literal text and `{expression}`
//! segments.
//!
//! The tokenizer hands the parser the f-string's *interior* as one opaque
//! string (delimiters already stripped); everything past that point —
//! finding the `{…}` spans and turning each one back into an expression — is
//! this parser's job, via the injected [`kronos_token::TokenSource`]. That
//! re-entry is the one place this crate calls back into the tokenizer it
//! otherwise treats as a black box.

use kronos_ast::{Node, NodeKind, SourcePos};
use kronos_error::{ParseError, ParseErrorKind, ParseResult};
use kronos_token::TokenKind;

use super::{anchor, err_pos};
use crate::state::Parser;

impl<'a> Parser<'a> {
    /// Split `text` into alternating `String`/expression parts and wrap the
    /// result in an `FString` node. Parts always alternate and a literal
    /// segment is emitted (possibly empty) before every expression segment
    /// and after the last one, so an empty body yields exactly one empty
    /// `String` part and two adjacent expressions are never representable.
    pub(crate) fn parse_fstring_body(&mut self, text: &str, pos: Option<SourcePos>) -> ParseResult<Node> {
        let chars: Vec<char> = text.chars().collect();
        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                '\\' if i + 1 < chars.len() => {
                    literal.push(chars[i + 1]);
                    i += 2;
                }
                '{' => {
                    parts.push(Node::new(NodeKind::String(std::mem::take(&mut literal))));
                    i += 1;
                    let start = i;
                    let mut depth = 1usize;
                    while i < chars.len() && depth > 0 {
                        match chars[i] {
                            '\\' if i + 1 < chars.len() => i += 1, // skip the escaped byte too
                            '{' => depth += 1,
                            '}' => {
                                depth -= 1;
                                if depth == 0 {
                                    break;
                                }
                            }
                            _ => {}
                        }
                        i += 1;
                    }
                    if depth != 0 {
                        let err = ParseError::at(ParseErrorKind::UnmatchedBraceInFString, err_pos(pos));
                        self.report(&err);
                        return Err(err);
                    }
                    let inner: String = chars[start..i].iter().collect();
                    i += 1; // the matched closing brace
                    parts.push(self.parse_embedded_expression(&inner)?);
                }
                c => {
                    literal.push(c);
                    i += 1;
                }
            }
        }
        parts.push(Node::new(NodeKind::String(literal)));

        Ok(anchor(Node::new(NodeKind::FString { parts }), pos))
    }

    /// Re-tokenize `source` through the injected [`kronos_token::TokenSource`]
    /// and parse a single expression from it, temporarily swapping this
    /// parser's token buffer rather than constructing a second `Parser` — so
    /// the recursion budget and error sink stay shared across the re-entry.
    ///
    /// Single-line synthetic fragments like this one still get a leading
    /// `Indent` token from a tokenizer that emits one per source line; it
    /// carries no information here; so it is skipped before parsing rather
    /// than threaded through as the first unconsumed token.
    fn parse_embedded_expression(&mut self, source: &str) -> ParseResult<Node> {
        self.guard_recursion()?;
        let sub_tokens = self.tokenizer.tokenize(source);
        let saved_tokens = std::mem::replace(&mut self.tokens, sub_tokens);
        let saved_cursor = std::mem::replace(&mut self.cursor, 0);

        if self.at(TokenKind::Indent) {
            self.cursor += 1;
        }
        let result = self.parse_expression();

        self.tokens = saved_tokens;
        self.cursor = saved_cursor;
        self.release_recursion();
        result
    }
}
