//! The three literal-builder keywords: `list [...]`, `range start to end [by
//! step]`, and `map [k: v, ...]`.

use kronos_ast::{Node, NodeKind, SourcePos};
use kronos_error::ParseResult;
use kronos_token::TokenKind;

use super::anchor;
use crate::state::Parser;

/// The token kinds that can open a list/map element, per the documented
/// emptiness check: deliberately narrower than "begins a value" (no `range`,
/// `map`, `call`, unary `-`, or f-string) — this is a predictive peek, not a
/// value-start check, and the two sets are not meant to coincide.
const ELEMENT_START: &[TokenKind] = &[
    TokenKind::Number,
    TokenKind::String,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Null,
    TokenKind::Undefined,
    TokenKind::Name,
    TokenKind::List,
    TokenKind::Not,
];

impl<'a> Parser<'a> {
    /// `list [e1, e2, …]`. An empty bracket pair is a valid, empty list.
    pub(crate) fn parse_list_literal(&mut self, pos: Option<SourcePos>) -> ParseResult<Node> {
        self.expect(TokenKind::List)?;
        self.expect(TokenKind::LeftBracket)?;
        let mut elements = Vec::new();
        if self.at_any(ELEMENT_START) {
            loop {
                elements.push(self.parse_expression()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightBracket)?;
        Ok(anchor(Node::new(NodeKind::List { elements }), pos))
    }

    /// `range start to end [by step]`, also reused by the `for` loop's
    /// `is_range` form for the shared start/end/step grammar.
    pub(crate) fn parse_range_literal(&mut self, pos: Option<SourcePos>) -> ParseResult<Node> {
        self.expect(TokenKind::Range)?;
        let (start, end, step) = self.parse_range_bounds()?;
        Ok(anchor(Node::new(NodeKind::Range { start: Box::new(start), end: Box::new(end), step: step.map(Box::new) }), pos))
    }

    /// `start to end [by step]`, with the leading `range` keyword already
    /// consumed by the caller (or never present, for the `for … in range`
    /// form which shares this grammar without re-wrapping it in its own
    /// `Range` node).
    pub(crate) fn parse_range_bounds(&mut self) -> ParseResult<(Node, Node, Option<Node>)> {
        let start = self.parse_unary()?;
        self.expect(TokenKind::To)?;
        let end = self.parse_unary()?;
        let step = if self.eat(TokenKind::By) { Some(self.parse_unary()?) } else { None };
        Ok((start, end, step))
    }

    /// `map [k1: v1, k2: v2, …]`. A bareword key is canonicalised to a
    /// string literal; a quoted key is used as given.
    pub(crate) fn parse_map_literal(&mut self, pos: Option<SourcePos>) -> ParseResult<Node> {
        self.expect(TokenKind::Map)?;
        self.expect(TokenKind::LeftBracket)?;
        let mut keys = Vec::new();
        let mut values = Vec::new();
        if self.at_any(ELEMENT_START) {
            loop {
                keys.push(self.parse_map_key()?);
                self.expect(TokenKind::Colon)?;
                values.push(self.parse_expression()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightBracket)?;
        Ok(anchor(Node::new(NodeKind::Map { keys, values }), pos))
    }

    /// A map key: a bareword is canonicalised to a string literal, a quoted
    /// string is used as given, and anything else (number, bool, null, or a
    /// general expression) is admitted as-is per the data model.
    fn parse_map_key(&mut self) -> ParseResult<Node> {
        if self.at(TokenKind::String) {
            let tok = self.expect(TokenKind::String)?;
            return Ok(Node::new(NodeKind::String(tok.text.to_string())));
        }
        if self.at(TokenKind::Name) {
            let tok = self.expect(TokenKind::Name)?;
            return Ok(Node::new(NodeKind::String(tok.text.to_string())));
        }
        self.parse_expression()
    }
}
