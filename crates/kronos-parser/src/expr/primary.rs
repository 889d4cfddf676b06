//! Primary expressions: literals, variable references, inline `call`, and
//! the three literal-builder keywords (`list`, `range`, `map`).

use kronos_ast::{Node, NodeKind};
use kronos_error::{ParseError, ParseErrorKind, ParseResult};
use kronos_token::TokenKind;

use super::{anchor, err_pos, token_pos};
use crate::state::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Node> {
        let pos = self.peek(0).and_then(token_pos);
        let Some(tok) = self.peek(0).cloned() else {
            let err = ParseError::new(ParseErrorKind::UnexpectedEof);
            self.report(&err);
            return Err(err);
        };

        match tok.kind {
            TokenKind::Number => {
                self.cursor += 1;
                let value: f64 = tok.text.parse().map_err(|_| {
                    let err = ParseError::at(ParseErrorKind::InvalidNumberFormat, err_pos(pos));
                    self.report(&err);
                    err
                })?;
                if value.is_infinite() {
                    let err = ParseError::at(ParseErrorKind::NumberOverflow, err_pos(pos));
                    self.report(&err);
                    return Err(err);
                }
                Ok(anchor(Node::new(NodeKind::Number(value)), pos))
            }
            TokenKind::String => {
                self.cursor += 1;
                Ok(anchor(Node::new(NodeKind::String(tok.text.to_string())), pos))
            }
            TokenKind::FString => {
                self.cursor += 1;
                self.parse_fstring_body(&tok.text, pos)
            }
            TokenKind::True => {
                self.cursor += 1;
                Ok(anchor(Node::new(NodeKind::Bool(true)), pos))
            }
            TokenKind::False => {
                self.cursor += 1;
                Ok(anchor(Node::new(NodeKind::Bool(false)), pos))
            }
            TokenKind::Null | TokenKind::Undefined => {
                self.cursor += 1;
                Ok(anchor(Node::new(NodeKind::Null), pos))
            }
            TokenKind::Name => {
                self.cursor += 1;
                Ok(anchor(Node::new(NodeKind::Var { name: tok.text.to_string() }), pos))
            }
            TokenKind::Call => self.parse_call_expr(pos),
            TokenKind::List => self.parse_list_literal(pos),
            TokenKind::Range => self.parse_range_literal(pos),
            TokenKind::Map => self.parse_map_literal(pos),
            _ => {
                let err = ParseError::at(ParseErrorKind::UnexpectedInValuePosition, err_pos(pos));
                self.report(&err);
                Err(err)
            }
        }
    }
}
