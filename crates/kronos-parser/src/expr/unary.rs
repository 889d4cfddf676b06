//! Prefix operators.
//!
//! `not` and `minus` are the only two: both are parsed here, strictly before
//! postfix indexing/slicing is applied to whatever they wrap, so `not list at
//! 0` parses as `not (list at 0)` rather than `(not list) at 0` — there is no
//! sensible indexing target on a bare boolean.

use kronos_ast::{Node, NodeKind, UnaryOp};
use kronos_error::ParseResult;
use kronos_token::TokenKind;

use super::{anchor, token_pos};
use crate::state::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_unary(&mut self) -> ParseResult<Node> {
        self.guard_recursion()?;
        let result = self.parse_unary_inner();
        self.release_recursion();
        result
    }

    fn parse_unary_inner(&mut self) -> ParseResult<Node> {
        let pos = self.peek(0).and_then(token_pos);
        let op = match self.peek_kind(0) {
            Some(TokenKind::Not) => Some(UnaryOp::Not),
            Some(TokenKind::Minus) => Some(UnaryOp::Neg),
            _ => None,
        };
        if let Some(op) = op {
            self.cursor += 1;
            let operand = self.parse_unary()?;
            return Ok(anchor(Node::new(NodeKind::Unary { op, operand: Box::new(operand) }), pos));
        }
        let primary = self.parse_primary()?;
        self.parse_postfix(primary)
    }
}
