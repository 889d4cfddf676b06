//! Operator-precedence climbing over Kronos's natural-language binary
//! operators.
//!
//! None of these operators are single tokens — `divided by`, `is greater
//! than or equal to`, and friends are each a short run of keyword tokens —
//! so matching one is a bounded lookahead from the cursor rather than a
//! single `peek_kind(0)` comparison. [`Parser::match_binary_op`] is the one
//! place that lookahead lives; everything above it just asks "is there an
//! operator here, and how tightly does it bind".

use kronos_ast::{BinaryOp, Node, NodeKind};
use kronos_error::ParseResult;
use kronos_token::TokenKind;

use crate::state::Parser;

/// Left-associative binding power, low to high. Ties resolve left because
/// the right-hand recursive call uses `bp + 1` as its floor.
fn binding_power(op: BinaryOp) -> u8 {
    match op {
        BinaryOp::Or => 1,
        BinaryOp::And => 2,
        BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Gt | BinaryOp::Lt | BinaryOp::Ge | BinaryOp::Le => 3,
        BinaryOp::Add | BinaryOp::Sub => 4,
        BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => 5,
    }
}

impl<'a> Parser<'a> {
    /// Parse one full expression at the lowest precedence (`or`).
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Node> {
        self.parse_expr_bp(1)
    }

    /// Parse an expression, treating any operator binding tighter than
    /// `min_bp` as belonging to an enclosing call rather than this one.
    fn parse_expr_bp(&mut self, min_bp: u8) -> ParseResult<Node> {
        self.guard_recursion()?;
        let mut left = match self.parse_unary() {
            Ok(node) => node,
            Err(e) => {
                self.release_recursion();
                return Err(e);
            }
        };

        loop {
            let Some((op, consumed)) = self.match_binary_op() else { break };
            let bp = binding_power(op);
            if bp < min_bp {
                break;
            }
            self.cursor += consumed;
            let right = match self.parse_expr_bp(bp + 1) {
                Ok(node) => node,
                Err(e) => {
                    self.release_recursion();
                    return Err(e);
                }
            };
            left = Node::new(NodeKind::Binary { op, left: Box::new(left), right: Box::new(right) });
        }

        self.release_recursion();
        Ok(left)
    }

    /// Look ahead from the cursor for a binary operator, without consuming
    /// anything. Returns the operator and how many tokens it spans.
    fn match_binary_op(&self) -> Option<(BinaryOp, usize)> {
        if let Some(hit) = self.match_comparison() {
            return Some(hit);
        }
        match self.peek_kind(0)? {
            TokenKind::Or => Some((BinaryOp::Or, 1)),
            TokenKind::And => Some((BinaryOp::And, 1)),
            TokenKind::Plus => Some((BinaryOp::Add, 1)),
            TokenKind::Minus => Some((BinaryOp::Sub, 1)),
            TokenKind::Times => Some((BinaryOp::Mul, 1)),
            TokenKind::Divided if self.peek_kind(1) == Some(TokenKind::By) => Some((BinaryOp::Div, 2)),
            TokenKind::Mod => Some((BinaryOp::Mod, 1)),
            _ => None,
        }
    }

    /// Match one of the exactly four documented `is ...` comparison
    /// spellings: `is equal`, `is not equal`, `is greater [than] [or
    /// equal]`, `is less [than] [or equal]`, each with an optional trailing
    /// `to`. `not` only ever combines with `equal` — `is not greater`/`is
    /// not less` are not a documented fifth/sixth shape, so a `not` here
    /// fails the match entirely rather than flipping to a complement
    /// operator.
    fn match_comparison(&self) -> Option<(BinaryOp, usize)> {
        if self.peek_kind(0) != Some(TokenKind::Is) {
            return None;
        }
        let mut n = 1;
        let negated = self.peek_kind(n) == Some(TokenKind::Not);
        if negated {
            n += 1;
        }
        match self.peek_kind(n)? {
            TokenKind::Equal => {
                n += 1;
                if self.peek_kind(n) == Some(TokenKind::To) {
                    n += 1;
                }
                Some((if negated { BinaryOp::Ne } else { BinaryOp::Eq }, n))
            }
            TokenKind::Greater | TokenKind::Less if !negated => {
                let less = self.peek_kind(n) == Some(TokenKind::Less);
                n += 1;
                if self.peek_kind(n) == Some(TokenKind::Than) {
                    n += 1;
                }
                let mut or_equal = false;
                if self.peek_kind(n) == Some(TokenKind::Or) && self.peek_kind(n + 1) == Some(TokenKind::Equal) {
                    n += 2;
                    or_equal = true;
                    if self.peek_kind(n) == Some(TokenKind::To) {
                        n += 1;
                    }
                }
                let op = match (less, or_equal) {
                    (false, false) => BinaryOp::Gt,
                    (false, true) => BinaryOp::Ge,
                    (true, false) => BinaryOp::Lt,
                    (true, true) => BinaryOp::Le,
                };
                Some((op, n))
            }
            _ => None,
        }
    }
}
