//! `if`/`else if`/`else`, `for`, `while`, `break`, and `continue`.

use kronos_ast::{Node, NodeKind};
use kronos_error::ParseResult;
use kronos_token::TokenKind;

use crate::expr::{anchor, token_pos};
use crate::state::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_if(&mut self, indent: u32) -> ParseResult<Node> {
        let pos = self.peek(0).and_then(token_pos);
        self.expect(TokenKind::If)?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::Colon)?;
        self.end_of_statement()?;
        let block = self.parse_block(indent)?;

        let mut else_ifs = Vec::new();
        let mut else_block = None;
        while self.at_sibling_line(indent, TokenKind::Else) {
            self.cursor += 2; // the sibling's Indent token, then `else`
            if self.eat(TokenKind::If) {
                let cond = self.parse_expression()?;
                self.expect(TokenKind::Colon)?;
                self.end_of_statement()?;
                let blk = self.parse_block(indent)?;
                else_ifs.push((cond, blk));
            } else {
                self.expect(TokenKind::Colon)?;
                self.end_of_statement()?;
                else_block = Some(self.parse_block(indent)?);
                break;
            }
        }

        Ok(anchor(Node::new(NodeKind::If { condition: Box::new(condition), block, else_ifs, else_block }), pos).with_indent(indent))
    }

    pub(crate) fn parse_for(&mut self, indent: u32) -> ParseResult<Node> {
        let pos = self.peek(0).and_then(token_pos);
        self.expect(TokenKind::For)?;
        let var = self.expect(TokenKind::Name)?.text.to_string();
        self.expect(TokenKind::In)?;

        let (iterable, is_range, end, step) = if self.eat(TokenKind::Range) {
            let (start, end, step) = self.parse_range_bounds()?;
            (start, true, Some(Box::new(end)), step.map(Box::new))
        } else {
            (self.parse_expression()?, false, None, None)
        };

        self.expect(TokenKind::Colon)?;
        self.end_of_statement()?;
        let block = self.parse_block(indent)?;

        Ok(anchor(Node::new(NodeKind::For { var, iterable: Box::new(iterable), is_range, end, step, block }), pos).with_indent(indent))
    }

    pub(crate) fn parse_while(&mut self, indent: u32) -> ParseResult<Node> {
        let pos = self.peek(0).and_then(token_pos);
        self.expect(TokenKind::While)?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::Colon)?;
        self.end_of_statement()?;
        let block = self.parse_block(indent)?;

        Ok(anchor(Node::new(NodeKind::While { condition: Box::new(condition), block }), pos).with_indent(indent))
    }

    pub(crate) fn parse_break(&mut self) -> ParseResult<Node> {
        let pos = self.peek(0).and_then(token_pos);
        self.expect(TokenKind::Break)?;
        self.end_of_statement()?;
        Ok(anchor(Node::new(NodeKind::Break), pos))
    }

    pub(crate) fn parse_continue(&mut self) -> ParseResult<Node> {
        let pos = self.peek(0).and_then(token_pos);
        self.expect(TokenKind::Continue)?;
        self.end_of_statement()?;
        Ok(anchor(Node::new(NodeKind::Continue), pos))
    }

    /// `true` when the line at the cursor is indented exactly to `indent`
    /// and its first real token (past the `Indent` marker) is `kind` —
    /// i.e. a sibling clause of the construct that started at `indent`,
    /// not a nested statement or a dedent past it.
    pub(crate) fn at_sibling_line(&self, indent: u32, kind: TokenKind) -> bool {
        match self.peek(0) {
            Some(tok) if tok.kind == TokenKind::Indent && tok.indent == Some(indent) => self.peek_kind(1) == Some(kind),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use kronos_tdd_support::{tokenize, FixtureTokenizer};

    fn parse_stmt(src: &str) -> Node {
        let tokenizer = FixtureTokenizer;
        let mut p = Parser::new(tokenize(src), &tokenizer, None);
        p.consume(TokenKind::Indent);
        p.parse_statement(0).expect("statement should parse")
    }

    #[test]
    fn if_with_no_else() {
        let node = parse_stmt("if true:\n    print 1");
        match node.kind {
            NodeKind::If { block, else_ifs, else_block, .. } => {
                assert_eq!(block.len(), 1);
                assert!(else_ifs.is_empty());
                assert!(else_block.is_none());
            }
            other => panic!("expected If, got {other:?}"),
        }
    }

    #[test]
    fn if_else_if_else_chain() {
        let node = parse_stmt("if a:\n    print 1\nelse if b:\n    print 2\nelse:\n    print 3");
        match node.kind {
            NodeKind::If { block, else_ifs, else_block, .. } => {
                assert_eq!(block.len(), 1);
                assert_eq!(else_ifs.len(), 1);
                assert_eq!(else_block.expect("else block").len(), 1);
            }
            other => panic!("expected If, got {other:?}"),
        }
    }

    #[test]
    fn for_over_range_sets_is_range() {
        let node = parse_stmt("for i in range 1 to 3:\n    print i");
        match node.kind {
            NodeKind::For { is_range, end, .. } => {
                assert!(is_range);
                assert!(end.is_some());
            }
            other => panic!("expected For, got {other:?}"),
        }
    }

    #[test]
    fn for_over_a_collection_is_not_a_range() {
        let node = parse_stmt("for item in items:\n    print item");
        match node.kind {
            NodeKind::For { is_range, end, .. } => {
                assert!(!is_range);
                assert!(end.is_none());
            }
            other => panic!("expected For, got {other:?}"),
        }
    }

    #[test]
    fn while_loop_parses_condition_and_block() {
        let node = parse_stmt("while x is less than 10:\n    print x");
        match node.kind {
            NodeKind::While { block, .. } => assert_eq!(block.len(), 1),
            other => panic!("expected While, got {other:?}"),
        }
    }
}
