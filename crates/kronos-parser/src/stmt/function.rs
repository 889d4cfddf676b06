//! Function definitions, `call` (both as a statement and, via
//! [`Parser::parse_call_expr`], as a value), and `return`.

use kronos_ast::{Node, NodeKind, SourcePos};
use kronos_error::ParseResult;
use kronos_token::TokenKind;

use crate::expr::{anchor, token_pos};
use crate::state::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_function(&mut self, indent: u32) -> ParseResult<Node> {
        let pos = self.peek(0).and_then(token_pos);
        self.expect(TokenKind::Function)?;
        let name = self.expect(TokenKind::Name)?.text.to_string();

        let mut params = Vec::new();
        if self.eat(TokenKind::With) {
            loop {
                params.push(self.expect(TokenKind::Name)?.text.to_string());
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(TokenKind::Colon)?;
        self.end_of_statement()?;
        let block = self.parse_block(indent)?;

        Ok(anchor(Node::new(NodeKind::Function { name, params, block }), pos).with_indent(indent))
    }

    /// `call name [with a1[, a2…]]`, usable both in value position (an
    /// expression that yields the call's result) and as its own statement.
    pub(crate) fn parse_call_expr(&mut self, pos: Option<SourcePos>) -> ParseResult<Node> {
        self.expect(TokenKind::Call)?;
        let name = self.expect(TokenKind::Name)?.text.to_string();

        let mut args = Vec::new();
        if self.eat(TokenKind::With) {
            loop {
                args.push(self.parse_expression()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }

        Ok(anchor(Node::new(NodeKind::Call { name, args }), pos))
    }

    pub(crate) fn parse_call_stmt(&mut self) -> ParseResult<Node> {
        let pos = self.peek(0).and_then(token_pos);
        let node = self.parse_call_expr(pos)?;
        self.end_of_statement()?;
        Ok(node)
    }

    pub(crate) fn parse_return(&mut self) -> ParseResult<Node> {
        let pos = self.peek(0).and_then(token_pos);
        self.expect(TokenKind::Return)?;
        let value = match self.peek_kind(0) {
            Some(TokenKind::Newline) | Some(TokenKind::Eof) | None => Node::new(NodeKind::Null),
            _ => self.parse_expression()?,
        };
        self.end_of_statement()?;
        Ok(anchor(Node::new(NodeKind::Return { value: Box::new(value) }), pos))
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
    fn function_with_params() {
        let node = parse_stmt("function add with a, b:\n    return a plus b");
        match node.kind {
            NodeKind::Function { params, block, .. } => {
                assert_eq!(params, vec!["a".to_string(), "b".to_string()]);
                assert_eq!(block.len(), 1);
            }
            other => panic!("expected Function, got {other:?}"),
        }
    }

    #[test]
    fn function_with_no_params() {
        let node = parse_stmt("function greet:\n    print 1");
        match node.kind {
            NodeKind::Function { params, .. } => assert!(params.is_empty()),
            other => panic!("expected Function, got {other:?}"),
        }
    }

    #[test]
    fn call_statement_with_args() {
        let node = parse_stmt("call add with 1, 2");
        match node.kind {
            NodeKind::Call { name, args } => {
                assert_eq!(name, "add");
                assert_eq!(args.len(), 2);
            }
            other => panic!("expected Call, got {other:?}"),
        }
    }

    #[test]
    fn bare_return_is_null() {
        let node = parse_stmt("return");
        match node.kind {
            NodeKind::Return { value } => assert_eq!(value.kind, NodeKind::Null),
            other => panic!("expected Return, got {other:?}"),
        }
    }

    #[test]
    fn return_with_value() {
        let node = parse_stmt("return 42");
        match node.kind {
            NodeKind::Return { value } => assert!(matches!(value.kind, NodeKind::Number(n) if n == 42.0)),
            other => panic!("expected Return, got {other:?}"),
        }
    }
}
