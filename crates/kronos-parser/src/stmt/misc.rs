//! `print` and `delete`, the two statement forms with no nested block and
//! no sibling clauses.

use kronos_ast::{Node, NodeKind};
use kronos_error::ParseResult;
use kronos_token::TokenKind;

use crate::expr::{anchor, token_pos};
use crate::state::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_print(&mut self) -> ParseResult<Node> {
        let pos = self.peek(0).and_then(token_pos);
        self.expect(TokenKind::Print)?;
        let value = self.parse_expression()?;
        self.end_of_statement()?;
        Ok(anchor(Node::new(NodeKind::Print { value: Box::new(value) }), pos))
    }

    /// `delete target at key`. `target` is always a bareword; there is no
    /// surface form for deleting through a nested index expression.
    pub(crate) fn parse_delete(&mut self) -> ParseResult<Node> {
        let pos = self.peek(0).and_then(token_pos);
        self.expect(TokenKind::Delete)?;
        let name = self.expect(TokenKind::Name)?.text.to_string();
        self.expect(TokenKind::At)?;
        let key = self.parse_expression()?;
        self.end_of_statement()?;
        let target = Node::new(NodeKind::Var { name });
        Ok(anchor(Node::new(NodeKind::Delete { target: Box::new(target), key: Box::new(key) }), pos))
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
    fn print_an_fstring() {
        let node = parse_stmt("print f\"hi {name}\"");
        match node.kind {
            NodeKind::Print { value } => assert!(matches!(value.kind, NodeKind::FString { .. })),
            other => panic!("expected Print, got {other:?}"),
        }
    }

    #[test]
    fn delete_by_key() {
        let node = parse_stmt("delete scores at \"alice\"");
        match node.kind {
            NodeKind::Delete { target, key } => {
                assert_eq!(target.kind, NodeKind::Var { name: "scores".to_string() });
                assert_eq!(key.kind, NodeKind::String("alice".to_string()));
            }
            other => panic!("expected Delete, got {other:?}"),
        }
    }
}
