//! `set`/`let` assignment, including the indexed form (`let target at index
//! to value`).

use kronos_ast::{Node, NodeKind};
use kronos_error::ParseResult;
use kronos_token::TokenKind;

use crate::expr::{anchor, token_pos};
use crate::state::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_assignment(&mut self) -> ParseResult<Node> {
        let pos = self.peek(0).and_then(token_pos);
        let head = self.expect_one_of(&[TokenKind::Set, TokenKind::Let])?;
        let is_mutable = head.kind == TokenKind::Let;
        let name_tok = self.expect(TokenKind::Name)?;
        let name = name_tok.text.to_string();

        let node = if self.eat(TokenKind::At) {
            let index = self.parse_expression()?;
            self.expect(TokenKind::To)?;
            let value = self.parse_expression()?;
            let target = Node::new(NodeKind::Var { name });
            anchor(Node::new(NodeKind::AssignIndex { target: Box::new(target), index: Box::new(index), value: Box::new(value) }), pos)
        } else {
            self.expect(TokenKind::To)?;
            let value = self.parse_expression()?;
            let type_name = if self.eat(TokenKind::As) { Some(self.expect(TokenKind::Name)?.text.to_string()) } else { None };
            anchor(Node::new(NodeKind::Assign { name, value: Box::new(value), is_mutable, type_name }), pos)
        };

        self.end_of_statement()?;
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use kronos_tdd_support::{tokenize, FixtureTokenizer};

    fn stmt(src: &str) -> Node {
        let tokenizer = FixtureTokenizer;
        let mut p = Parser::new(tokenize(src), &tokenizer, None);
        p.consume(TokenKind::Indent);
        p.parse_assignment().expect("assignment should parse")
    }

    #[test]
    fn set_is_immutable() {
        let node = stmt("set x to 1");
        match node.kind {
            NodeKind::Assign { name, is_mutable, type_name, .. } => {
                assert_eq!(name, "x");
                assert!(!is_mutable);
                assert!(type_name.is_none());
            }
            other => panic!("expected Assign, got {other:?}"),
        }
    }

    #[test]
    fn let_with_type_annotation() {
        let node = stmt("let x to 1 as number");
        match node.kind {
            NodeKind::Assign { is_mutable, type_name, .. } => {
                assert!(is_mutable);
                assert_eq!(type_name, Some("number".to_string()));
            }
            other => panic!("expected Assign, got {other:?}"),
        }
    }

    #[test]
    fn indexed_assignment() {
        let node = stmt("let items at 0 to 99");
        match node.kind {
            NodeKind::AssignIndex { target, .. } => {
                assert_eq!(target.kind, NodeKind::Var { name: "items".to_string() });
            }
            other => panic!("expected AssignIndex, got {other:?}"),
        }
    }
}
