//! The two `import` surface forms: `import module [from "path"]` and `from
//! module import a[, b…]`. Both produce the same `Import` tag; only
//! `is_from_import` tells them apart downstream.

use kronos_ast::{Node, NodeKind};
use kronos_error::ParseResult;
use kronos_token::TokenKind;

use crate::expr::{anchor, token_pos};
use crate::state::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_import(&mut self) -> ParseResult<Node> {
        let pos = self.peek(0).and_then(token_pos);

        let kind = if self.eat(TokenKind::Import) {
            let module_name = self.expect(TokenKind::Name)?.text.to_string();
            let file_path = if self.eat(TokenKind::From) { Some(self.expect(TokenKind::String)?.text.to_string()) } else { None };
            NodeKind::Import { module_name, file_path, names: None, is_from_import: false }
        } else {
            self.expect(TokenKind::From)?;
            let module_name = self.expect(TokenKind::Name)?.text.to_string();
            self.expect(TokenKind::Import)?;
            let mut names = Vec::new();
            loop {
                names.push(self.expect(TokenKind::Name)?.text.to_string());
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
            NodeKind::Import { module_name, file_path: None, names: Some(names), is_from_import: true }
        };

        self.end_of_statement()?;
        Ok(anchor(Node::new(kind), pos))
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
    fn import_with_explicit_path() {
        let node = parse_stmt("import math from \"lib/math.kr\"");
        match node.kind {
            NodeKind::Import { module_name, file_path, is_from_import, .. } => {
                assert_eq!(module_name, "math");
                assert_eq!(file_path, Some("lib/math.kr".to_string()));
                assert!(!is_from_import);
            }
            other => panic!("expected Import, got {other:?}"),
        }
    }

    #[test]
    fn import_without_path() {
        let node = parse_stmt("import math");
        match node.kind {
            NodeKind::Import { file_path, .. } => assert!(file_path.is_none()),
            other => panic!("expected Import, got {other:?}"),
        }
    }

    #[test]
    fn from_import_names_several_symbols() {
        let node = parse_stmt("from math import sqrt, pow");
        match node.kind {
            NodeKind::Import { names: Some(names), is_from_import, .. } => {
                assert_eq!(names, vec!["sqrt".to_string(), "pow".to_string()]);
                assert!(is_from_import);
            }
            other => panic!("expected Import, got {other:?}"),
        }
    }
}
