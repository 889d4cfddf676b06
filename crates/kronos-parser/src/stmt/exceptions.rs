//! `try`/`catch`/`finally` and `raise`.

use kronos_ast::{CatchClause, Node, NodeKind};
use kronos_error::ParseResult;
use kronos_token::TokenKind;

use crate::expr::{anchor, token_pos};
use crate::state::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_try(&mut self, indent: u32) -> ParseResult<Node> {
        let pos = self.peek(0).and_then(token_pos);
        self.expect(TokenKind::Try)?;
        self.expect(TokenKind::Colon)?;
        self.end_of_statement()?;
        let try_block = self.parse_block(indent)?;

        let mut catches = Vec::new();
        while self.at_sibling_line(indent, TokenKind::Catch) {
            self.cursor += 2; // the sibling's Indent token, then `catch`
            catches.push(self.parse_catch_clause(indent)?);
        }

        let finally_block = if self.at_sibling_line(indent, TokenKind::Finally) {
            self.cursor += 2;
            self.expect(TokenKind::Colon)?;
            self.end_of_statement()?;
            Some(self.parse_block(indent)?)
        } else {
            None
        };

        Ok(anchor(Node::new(NodeKind::Try { try_block, catches, finally_block }), pos).with_indent(indent))
    }

    /// One `catch` clause, having already consumed the `catch` keyword.
    ///
    /// The grammar offers three shapes: `catch TypeError as e:`, `catch as
    /// e:`, and bare `catch e:`. The first two are unambiguous; the third is
    /// genuinely indistinguishable at parse time from a hypothetical
    /// var-less `catch TypeError:` (both are one bareword followed by a
    /// colon), so this parser always reads a lone bareword as the bind-any
    /// variable, matching the documented bare-`catch e:` behaviour. A
    /// variable-less type-only catch, if ever needed, would require a
    /// distinct surface form to be parseable.
    fn parse_catch_clause(&mut self, indent: u32) -> ParseResult<CatchClause> {
        let mut error_type = None;
        let mut catch_var = None;

        if self.eat(TokenKind::As) {
            catch_var = Some(self.expect(TokenKind::Name)?.text.to_string());
        } else if self.at(TokenKind::Name) {
            let name = self.expect(TokenKind::Name)?.text.to_string();
            if self.eat(TokenKind::As) {
                error_type = Some(name);
                catch_var = Some(self.expect(TokenKind::Name)?.text.to_string());
            } else {
                catch_var = Some(name);
            }
        }

        self.expect(TokenKind::Colon)?;
        self.end_of_statement()?;
        let catch_block = self.parse_block(indent)?;
        Ok(CatchClause { error_type, catch_var, catch_block })
    }

    /// `raise [error_type] message`. An `error_type` is present only when a
    /// bareword is immediately followed by a string or f-string literal; a
    /// bare `raise "message"` has no type name to disambiguate against.
    pub(crate) fn parse_raise(&mut self) -> ParseResult<Node> {
        let pos = self.peek(0).and_then(token_pos);
        self.expect(TokenKind::Raise)?;

        let error_type = if self.at(TokenKind::Name)
            && (self.peek_kind(1) == Some(TokenKind::String) || self.peek_kind(1) == Some(TokenKind::FString))
        {
            Some(self.expect(TokenKind::Name)?.text.to_string())
        } else {
            None
        };
        let message = self.parse_expression()?;

        self.end_of_statement()?;
        Ok(anchor(Node::new(NodeKind::Raise { error_type, message: Box::new(message) }), pos))
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
    fn try_with_one_catch_and_finally() {
        let node = parse_stmt(
            "try:\n    call risky\ncatch ValueError as e:\n    print e\nfinally:\n    print 1",
        );
        match node.kind {
            NodeKind::Try { try_block, catches, finally_block, .. } => {
                assert_eq!(try_block.len(), 1);
                assert_eq!(catches.len(), 1);
                assert_eq!(catches[0].error_type, Some("ValueError".to_string()));
                assert_eq!(catches[0].catch_var, Some("e".to_string()));
                assert!(finally_block.is_some());
            }
            other => panic!("expected Try, got {other:?}"),
        }
    }

    #[test]
    fn two_catch_clauses_with_a_trailing_catch_all_and_finally() {
        let node = parse_stmt(
            "try:\n    call risky\ncatch ValueError as e:\n    print e\ncatch:\n    print 1\nfinally:\n    print 2",
        );
        match node.kind {
            NodeKind::Try { catches, finally_block, .. } => {
                assert_eq!(catches.len(), 2);
                assert_eq!(catches[0].error_type, Some("ValueError".to_string()));
                assert!(catches[1].error_type.is_none());
                assert!(catches[1].catch_var.is_none());
                assert!(finally_block.is_some());
            }
            other => panic!("expected Try, got {other:?}"),
        }
    }

    #[test]
    fn bare_catch_binds_any_error() {
        let node = parse_stmt("try:\n    call risky\ncatch e:\n    print e");
        match node.kind {
            NodeKind::Try { catches, .. } => {
                assert!(catches[0].error_type.is_none());
                assert_eq!(catches[0].catch_var, Some("e".to_string()));
            }
            other => panic!("expected Try, got {other:?}"),
        }
    }

    #[test]
    fn try_with_no_catch_or_finally() {
        let node = parse_stmt("try:\n    call risky");
        match node.kind {
            NodeKind::Try { catches, finally_block, .. } => {
                assert!(catches.is_empty());
                assert!(finally_block.is_none());
            }
            other => panic!("expected Try, got {other:?}"),
        }
    }

    #[test]
    fn raise_with_type_and_message() {
        let node = parse_stmt("raise ValueError \"bad input\"");
        match node.kind {
            NodeKind::Raise { error_type, .. } => assert_eq!(error_type, Some("ValueError".to_string())),
            other => panic!("expected Raise, got {other:?}"),
        }
    }

    #[test]
    fn raise_with_type_and_fstring_message() {
        let node = parse_stmt("raise ValueError f\"bad {x}\"");
        match node.kind {
            NodeKind::Raise { error_type, message } => {
                assert_eq!(error_type, Some("ValueError".to_string()));
                assert!(matches!(message.kind, NodeKind::FString { .. }));
            }
            other => panic!("expected Raise, got {other:?}"),
        }
    }

    #[test]
    fn raise_without_type() {
        let node = parse_stmt("raise \"bad input\"");
        match node.kind {
            NodeKind::Raise { error_type, message } => {
                assert!(error_type.is_none());
                assert_eq!(message.kind, NodeKind::String("bad input".to_string()));
            }
            other => panic!("expected Raise, got {other:?}"),
        }
    }
}
