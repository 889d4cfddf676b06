//! Recursive-descent parser for the Kronos scripting language.
//!
//! Consumes the flat [`kronos_token::Token`] stream the (out-of-scope)
//! tokenizer produces and builds a [`kronos_ast::Ast`]. The tokenizer is
//! never linked by this crate — see [`kronos_token::TokenSource`] — so
//! everything here can be exercised against hand-written or
//! fixture-generated token streams without a real lexer in the loop.
//!
//! # Error handling
//!
//! Parsing never aborts on the first malformed statement: [`Parser::parse_program`]
//! reports the failure to whatever [`kronos_error::ErrorSink`] was attached
//! (or to `tracing` if none was), skips to the next line, and keeps going, so
//! one bad statement doesn't cost the whole file's worth of otherwise-valid
//! AST. The resulting [`kronos_ast::Ast`] holds only the statements that
//! parsed cleanly.
//!
//! # Logging
//!
//! This crate reports recursion-limit trips and sink-less errors through
//! `tracing`; it does not initialize a subscriber itself — that's a decision
//! for whatever binary links it (see `kronos-cli`'s design notes for the
//! `tracing-subscriber` setup this assumes).

#![warn(missing_docs)]

mod block;
mod expr;
mod state;
mod stmt;

pub use state::Parser;

use kronos_ast::Ast;
use kronos_error::{ErrorSink, ParseErrorInfo};
use kronos_token::{Token, TokenKind, TokenSource};

/// Parse a full token stream into an [`Ast`].
///
/// `tokenizer` is only ever invoked for f-string expression segments — the
/// top-level token stream is `tokens` itself. `sink`, when given, receives
/// the first parse error encountered; later errors on other statements are
/// still recovered from but not separately surfaced (see the module docs).
pub fn parse(tokens: Vec<Token>, tokenizer: &dyn TokenSource, sink: Option<&ErrorSink>) -> Ast {
    let mut parser = Parser::new(tokens, tokenizer, sink);
    parser.parse_program()
}

/// Release an [`Ast`]. A literal counterpart to `parse` for callers that
/// want a paired entry point rather than relying on `Drop`.
pub fn ast_free(ast: Ast) {
    ast.free();
}

/// Release a [`ParseErrorInfo`] taken from an [`ErrorSink`]. Exists for the
/// same reason as [`ast_free`]; `ParseErrorInfo` owns nothing that needs
/// more than `Drop` either, but the entry point is part of the documented
/// external interface.
pub fn parse_error_free(error: ParseErrorInfo) {
    drop(error);
}

/// One line per top-level statement tag, for eyeballing a parse result.
pub fn debug_print(ast: &Ast) -> String {
    ast.debug_print()
}

impl<'a> Parser<'a> {
    /// The top-level driver (component C7): parse every top-level
    /// statement, recovering at the next line after any statement that
    /// fails to parse, until the token stream is exhausted.
    pub fn parse_program(&mut self) -> Ast {
        let mut ast = Ast::new();
        loop {
            self.skip_blank_lines();
            match self.peek_kind(0) {
                None | Some(TokenKind::Eof) => break,
                Some(TokenKind::Indent) => {
                    let level = self.peek(0).and_then(|t| t.indent).unwrap_or(0);
                    self.cursor += 1;
                    match self.parse_statement(level) {
                        Ok(node) => {
                            if self.push_stmt(&mut ast.statements, node).is_err() {
                                break;
                            }
                        }
                        Err(_) => self.recover_to_next_line(),
                    }
                }
                Some(_) => self.recover_to_next_line(),
            }
        }
        ast
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use kronos_ast::NodeKind;
    use kronos_error::ErrorSink;
    use kronos_tdd_support::{tokenize, FixtureTokenizer};

    fn parse_source(src: &str) -> Ast {
        let tokenizer = FixtureTokenizer;
        parse(tokenize(src), &tokenizer, None)
    }

    #[test]
    fn a_small_program_parses_into_several_statements() {
        let ast = parse_source("set x to 1\nprint x\nif x is greater than 0:\n    print \"positive\"");
        assert_eq!(ast.statements.len(), 3);
        assert_eq!(ast.statements[0].tag(), "Assign");
        assert_eq!(ast.statements[1].tag(), "Print");
        assert_eq!(ast.statements[2].tag(), "If");
    }

    #[test]
    fn a_well_formed_program_reports_no_errors() {
        let sink = ErrorSink::new();
        let tokenizer = FixtureTokenizer;
        let ast = parse(tokenize("set x to 10\nprint x"), &tokenizer, Some(&sink));
        assert_eq!(ast.statements.len(), 2);
        assert!(!sink.is_set());
    }

    #[test]
    fn missing_name_after_set_is_reported_and_recovered() {
        let sink = ErrorSink::new();
        let tokenizer = FixtureTokenizer;
        // `set to 10` omits the bound name entirely; `to` lands where NAME
        // is expected.
        let ast = parse(tokenize("set to 10\nprint 1"), &tokenizer, Some(&sink));
        let recorded = sink.get().expect("the first statement's failure should be recorded");
        assert_eq!(recorded.message, "Expected token type NAME, got TO");
        // Recovery resynchronised at the next line, so the second statement
        // still parses.
        assert_eq!(ast.statements.len(), 1);
        assert_eq!(ast.statements[0].tag(), "Print");
    }

    #[test]
    fn recursion_past_the_limit_is_reported_as_a_typed_error() {
        let sink = ErrorSink::new();
        let tokenizer = FixtureTokenizer;
        let nested = "not ".repeat(kronos_error::MAX_RECURSION_DEPTH + 1) + "true";
        let ast = parse(tokenize(&format!("print {nested}")), &tokenizer, Some(&sink));
        assert!(ast.statements.is_empty());
        let recorded = sink.get().expect("recursion limit should be recorded");
        assert!(recorded.message.contains("Maximum recursion depth"));
    }

    #[test]
    fn debug_print_renders_one_tag_per_line() {
        let ast = parse_source("print 1\nbreak");
        assert_eq!(debug_print(&ast), "Print\nBreak");
    }

    #[test]
    fn ast_free_and_parse_error_free_are_callable_entry_points() {
        let ast = parse_source("print 1");
        ast_free(ast);
        let sink = ErrorSink::new();
        sink.record(&kronos_error::ParseError::new(kronos_error::ParseErrorKind::UnexpectedEof));
        let info = sink.take().expect("recorded error");
        parse_error_free(info);
    }

    #[test]
    fn unary_and_binary_share_the_bin_op_tag_but_not_the_shape() {
        let ast = parse_source("set x to minus 1");
        match &ast.statements[0].kind {
            NodeKind::Assign { value, .. } => {
                assert!(matches!(value.kind, NodeKind::Unary { .. }));
            }
            other => panic!("expected Assign, got {other:?}"),
        }
    }
}
