//! Statement parsing: one `impl<'a> Parser<'a>` method per statement form,
//! dispatched from [`Parser::parse_statement`] by the statement's leading
//! keyword.

mod assignment;
mod control_flow;
mod exceptions;
mod function;
mod imports;
mod misc;

use kronos_ast::Node;
use kronos_error::{ParseError, ParseErrorKind, ParseResult};
use kronos_token::TokenKind;

use crate::state::Parser;

impl<'a> Parser<'a> {
    /// Dispatch on the current token (the `Indent` token for this line has
    /// already been consumed by the caller) to the matching statement
    /// parser.
    pub(crate) fn parse_statement(&mut self, indent: u32) -> ParseResult<Node> {
        match self.peek_kind(0) {
            Some(TokenKind::Set) | Some(TokenKind::Let) => self.parse_assignment(),
            Some(TokenKind::Print) => self.parse_print(),
            Some(TokenKind::If) => self.parse_if(indent),
            Some(TokenKind::For) => self.parse_for(indent),
            Some(TokenKind::While) => self.parse_while(indent),
            Some(TokenKind::Function) => self.parse_function(indent),
            Some(TokenKind::Call) => self.parse_call_stmt(),
            Some(TokenKind::Return) => self.parse_return(),
            Some(TokenKind::Import) | Some(TokenKind::From) => self.parse_import(),
            Some(TokenKind::Delete) => self.parse_delete(),
            Some(TokenKind::Break) => self.parse_break(),
            Some(TokenKind::Continue) => self.parse_continue(),
            Some(TokenKind::Try) => self.parse_try(indent),
            Some(TokenKind::Raise) => self.parse_raise(),
            Some(found) => {
                let err = ParseError::unexpected_token(TokenKind::Set, found, self.position_for_error());
                self.report(&err);
                Err(err)
            }
            None => {
                let err = ParseError::new(ParseErrorKind::UnexpectedEof);
                self.report(&err);
                Err(err)
            }
        }
    }

    /// Consume this statement's trailing `Newline`, or accept `Eof` as an
    /// implicit terminator for the last line of a file with no final
    /// newline. Anything else is unconsumed trailing input on this line.
    pub(crate) fn end_of_statement(&mut self) -> ParseResult<()> {
        match self.peek_kind(0) {
            Some(TokenKind::Newline) => {
                self.cursor += 1;
                Ok(())
            }
            Some(TokenKind::Eof) | None => Ok(()),
            Some(found) => {
                let err = ParseError::unexpected_token(TokenKind::Newline, found, self.position_for_error());
                self.report(&err);
                Err(err)
            }
        }
    }

    fn position_for_error(&self) -> Option<kronos_error::Pos> {
        self.peek(0).and_then(|t| Some(kronos_error::Pos { line: t.line?, column: t.column? }))
    }
}
