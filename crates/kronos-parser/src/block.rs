//! The indentation-driven block parser.
//!
//! Kronos has no brace or `end`-keyword delimiters: a block is simply the
//! run of statements whose line carries a greater indentation level than the
//! construct that introduces them. The tokenizer has already done the
//! measuring (every non-blank line starts with an `Indent` token carrying
//! its level); this module just walks lines at a single, fixed level and
//! lets each statement's own parser recurse into `parse_block` again for
//! anything nested one level deeper.

use kronos_ast::Node;
use kronos_error::{ParseError, ParseErrorKind, ParseResult};
use kronos_token::TokenKind;

use crate::state::Parser;

impl<'a> Parser<'a> {
    /// Parse every statement indented strictly deeper than `parent_indent`,
    /// stopping at the first line back at or above that level (or at EOF).
    /// A header with nothing indented under it produces an empty block
    /// rather than an error — `if cond:` with no body is a parse-level
    /// non-issue here even though it may be meaningless downstream.
    pub(crate) fn parse_block(&mut self, parent_indent: u32) -> ParseResult<Vec<Node>> {
        self.guard_recursion()?;
        let result = self.parse_block_inner(parent_indent);
        self.release_recursion();
        result
    }

    fn parse_block_inner(&mut self, parent_indent: u32) -> ParseResult<Vec<Node>> {
        let mut stmts = Vec::new();
        self.skip_blank_lines();

        let Some(child_indent) = self.peek(0).and_then(Self::indent_level) else {
            return Ok(stmts);
        };
        if child_indent <= parent_indent {
            return Ok(stmts);
        }

        loop {
            self.skip_blank_lines();
            let Some(level) = self.peek(0).and_then(Self::indent_level) else { break };
            if level != child_indent {
                // A shallower line ends this block; a deeper one means some
                // nested construct failed to consume its own body, which the
                // top-level driver's recovery will deal with.
                break;
            }
            self.cursor += 1; // the Indent token itself
            let stmt = self.parse_statement(level)?;
            self.push_stmt(&mut stmts, stmt)?;
        }
        Ok(stmts)
    }

    fn indent_level(tok: &kronos_token::Token) -> Option<u32> {
        if tok.kind == TokenKind::Indent {
            tok.indent
        } else {
            None
        }
    }

    pub(crate) fn push_stmt(&mut self, buf: &mut Vec<Node>, node: Node) -> ParseResult<()> {
        kronos_ast::push_growing(buf, node).map_err(|_| {
            let err = ParseError::new(ParseErrorKind::AllocationFailure);
            self.report(&err);
            err
        })
    }
}
