//! The expression layer (precedence climbing, primaries, postfix indexing
//! and slicing, f-string re-entry). Every submodule adds `impl<'a>
//! Parser<'a>` methods to the one type defined in [`crate::state`]; this
//! file only wires the submodules together and holds the couple of helpers
//! they all share.

mod fstring;
mod literals;
mod postfix;
mod precedence;
mod primary;
mod unary;

use kronos_ast::{Node, SourcePos};
use kronos_token::Token;

/// Lift a token's position into a [`SourcePos`], when both halves are known.
pub(crate) fn token_pos(tok: &Token) -> Option<SourcePos> {
    Some(SourcePos { line: tok.line?, column: tok.column? })
}

/// Anchor `node` at `pos`, if given; otherwise leave it unanchored.
pub(crate) fn anchor(mut node: Node, pos: Option<SourcePos>) -> Node {
    node.pos = pos;
    node
}

/// Convert an AST [`SourcePos`] into the error crate's independent `Pos`,
/// defaulting to `(0, 0)` when no position is known. The two position types
/// are kept separate so `kronos-error` has no dependency on `kronos-ast` (see
/// that crate's docs); this is the one seam where a value crosses between
/// them.
pub(crate) fn err_pos(pos: Option<SourcePos>) -> kronos_error::Pos {
    match pos {
        Some(p) => kronos_error::Pos { line: p.line, column: p.column },
        None => kronos_error::Pos::default(),
    }
}
