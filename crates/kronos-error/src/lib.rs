//! Error types, the first-writer-wins diagnostic sink, and the recursion
//! budget shared by every recursive-descent layer of the Kronos parser.
//!
//! # Error recovery strategy
//!
//! Kronos parsing never recovers locally: every parse helper either returns
//! a node or propagates an error signal, and the only place that resumes
//! after a failure is the top-level driver, which skips to the next
//! `Newline`/`Eof` and continues (see `kronos-parser`). What lives here is
//! the vocabulary those helpers use to signal failure, and the two
//! resource-exhaustion guards (error sink, recursion budget) that keep a
//! pathological input from turning into an unbounded diagnostic stream or a
//! stack overflow.

use std::cell::{Cell, RefCell};
use std::fmt;

use kronos_token::TokenKind;
use thiserror::Error;

/// 1-based source position. Independent of `kronos-ast`'s `SourcePos` so
/// this crate has no dependency on the AST crate — errors can be raised
/// before any node exists to anchor them to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pos {
    /// 1-based line number, or 0 if unknown.
    pub line: u32,
    /// 1-based column number, or 0 if unknown.
    pub column: u32,
}

/// The distinct ways a parse step can fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// The current token's kind didn't match what the grammar required here.
    #[error("Expected token type {expected}, got {found}")]
    UnexpectedToken {
        /// Symbolic name of the expected kind, e.g. `NAME`.
        expected: String,
        /// Symbolic name of the kind actually found, e.g. `TO`.
        found: String,
    },
    /// The cursor ran past the end of the token buffer when a token was
    /// required.
    #[error("Unexpected end of input")]
    UnexpectedEof,
    /// No construct in value position matched the current token.
    #[error("Unexpected token in value position")]
    UnexpectedInValuePosition,
    /// A numeric lexeme parsed to an infinite `f64`.
    #[error("Number overflow")]
    NumberOverflow,
    /// A numeric lexeme failed strict decimal conversion.
    #[error("Invalid number format")]
    InvalidNumberFormat,
    /// An f-string's `{` had no matching `}`.
    #[error("Unmatched {{ in f-string")]
    UnmatchedBraceInFString,
    /// Recursive descent nested past [`MAX_RECURSION_DEPTH`].
    #[error("Maximum recursion depth ({MAX_RECURSION_DEPTH}) exceeded")]
    RecursionLimitExceeded,
    /// A growable buffer could not be reserved.
    #[error("Allocation failure")]
    AllocationFailure,
}

/// A [`ParseErrorKind`] anchored at the position that triggered it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Where it went wrong, when known.
    pub pos: Option<Pos>,
}

impl ParseError {
    /// Build an error with no position information.
    pub fn new(kind: ParseErrorKind) -> Self {
        ParseError { kind, pos: None }
    }

    /// Build an error anchored at `pos`.
    pub fn at(kind: ParseErrorKind, pos: Pos) -> Self {
        ParseError { kind, pos: Some(pos) }
    }

    /// Convenience constructor for the single most common failure: the
    /// current token didn't match what `expect`/`consume` wanted.
    pub fn unexpected_token(expected: TokenKind, found: TokenKind, pos: Option<Pos>) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken {
                expected: expected.to_string(),
                found: found.to_string(),
            },
            pos,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ParseError {}

/// A parse result: either a built value, or a signal to unwind and let the
/// caller destroy whatever it had already accumulated on this path.
pub type ParseResult<T> = Result<T, ParseError>;

/// The structured `{message, line, column}` diagnostic the external
/// interface promises.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseErrorInfo {
    /// Human-readable description, same text as `ParseErrorKind`'s Display.
    pub message: String,
    /// 1-based line, or 0 if unknown.
    pub line: u32,
    /// 1-based column, or 0 if unknown.
    pub column: u32,
}

/// First-writer-wins receptacle for the parse's first error.
///
/// A `Parser` is single-threaded and owned by one call frame for its whole
/// lifetime (see the concurrency model), so an interior-mutable `RefCell` is
/// enough here — there is never contention to design around, only the need
/// to write through a shared `&ErrorSink` from deep inside the recursive
/// descent without threading `&mut` everywhere.
#[derive(Debug, Default)]
pub struct ErrorSink {
    slot: RefCell<Option<ParseErrorInfo>>,
}

impl ErrorSink {
    /// An empty sink.
    pub fn new() -> Self {
        ErrorSink { slot: RefCell::new(None) }
    }

    /// Record `error` if, and only if, nothing has been recorded yet.
    /// Every failure after the first is silently coalesced.
    pub fn record(&self, error: &ParseError) {
        let mut slot = self.slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(ParseErrorInfo {
                message: error.kind.to_string(),
                line: error.pos.map(|p| p.line).unwrap_or(0),
                column: error.pos.map(|p| p.column).unwrap_or(0),
            });
        }
    }

    /// Whether an error has already been recorded.
    pub fn is_set(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// A clone of the recorded error, if any.
    pub fn get(&self) -> Option<ParseErrorInfo> {
        self.slot.borrow().clone()
    }

    /// Take and clear the recorded error, matching the `parse_error_free`
    /// entry point's "hand the caller ownership" shape.
    pub fn take(&self) -> Option<ParseErrorInfo> {
        self.slot.borrow_mut().take()
    }
}

/// Report `error` through whichever channel is active: the sink if the
/// caller attached one, or the `tracing` diagnostic channel otherwise (see
/// the external interface's "Error interface" section).
pub fn report(sink: Option<&ErrorSink>, error: &ParseError) {
    match sink {
        Some(sink) => sink.record(error),
        None => tracing::error!(error = %error, "parse error with no attached sink"),
    }
}

/// The recursion ceiling every recursive-descent layer shares: expression
/// climbing, block parsing, primaries, and every statement form that can
/// nest (`if`, `for`, `while`, `try`, function bodies). A property of the
/// parser, not of any particular host stack size.
pub const MAX_RECURSION_DEPTH: usize = 512;

/// Brackets every recursive descent with a depth check, so pathologically
/// nested input fails with a structured error instead of exhausting the
/// stack.
#[derive(Debug, Default)]
pub struct RecursionGuard {
    depth: Cell<usize>,
}

impl RecursionGuard {
    /// A guard at depth zero.
    pub fn new() -> Self {
        RecursionGuard { depth: Cell::new(0) }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Enter one more level of recursion, failing once depth would exceed
    /// [`MAX_RECURSION_DEPTH`]. Every successful call must be paired with a
    /// later [`RecursionGuard::release_recursion`].
    pub fn guard_recursion(&self) -> ParseResult<()> {
        if self.depth.get() >= MAX_RECURSION_DEPTH {
            tracing::warn!(depth = self.depth.get(), "recursion limit exceeded");
            return Err(ParseError::new(ParseErrorKind::RecursionLimitExceeded));
        }
        self.depth.set(self.depth.get() + 1);
        Ok(())
    }

    /// Leave one level of recursion entered via [`RecursionGuard::guard_recursion`].
    pub fn release_recursion(&self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn first_writer_wins() {
        let sink = ErrorSink::new();
        sink.record(&ParseError::new(ParseErrorKind::UnexpectedEof));
        sink.record(&ParseError::new(ParseErrorKind::NumberOverflow));
        let recorded = sink.get().expect("sink should hold the first error");
        assert_eq!(recorded.message, "Unexpected end of input");
    }

    #[test]
    fn recursion_guard_trips_at_the_limit() {
        let guard = RecursionGuard::new();
        for _ in 0..MAX_RECURSION_DEPTH {
            guard.guard_recursion().expect("should stay under the limit");
        }
        let err = guard.guard_recursion().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::RecursionLimitExceeded);
    }

    #[test]
    fn recursion_guard_releases_back_down() {
        let guard = RecursionGuard::new();
        guard.guard_recursion().expect("enter");
        guard.release_recursion();
        assert_eq!(guard.depth(), 0);
    }

    #[test]
    fn unexpected_token_message_matches_the_documented_form() {
        let err = ParseError::unexpected_token(TokenKind::Name, TokenKind::To, None);
        assert_eq!(err.to_string(), "Expected token type NAME, got TO");
    }
}
