//! Parser state and the token-stream utilities every other module builds on.
//!
//! Everything here is the literal shape of the external interface's "the
//! parser maintains: a pointer/handle to the token buffer, a cursor index, a
//! current recursion depth, and an optional structured-error sink." The rest
//! of this crate only ever touches a `Parser` through [`Parser::peek`],
//! [`Parser::consume`], [`Parser::consume_any`], and the recursion guard pair
//! — no module reaches into `tokens`/`cursor` directly.

use kronos_error::{ErrorSink, ParseError, ParseErrorKind, ParseResult, Pos, RecursionGuard};
use kronos_token::{Token, TokenKind, TokenSource};

/// A single recursive-descent parse over one token buffer.
///
/// Borrows its [`ErrorSink`] and [`TokenSource`] rather than owning them: a
/// `Parser` is a one-shot, single-threaded call frame (see the concurrency
/// model), so there is never a reason for it to outlive the `parse` call that
/// creates it.
pub struct Parser<'a> {
    pub(crate) tokens: Vec<Token>,
    pub(crate) cursor: usize,
    pub(crate) recursion: RecursionGuard,
    pub(crate) sink: Option<&'a ErrorSink>,
    pub(crate) tokenizer: &'a dyn TokenSource,
}

impl<'a> Parser<'a> {
    /// Build a parser over `tokens`, reporting through `sink` (or `tracing`
    /// if absent) and using `tokenizer` to re-tokenize f-string expression
    /// segments.
    pub fn new(tokens: Vec<Token>, tokenizer: &'a dyn TokenSource, sink: Option<&'a ErrorSink>) -> Self {
        Parser { tokens, cursor: 0, recursion: RecursionGuard::new(), sink, tokenizer }
    }

    /// The token at `cursor + offset`, or `None` past either end of the
    /// buffer. A negative offset that would underflow the cursor returns
    /// `None` rather than wrapping.
    pub fn peek(&self, offset: isize) -> Option<&Token> {
        let idx = if offset >= 0 {
            self.cursor.checked_add(offset as usize)?
        } else {
            self.cursor.checked_sub(offset.unsigned_abs())?
        };
        self.tokens.get(idx)
    }

    /// The kind of the token at `cursor + offset`, if any.
    pub fn peek_kind(&self, offset: isize) -> Option<TokenKind> {
        self.peek(offset).map(|t| t.kind)
    }

    /// The current token's source position, if known.
    pub(crate) fn position(&self) -> Option<Pos> {
        self.peek(0).and_then(|t| Some(Pos { line: t.line?, column: t.column? }))
    }

    /// If the current token has kind `expected`, advance past it and return
    /// a clone. Otherwise report `Expected X, got Y` to the error channel and
    /// return `None`, leaving the cursor where it was so the caller can
    /// decide how to recover.
    pub fn consume(&mut self, expected: TokenKind) -> Option<Token> {
        match self.peek(0) {
            Some(tok) if tok.kind == expected => {
                let tok = tok.clone();
                self.cursor += 1;
                Some(tok)
            }
            Some(tok) => {
                let found = tok.kind;
                let err = ParseError::unexpected_token(expected, found, self.position());
                self.report(&err);
                None
            }
            None => {
                let err = ParseError::new(ParseErrorKind::UnexpectedEof);
                self.report(&err);
                None
            }
        }
    }

    /// The same contract as [`Parser::consume`] but returning a
    /// [`ParseResult`] instead of swallowing the error into the sink alone,
    /// for call sites that need to unwind rather than keep going with a
    /// placeholder.
    pub fn expect(&mut self, expected: TokenKind) -> ParseResult<Token> {
        match self.peek(0) {
            Some(tok) if tok.kind == expected => {
                let tok = tok.clone();
                self.cursor += 1;
                Ok(tok)
            }
            Some(tok) => {
                let err = ParseError::unexpected_token(expected, tok.kind, self.position());
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

    /// Advance past whatever token is current and return it, or `None` at
    /// `Eof`/an empty buffer.
    pub fn consume_any(&mut self) -> Option<Token> {
        match self.peek(0) {
            Some(tok) if tok.kind != TokenKind::Eof => {
                let tok = tok.clone();
                self.cursor += 1;
                Some(tok)
            }
            _ => None,
        }
    }

    /// `true` if the current token has kind `kind`, without consuming it.
    pub fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind(0) == Some(kind)
    }

    /// `true` if the current token is one of `kinds`.
    pub fn at_any(&self, kinds: &[TokenKind]) -> bool {
        self.peek_kind(0).is_some_and(|k| kinds.contains(&k))
    }

    /// Consume the current token if it matches `kind`, reporting nothing
    /// either way. Used where a construct is genuinely optional (e.g. a
    /// trailing `as <typename>`).
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Like [`Parser::expect`], but satisfied by any of `kinds`. Reports the
    /// first alternative as "expected" when none match, which is enough to
    /// pin down the offending token without inventing a combined symbolic
    /// name for the whole set.
    pub fn expect_one_of(&mut self, kinds: &[TokenKind]) -> ParseResult<Token> {
        match self.peek(0) {
            Some(tok) if kinds.contains(&tok.kind) => {
                let tok = tok.clone();
                self.cursor += 1;
                Ok(tok)
            }
            Some(tok) => {
                let err = ParseError::unexpected_token(kinds[0], tok.kind, self.position());
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

    /// Skip any run of `Newline` tokens sitting at the cursor. Blank lines
    /// between statements carry no meaning beyond separating them.
    pub fn skip_blank_lines(&mut self) {
        while self.at(TokenKind::Newline) {
            self.cursor += 1;
        }
    }

    /// Enter one level of recursive descent, failing with a reported
    /// `RecursionLimitExceeded` once the shared budget is exhausted.
    pub(crate) fn guard_recursion(&mut self) -> ParseResult<()> {
        self.recursion.guard_recursion().map_err(|e| {
            self.report(&e);
            e
        })
    }

    /// Leave one level of recursive descent entered via
    /// [`Parser::guard_recursion`].
    pub(crate) fn release_recursion(&mut self) {
        self.recursion.release_recursion();
    }

    /// Report `error` through this parser's sink (or `tracing` if none was
    /// attached), without otherwise altering parser state.
    pub(crate) fn report(&self, error: &ParseError) {
        kronos_error::report(self.sink, error);
    }

    /// Skip tokens up to and including the next `Newline`, or up to (but not
    /// past) `Eof`. The only recovery strategy this parser uses: after a
    /// statement fails, resynchronise at the next logical line so later,
    /// independent statements still get a chance to parse.
    pub(crate) fn recover_to_next_line(&mut self) {
        loop {
            match self.peek_kind(0) {
                None | Some(TokenKind::Eof) => return,
                Some(TokenKind::Newline) => {
                    self.cursor += 1;
                    return;
                }
                _ => {
                    self.cursor += 1;
                }
            }
        }
    }
}
