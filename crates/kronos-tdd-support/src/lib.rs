//! A minimal, test-only tokenizer for Kronos source fixtures.
//!
//! The real Kronos tokenizer is an external collaborator and deliberately
//! out of scope for this workspace — the parser only ever sees a
//! [`kronos_token::Token`] stream. That leaves parser tests with nothing to
//! drive them from source text, so this crate plays the same role
//! `perl-tdd-support` plays for the Perl parser: a small, parser-independent
//! helper that exists purely so tests can write `"print 42"` instead of
//! hand-building a `Vec<Token>`.
//!
//! This is intentionally the simplest tokenizer that can produce a faithful
//! fixture: one `Indent` token at the start of every non-blank line (indent
//! level = the count of leading spaces), the line's words and punctuation,
//! and a trailing `Newline`. It knows nothing about escape sequences beyond
//! what f-strings need and is not meant to be a reference implementation of
//! the production tokenizer's behaviour — only a stand-in good enough to
//! exercise the parser's grammar.

use std::sync::Arc;

use kronos_token::{Token, TokenKind, TokenSource};

/// Tokenize a full Kronos source fragment (possibly multi-line, possibly
/// indented) into the flat token stream the parser expects.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut out = Vec::new();
    for (line_idx, line) in source.split('\n').enumerate() {
        let line_no = (line_idx + 1) as u32;
        let indent = line.chars().take_while(|c| *c == ' ').count() as u32;
        let rest = &line[indent as usize..];
        if rest.trim().is_empty() {
            out.push(Token::new(TokenKind::Newline, "\n", line_no, (indent + 1) as u32));
            continue;
        }
        out.push(
            Token::new(TokenKind::Indent, "", line_no, 1).with_indent(indent),
        );
        scan_line(rest, line_no, indent + 1, &mut out);
        out.push(Token::new(TokenKind::Newline, "\n", line_no, (rest.len() as u32) + indent + 1));
    }
    out.push(Token::new(TokenKind::Eof, "", (source.split('\n').count()) as u32, 1));
    out
}

fn keyword(word: &str) -> Option<TokenKind> {
    Some(match word {
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "null" => TokenKind::Null,
        "undefined" => TokenKind::Undefined,
        "set" => TokenKind::Set,
        "let" => TokenKind::Let,
        "to" => TokenKind::To,
        "as" => TokenKind::As,
        "print" => TokenKind::Print,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "for" => TokenKind::For,
        "in" => TokenKind::In,
        "range" => TokenKind::Range,
        "by" => TokenKind::By,
        "while" => TokenKind::While,
        "break" => TokenKind::Break,
        "continue" => TokenKind::Continue,
        "function" => TokenKind::Function,
        "with" => TokenKind::With,
        "call" => TokenKind::Call,
        "return" => TokenKind::Return,
        "import" => TokenKind::Import,
        "from" => TokenKind::From,
        "delete" => TokenKind::Delete,
        "try" => TokenKind::Try,
        "catch" => TokenKind::Catch,
        "finally" => TokenKind::Finally,
        "raise" => TokenKind::Raise,
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        "not" => TokenKind::Not,
        "mod" => TokenKind::Mod,
        "plus" => TokenKind::Plus,
        "minus" => TokenKind::Minus,
        "times" => TokenKind::Times,
        "divided" => TokenKind::Divided,
        "is" => TokenKind::Is,
        "equal" => TokenKind::Equal,
        "greater" => TokenKind::Greater,
        "less" => TokenKind::Less,
        "than" => TokenKind::Than,
        "at" => TokenKind::At,
        "end" => TokenKind::End,
        "list" => TokenKind::List,
        "map" => TokenKind::Map,
        _ => return None,
    })
}

fn scan_line(rest: &str, line_no: u32, col_base: u32, out: &mut Vec<Token>) {
    let chars: Vec<char> = rest.chars().collect();
    let mut i = 0usize;
    while i < chars.len() {
        let c = chars[i];
        let col = col_base + i as u32;
        if c == ' ' {
            i += 1;
            continue;
        }
        if c == '[' {
            out.push(Token::new(TokenKind::LeftBracket, "[", line_no, col));
            i += 1;
        } else if c == ']' {
            out.push(Token::new(TokenKind::RightBracket, "]", line_no, col));
            i += 1;
        } else if c == ',' {
            out.push(Token::new(TokenKind::Comma, ",", line_no, col));
            i += 1;
        } else if c == ':' {
            out.push(Token::new(TokenKind::Colon, ":", line_no, col));
            i += 1;
        } else if c == '"' {
            let (text, consumed) = scan_quoted(&chars[i + 1..]);
            out.push(Token::new(TokenKind::String, text, line_no, col));
            i += consumed + 1;
        } else if c == 'f' && chars.get(i + 1) == Some(&'"') {
            let (text, consumed) = scan_quoted(&chars[i + 2..]);
            out.push(Token::new(TokenKind::FString, text, line_no, col));
            i += consumed + 3;
        } else if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let text: String = chars[start..i].iter().collect();
            out.push(Token::new(TokenKind::Number, text, line_no, col));
        } else if c.is_alphabetic() || c == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            match keyword(&word) {
                Some(kind) => out.push(Token::new(kind, word, line_no, col)),
                None => out.push(Token::new(TokenKind::Name, word, line_no, col)),
            }
        } else {
            // Anything else (the tokenizer's problem in production) is
            // surfaced as a single-character Unknown token.
            out.push(Token::new(TokenKind::Unknown, c.to_string(), line_no, col));
            i += 1;
        }
    }
}

/// Scan a `"`-terminated run, respecting backslash escapes the same way
/// f-string interiors must. Returns the unescaped interior text and the
/// number of source characters consumed up to (but not including) the
/// closing quote.
fn scan_quoted(rest: &[char]) -> (String, usize) {
    let mut text = String::new();
    let mut i = 0;
    while i < rest.len() {
        match rest[i] {
            '\\' if i + 1 < rest.len() => {
                text.push(rest[i + 1]);
                i += 2;
            }
            '"' => {
                i += 1;
                break;
            }
            c => {
                text.push(c);
                i += 1;
            }
        }
    }
    (text, i)
}

/// A [`TokenSource`] implementation backed by [`tokenize`], for tests that
/// exercise f-string re-tokenization through the parser's injected
/// dependency rather than by calling `tokenize` directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTokenizer;

impl TokenSource for FixtureTokenizer {
    fn tokenize(&self, source: &str) -> Vec<Token> {
        tokenize(source)
    }
}

/// Shorthand for building an `Arc<str>` token text in hand-written fixtures
/// that don't go through [`tokenize`] at all.
pub fn arc(s: &str) -> Arc<str> {
    Arc::from(s)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn tokenizes_a_simple_print_statement() {
        let toks = tokenize("print 42");
        let kinds: Vec<TokenKind> = toks.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Indent, TokenKind::Print, TokenKind::Number, TokenKind::Newline, TokenKind::Eof]
        );
    }

    #[test]
    fn indent_levels_follow_leading_spaces() {
        let toks = tokenize("for i in range 1 to 2:\n    print i");
        let indents: Vec<u32> = toks.iter().filter(|t| t.kind == TokenKind::Indent).map(|t| t.indent.unwrap()).collect();
        assert_eq!(indents, vec![0, 4]);
    }

    #[test]
    fn fstring_and_string_strip_quotes() {
        let toks = tokenize(r#"print f"Hello {name}""#);
        let fstr = toks.iter().find(|t| t.kind == TokenKind::FString).expect("fstring token");
        assert_eq!(&*fstr.text, "Hello {name}");
    }
}
