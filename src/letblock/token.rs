//! Token types shared by the lexer, parser, and generator.
//!
//! Tokenization is lossless: every token carries the raw source text it was
//! cut from, and concatenating the stream in order reproduces the input
//! byte-for-byte. That invariant is what lets plain regions pass through the
//! compiler unchanged.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::letblock::position::Position;

/// Classification of a token. Closed set; the parser and generator match
/// on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Identifier or keyword other than `let`.
    Word,
    /// The `let` keyword, distinguished so the parser can spot construct
    /// candidates without string comparisons.
    Let,
    /// Numeric literal. Kept separate from `Word` so a number can never be
    /// accepted as a declaration name.
    Number,
    /// A single punctuation character.
    Punctuator,
    /// A run of spaces/tabs, never containing a newline.
    Whitespace,
    /// A single line terminator (`\n`, `\r\n`, or `\r`).
    Newline,
    /// A `'…'` or `"…"` string literal, opaque.
    StringLiteral,
    /// A `` `…` `` template literal including its interpolations, opaque.
    TemplateLiteral,
    /// A `/…/flags` regex literal, opaque.
    RegexLiteral,
    /// A `//` comment, newline excluded.
    LineComment,
    /// A `/* … */` comment.
    BlockComment,
    /// End of input; carries empty text.
    Eof,
}

impl TokenKind {
    /// Literal kinds are opaque to structural analysis: braces and parens
    /// inside them never affect depth counting.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral
                | TokenKind::TemplateLiteral
                | TokenKind::RegexLiteral
                | TokenKind::LineComment
                | TokenKind::BlockComment
        )
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Newline)
    }
}

/// The smallest lexical unit: a kind, the raw text it was cut from, and
/// where in the source it starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Byte range in the original source.
    pub span: Range<usize>,
    /// Line:column of the span start.
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Range<usize>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            position,
        }
    }

    /// True for a punctuator token with exactly this text.
    pub fn is_punct(&self, ch: char) -> bool {
        self.kind == TokenKind::Punctuator && self.text.chars().eq(std::iter::once(ch))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Reassemble a token slice into source text.
///
/// The inverse of lexing: because tokens carry raw text, this is a plain
/// concatenation, and `detokenize(&lex(src, …)) == src` for any input.
pub fn detokenize(tokens: &[Token]) -> String {
    let mut result = String::new();
    for token in tokens {
        result.push_str(&token.text);
    }
    result
}
