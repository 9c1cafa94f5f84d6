//! Lexer: raw source text to a lossless token stream.
//!
//! The lexer is a total function over any input string. Code spans (as
//! segmented by the [`LiteralClassifier`]) are tokenized with a logos
//! lexer; literal spans become single opaque tokens carrying their raw
//! text. Unterminated literals produce a best-effort token plus a
//! diagnostic, never an abort.

use logos::Logos;

use crate::letblock::classify::{LiteralClassifier, ScannerClassifier, SpanKind};
use crate::letblock::diagnostics::DiagnosticSink;
use crate::letblock::position::SourceIndex;
use crate::letblock::token::{Token, TokenKind};

/// Raw tokenization of code spans. Every character matches exactly one
/// rule, so tokenization of a code span cannot fail.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum RawToken {
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Word,

    // Loose by design: initializers are opaque, so `0x1f` or `1e3` only
    // need to come out as a single token, not be validated.
    #[regex(r"[0-9][0-9A-Za-z_$]*(\.[0-9A-Za-z_$]*)?")]
    Number,

    #[regex(r"[ \t]+")]
    Whitespace,

    #[regex(r"\r\n|\n|\r")]
    Newline,

    // Catch-all: any single character the rules above don't cover.
    #[regex(r"[^ \t\r\nA-Za-z0-9_$]")]
    Punct,
}

/// Tokenize source text with the default [`ScannerClassifier`].
pub fn lex(source: &str, sink: &mut DiagnosticSink) -> Vec<Token> {
    lex_with(&ScannerClassifier, source, sink)
}

/// Tokenize source text with an injected literal classifier.
///
/// Lossless: concatenating the returned tokens' raw text reproduces
/// `source` exactly. Whitespace and newlines are preserved as distinct
/// tokens so the generator can reproduce original formatting. The stream
/// always ends with one [`TokenKind::Eof`] token.
pub fn lex_with(
    classifier: &dyn LiteralClassifier,
    source: &str,
    sink: &mut DiagnosticSink,
) -> Vec<Token> {
    let index = SourceIndex::new(source);
    let mut tokens = Vec::new();

    for span in classifier.classify(source) {
        let text = &source[span.span.clone()];
        match span.kind {
            SpanKind::Code => {
                let mut lexer = RawToken::lexer(text);
                while let Some(result) = lexer.next() {
                    let local = lexer.span();
                    let abs = span.span.start + local.start..span.span.start + local.end;
                    let kind = match result {
                        Ok(RawToken::Word) if lexer.slice() == "let" => TokenKind::Let,
                        Ok(RawToken::Word) => TokenKind::Word,
                        Ok(RawToken::Number) => TokenKind::Number,
                        Ok(RawToken::Whitespace) => TokenKind::Whitespace,
                        Ok(RawToken::Newline) => TokenKind::Newline,
                        Ok(RawToken::Punct) | Err(_) => TokenKind::Punctuator,
                    };
                    let position = index.position_of(abs.start);
                    tokens.push(Token::new(kind, lexer.slice(), abs, position));
                }
            }
            literal => {
                let (kind, what) = match literal {
                    SpanKind::String => (TokenKind::StringLiteral, "string literal"),
                    SpanKind::Template => (TokenKind::TemplateLiteral, "template literal"),
                    SpanKind::Regex => (TokenKind::RegexLiteral, "regular expression literal"),
                    SpanKind::LineComment => (TokenKind::LineComment, "line comment"),
                    SpanKind::BlockComment => (TokenKind::BlockComment, "block comment"),
                    SpanKind::Code => unreachable!(),
                };
                let position = index.position_of(span.span.start);
                if !span.terminated {
                    sink.push(format!("unterminated {}", what), position);
                }
                tokens.push(Token::new(kind, text, span.span.clone(), position));
            }
        }
    }

    let end = source.len();
    let position = index.position_of(end);
    tokens.push(Token::new(TokenKind::Eof, "", end..end, position));
    tokens
}
