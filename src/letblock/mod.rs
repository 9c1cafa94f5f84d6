//! Main module for the let-block compiler.

pub mod ast;
pub mod classify;
pub mod diagnostics;
pub mod generating;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod position;
pub mod token;

pub use ast::{Declaration, LetBlock, Node, Program};
pub use classify::{LiteralClassifier, LiteralSpan, ScannerClassifier, SpanKind};
pub use diagnostics::{Diagnostic, DiagnosticSink};
pub use generating::generate;
pub use lexing::{lex, lex_with};
pub use parsing::parse;
pub use pipeline::{compile, compile_into, CompileOutput, Config};
pub use position::Position;
pub use token::{detokenize, Token, TokenKind};
