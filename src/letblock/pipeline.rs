//! Pipeline orchestration: configuration and the `compile` entry points.
//!
//! `compile` is the common case: lex, parse, generate, with a fresh
//! diagnostic sink per call. `compile_into` threads a caller-owned sink
//! through instead, for batch use where diagnostics from several units
//! accumulate in one place. The three stages stay independently callable
//! for consumers that want to inspect tokens or the AST.

use serde::{Deserialize, Serialize};

use crate::letblock::diagnostics::{Diagnostic, DiagnosticSink};
use crate::letblock::generating::generate;
use crate::letblock::lexing::lex;
use crate::letblock::parsing::parse;

/// Generation options. Lexing and parsing are configuration-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Emit the nested try/catch emulation instead of a native
    /// block-scoped declaration.
    pub target_es3: bool,
    /// Include provenance comments in emulation output. Only meaningful
    /// when `target_es3` is set.
    pub annotate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_es3: false,
            annotate: true,
        }
    }
}

/// Result of a [`compile`] call: the output text plus every diagnostic the
/// pipeline recorded. Diagnostics never prevent output.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileOutput {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Compile one unit of source text with a fresh diagnostic sink.
pub fn compile(source: &str, config: &Config) -> CompileOutput {
    let mut sink = DiagnosticSink::new();
    let text = compile_into(source, config, &mut sink);
    CompileOutput {
        text,
        diagnostics: sink.into_entries(),
    }
}

/// Compile one unit of source text, appending diagnostics to a
/// caller-owned sink.
pub fn compile_into(source: &str, config: &Config, sink: &mut DiagnosticSink) -> String {
    let tokens = lex(source, sink);
    let program = parse(&tokens, sink);
    generate(&program, config)
}
