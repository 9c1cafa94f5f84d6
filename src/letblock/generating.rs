//! Generator: AST back to JavaScript source text.
//!
//! A depth-first walk in node order. Plain nodes are emitted verbatim from
//! their raw token text, so every non-rewritten region is byte-exact.
//! Let-block nodes are rewritten under one of two strategies selected by
//! [`Config::target_es3`]; their bodies are rendered recursively and
//! edge-trimmed, so rewritten regions are whitespace-normalized while
//! interior formatting survives.

use crate::letblock::ast::{LetBlock, Node, Program};
use crate::letblock::pipeline::Config;
use crate::letblock::token::detokenize;

/// Emit output text for a program. Never fails on a parser-produced tree.
pub fn generate(program: &Program, config: &Config) -> String {
    let mut out = String::new();
    emit_nodes(&program.nodes, config, &mut out);
    out
}

fn emit_nodes(nodes: &[Node], config: &Config, out: &mut String) {
    for node in nodes {
        match node {
            Node::Plain(tokens) => out.push_str(&detokenize(tokens)),
            Node::LetBlock(block) => emit_let_block(block, config, out),
        }
    }
}

fn emit_let_block(block: &LetBlock, config: &Config, out: &mut String) {
    if block.declarations.is_empty() {
        // Malformed header with nothing to rewrite: re-emit the original
        // text rather than dropping it. Nested blocks in the body are
        // still transformed.
        out.push_str(&block.header_text());
        out.push('{');
        emit_nodes(&block.body, config, out);
        out.push('}');
        return;
    }

    let mut body = String::new();
    emit_nodes(&block.body, config, &mut body);
    let body = body.trim();

    if config.target_es3 {
        emit_emulation(block, body, config.annotate, out);
    } else {
        emit_native(block, body, out);
    }
}

/// Native mode: one block, one `let` statement, declarations in order.
fn emit_native(block: &LetBlock, body: &str, out: &mut String) {
    out.push_str("{ let ");
    let decls: Vec<String> = block
        .declarations
        .iter()
        .map(|decl| decl.source_text())
        .collect();
    out.push_str(&decls.join(", "));
    out.push(';');
    out.push_str(body);
    out.push('}');
}

/// Exception-emulation mode: one `try{throw init}catch(name){` layer per
/// declaration, first declaration outermost, body innermost, closing
/// braces in matching reverse order with no intervening text.
fn emit_emulation(block: &LetBlock, body: &str, annotate: bool, out: &mut String) {
    for decl in &block.declarations {
        let init = decl.initializer_text();
        // The emulation needs a thrown value to bind the catch parameter.
        let thrown = init.as_deref().unwrap_or("undefined");
        out.push_str("try{throw ");
        out.push_str(thrown);
        out.push('}');
        if annotate {
            out.push_str("/*let*/");
        }
        out.push_str("catch(");
        out.push_str(&decl.name.text);
        if annotate {
            if let Some(init) = &init {
                // An initializer containing `*/` would close the comment early.
                if !init.contains("*/") {
                    out.push_str("/*=");
                    out.push_str(init);
                    out.push_str("*/");
                }
            }
        }
        out.push_str("){");
    }
    out.push_str(body);
    for _ in &block.declarations {
        out.push('}');
    }
}
