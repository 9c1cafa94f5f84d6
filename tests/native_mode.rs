//! Native-mode generation tests
//!
//! Native mode rewrites each let-block into exactly one block containing
//! one `let` statement, declarations in source order, and the construct is
//! fully consumed: re-compiling the output is a no-op.

use letc::letblock::{compile, lex, parse, Config, DiagnosticSink};
use rstest::rstest;

fn native() -> Config {
    Config {
        target_es3: false,
        annotate: true,
    }
}

#[rstest]
#[case::single("let (x = \"foo\") { body }", "{ let x = \"foo\";body}")]
#[case::multi(
    "let (x=\"foo\", y=\"bar\"){ console.log(x,y) }",
    "{ let x=\"foo\", y=\"bar\";console.log(x,y)}"
)]
#[case::bare_name("let (x) { f(x) }", "{ let x;f(x)}")]
#[case::call_initializer("let (x = f(a, b)) { g(x) }", "{ let x = f(a, b);g(x)}")]
#[case::surrounded("a();let (x=1) { b() }c();", "a();{ let x=1;b()}c();")]
fn test_native_rewrite(#[case] source: &str, #[case] expected: &str) {
    let output = compile(source, &native());
    assert_eq!(output.text, expected);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_nested_blocks_produce_nested_native_blocks() {
    let output = compile("let (x=\"foo\"){ let (y=\"bar\"){ body } }", &native());
    assert_eq!(output.text, "{ let x=\"foo\";{ let y=\"bar\";body}}");
}

#[test]
fn test_output_contains_no_let_block_nodes() {
    let output = compile("let (x = \"foo\") { body }", &native());
    let mut sink = DiagnosticSink::new();
    let tokens = lex(&output.text, &mut sink);
    let reparsed = parse(&tokens, &mut sink);
    assert_eq!(reparsed.let_block_count(), 0);
    assert!(sink.is_empty());
}

#[test]
fn test_native_output_is_idempotent() {
    let first = compile("x();\nlet (a=1, b) { f(a, b) }\ny();\n", &native());
    let second = compile(&first.text, &native());
    assert_eq!(second.text, first.text);
    assert!(second.diagnostics.is_empty());

    // Emulation mode finds nothing to rewrite in native output either.
    let emulated = compile(
        &first.text,
        &Config {
            target_es3: true,
            annotate: true,
        },
    );
    assert_eq!(emulated.text, first.text);
}

#[test]
fn test_declaration_order_is_preserved() {
    let output = compile("let (a=1, b=2, c=3) { use(a, b, c) }", &native());
    assert_eq!(output.text, "{ let a=1, b=2, c=3;use(a, b, c)}");
}
