//! Pass-through fidelity tests
//!
//! Source text containing no let-block construct must come out of the
//! compiler byte-for-byte unchanged, under any configuration, including
//! text whose literals contain construct-shaped characters.

use letc::letblock::{compile, detokenize, lex, Config, DiagnosticSink};
use proptest::prelude::*;

fn all_configs() -> Vec<Config> {
    vec![
        Config {
            target_es3: false,
            annotate: true,
        },
        Config {
            target_es3: true,
            annotate: true,
        },
        Config {
            target_es3: true,
            annotate: false,
        },
    ]
}

#[test]
fn test_plain_javascript_is_unchanged() {
    let source = "function f(a, b) {\n  return a + b; // sum\n}\nf(1, 2);\n";
    for config in all_configs() {
        let output = compile(source, &config);
        assert_eq!(output.text, source);
        assert!(output.diagnostics.is_empty());
    }
}

#[test]
fn test_classic_let_declaration_is_never_rewritten() {
    let source = "let i = 0;\nfor (let j = 0; j < i; j++) { g(j); }\n";
    for config in all_configs() {
        assert_eq!(compile(source, &config).text, source);
    }
}

#[test]
fn test_construct_inside_string_literal_is_opaque() {
    let source = "var s = \"let (fake) {\";";
    for config in all_configs() {
        let output = compile(source, &config);
        assert_eq!(output.text, source);
        assert!(output.diagnostics.is_empty());
    }
}

#[test]
fn test_construct_inside_comment_and_regex_is_opaque() {
    let source = "// let (x) { ignored }\nvar re = /let \\(x\\) \\{/;\n/* let (y) {} */\n";
    for config in all_configs() {
        assert_eq!(compile(source, &config).text, source);
    }
}

#[test]
fn test_regex_after_keyword_stays_opaque_inside_body() {
    // A regex after `return` contains a brace; it must not close the body
    // early or unbalance the rewritten output.
    let source = "let (x=1) { return /}/ ; }";
    let config = Config {
        target_es3: false,
        annotate: true,
    };
    let output = compile(source, &config);
    assert_eq!(output.text, "{ let x=1;return /}/ ;}");
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_braces_in_literals_do_not_unbalance_bodies() {
    let source = "let (x = \"}\") { f(\"{\") }";
    let config = Config {
        target_es3: false,
        annotate: true,
    };
    assert_eq!(compile(source, &config).text, "{ let x = \"}\";f(\"{\")}");
}

proptest! {
    /// Lexing is lossless for arbitrary input.
    #[test]
    fn prop_lex_detokenizes_to_input(source in any::<String>()) {
        let mut sink = DiagnosticSink::new();
        let tokens = lex(&source, &mut sink);
        prop_assert_eq!(detokenize(&tokens), source);
    }

    /// Compilation never panics, whatever the input.
    #[test]
    fn prop_compile_total(source in any::<String>()) {
        for config in all_configs() {
            let _ = compile(&source, &config);
        }
    }

    /// Without the construct (no `l`, so no `let`), compilation is the
    /// identity even when literals are unbalanced.
    #[test]
    fn prop_compile_identity_without_construct(
        source in "[a-km-z0-9 \t\n;(){}\\[\\]=+*,./'\"-]{0,120}"
    ) {
        for config in all_configs() {
            let output = compile(&source, &config);
            prop_assert_eq!(output.text.as_str(), source.as_str());
        }
    }
}
