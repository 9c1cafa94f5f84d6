//! Command-line interface for letc
//! Compiles JavaScript let-blocks into standard code, one unit per
//! `--compile` occurrence, outputs written to stdout in invocation order.
//!
//! Usage:
//!   letc --compile=<file> [--compile=<file> ...]   - Compile files
//!   letc --compile                                 - Compile standard input
//!   letc --es6 --compile=<file>                    - Native mode instead of emulation

use std::fs;
use std::io;

use clap::{Arg, ArgAction, Command};
use letc::letblock::{compile_into, lex, Config, DiagnosticSink};

fn main() {
    let matches = Command::new("letc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A source-to-source compiler for the JavaScript let-block construct")
        .arg_required_else_help(true)
        .arg(
            Arg::new("compile")
                .long("compile")
                .value_name("FILE")
                .num_args(0..=1)
                .default_missing_value("-")
                .action(ArgAction::Append)
                .help("Compile a file, or standard input when no file is given (repeatable)"),
        )
        .arg(
            Arg::new("es6")
                .long("es6")
                .action(ArgAction::SetTrue)
                .help("Emit native block-scoped declarations instead of the try/catch emulation"),
        )
        .arg(
            Arg::new("no-annotate")
                .long("no-annotate")
                .action(ArgAction::SetTrue)
                .help("Omit provenance comments from emulation output"),
        )
        .arg(
            Arg::new("ignore-warnings")
                .long("ignore-warnings")
                .action(ArgAction::SetTrue)
                .help("Exit zero even when warnings were recorded"),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .action(ArgAction::SetTrue)
                .help("Print each unit's token stream as JSON instead of compiled output"),
        )
        .get_matches();

    let config = Config {
        target_es3: !matches.get_flag("es6"),
        annotate: !matches.get_flag("no-annotate"),
    };
    let units: Vec<String> = matches
        .get_many::<String>("compile")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    // One sink across all units; accumulated warnings decide the exit code.
    let mut sink = DiagnosticSink::new();

    for unit in &units {
        let source = read_unit(unit).unwrap_or_else(|err| {
            eprintln!("letc: cannot read {}: {}", unit_name(unit), err);
            std::process::exit(1);
        });
        if matches.get_flag("tokens") {
            let tokens = lex(&source, &mut sink);
            let json = serde_json::to_string_pretty(&tokens).unwrap_or_else(|err| {
                eprintln!("letc: cannot serialize tokens: {}", err);
                std::process::exit(1);
            });
            println!("{}", json);
        } else {
            print!("{}", compile_into(&source, &config, &mut sink));
        }
    }

    for diagnostic in sink.entries() {
        eprintln!("{}", diagnostic);
    }
    if !sink.is_empty() && !matches.get_flag("ignore-warnings") {
        std::process::exit(1);
    }
}

fn read_unit(unit: &str) -> io::Result<String> {
    if unit == "-" {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(unit)
    }
}

fn unit_name(unit: &str) -> &str {
    if unit == "-" {
        "standard input"
    } else {
        unit
    }
}
