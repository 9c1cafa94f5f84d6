//! # letc
//!
//! A narrow-syntax source-to-source compiler for JavaScript: it recognizes
//! the non-standard `let ( declList ) { body }` construct embedded in
//! otherwise arbitrary source text and rewrites it into one of two
//! semantically-equivalent forms, leaving everything else byte-for-byte
//! unchanged.
//!
//! Native mode emits a block-scoped declaration:
//!
//! ```text
//! let (x = "foo") { body }   =>   { let x = "foo";body}
//! ```
//!
//! Exception-emulation mode fakes block scoping with nested try/catch for
//! engines without `let`:
//!
//! ```text
//! let (x = "foo") { body }   =>   try{throw "foo"}/*let*/catch(x/*="foo"*/){body}
//! ```
//!
//! The pipeline is lex -> parse -> generate; each stage is independently
//! callable, and [`letblock::pipeline::compile`] chains all three.
//! Malformed constructs degrade to pass-through text with a warning in the
//! diagnostic sink; the pipeline itself never fails.

pub mod letblock;
