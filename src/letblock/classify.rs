//! Literal classification for raw JavaScript source.
//!
//! The lexer never derives literal boundaries itself: it consumes a span
//! classification produced by a [`LiteralClassifier`]. The trait exists so
//! the lexer can be tested against a stub and so alternate classifiers
//! (e.g. for newer literal forms) can be substituted without touching it.
//!
//! [`ScannerClassifier`] is the default implementation: a single-pass byte
//! scanner that recognizes string, template, regex, and comment literals.
//! All scanning decisions are made on ASCII metacharacters, so spans always
//! cut at valid UTF-8 boundaries.

use std::ops::Range;

/// What a classified span contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Structurally significant source text.
    Code,
    /// `'…'` or `"…"` string literal.
    String,
    /// `` `…` `` template literal, interpolations included.
    Template,
    /// `/…/flags` regex literal.
    Regex,
    /// `//` comment, newline excluded.
    LineComment,
    /// `/* … */` comment.
    BlockComment,
}

/// One classified span. Spans are contiguous and cover the whole input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralSpan {
    pub kind: SpanKind,
    pub span: Range<usize>,
    /// False when the literal ran into a newline or end of input before its
    /// closing delimiter. The lexer reports these as diagnostics.
    pub terminated: bool,
}

impl LiteralSpan {
    fn new(kind: SpanKind, span: Range<usize>, terminated: bool) -> Self {
        Self {
            kind,
            span,
            terminated,
        }
    }
}

/// Capability that segments raw source into code and literal spans.
pub trait LiteralClassifier {
    fn classify(&self, source: &str) -> Vec<LiteralSpan>;
}

/// Default classifier: a hand-written single-pass scanner.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScannerClassifier;

impl LiteralClassifier for ScannerClassifier {
    fn classify(&self, source: &str) -> Vec<LiteralSpan> {
        let bytes = source.as_bytes();
        let mut spans = Vec::new();
        let mut code_start = 0;
        // Last significant code byte and the identifier word it closed, for
        // the regex-vs-division heuristic.
        let mut prev_significant: Option<u8> = None;
        let mut prev_word = String::new();
        let mut i = 0;

        while i < bytes.len() {
            let literal = match bytes[i] {
                b'"' | b'\'' => {
                    let (end, terminated) = scan_string(bytes, i);
                    Some((SpanKind::String, end, terminated))
                }
                b'`' => {
                    let (end, terminated) = scan_template(bytes, i);
                    Some((SpanKind::Template, end, terminated))
                }
                b'/' if bytes.get(i + 1) == Some(&b'/') => {
                    Some((SpanKind::LineComment, scan_line_comment(bytes, i), true))
                }
                b'/' if bytes.get(i + 1) == Some(&b'*') => {
                    let (end, terminated) = scan_block_comment(bytes, i);
                    Some((SpanKind::BlockComment, end, terminated))
                }
                b'/' if regex_allowed(prev_significant, &prev_word) => {
                    let (end, terminated) = scan_regex(bytes, i);
                    Some((SpanKind::Regex, end, terminated))
                }
                b => {
                    if !b.is_ascii_whitespace() {
                        if is_word_byte(b) {
                            if !prev_significant.is_some_and(is_word_byte) {
                                prev_word.clear();
                            }
                            prev_word.push(b as char);
                        } else {
                            prev_word.clear();
                        }
                        prev_significant = Some(b);
                    }
                    i += 1;
                    None
                }
            };

            if let Some((kind, end, terminated)) = literal {
                if code_start < i {
                    spans.push(LiteralSpan::new(SpanKind::Code, code_start..i, true));
                }
                spans.push(LiteralSpan::new(kind, i..end, terminated));
                if !matches!(kind, SpanKind::LineComment | SpanKind::BlockComment) {
                    // A literal just ended an expression; the next `/` is division.
                    prev_significant = Some(b'"');
                    prev_word.clear();
                }
                i = end;
                code_start = end;
            }
        }

        if code_start < bytes.len() {
            spans.push(LiteralSpan::new(SpanKind::Code, code_start..bytes.len(), true));
        }
        spans
    }
}

/// Keywords after which a `/` begins a regex even though they look like a
/// preceding identifier (`return /x/`, `typeof /x/`, ...).
const REGEX_PRECEDING_KEYWORDS: &[&str] = &[
    "return",
    "throw",
    "case",
    "typeof",
    "in",
    "void",
    "delete",
    "do",
    "else",
    "instanceof",
];

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// A `/` starts a regex unless the previous significant byte could end an
/// expression (identifier/number character, closing paren/bracket, or a
/// literal marker). An identifier that is actually a keyword cannot end an
/// expression, so a regex is allowed after it.
fn regex_allowed(prev: Option<u8>, prev_word: &str) -> bool {
    match prev {
        None => true,
        Some(b) if is_word_byte(b) => REGEX_PRECEDING_KEYWORDS.contains(&prev_word),
        Some(b) => !matches!(b, b')' | b']' | b'"'),
    }
}

fn scan_string(bytes: &[u8], start: usize) -> (usize, bool) {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            // An escape also covers line continuations (`\` + newline).
            b'\\' => i += 2,
            b'\n' | b'\r' => return (i, false),
            b if b == quote => return (i + 1, true),
            _ => i += 1,
        }
    }
    (bytes.len(), false)
}

fn scan_line_comment(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 2;
    while i < bytes.len() && bytes[i] != b'\n' && bytes[i] != b'\r' {
        i += 1;
    }
    i
}

fn scan_block_comment(bytes: &[u8], start: usize) -> (usize, bool) {
    let mut i = start + 2;
    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            return (i + 2, true);
        }
        i += 1;
    }
    (bytes.len(), false)
}

fn scan_regex(bytes: &[u8], start: usize) -> (usize, bool) {
    let mut i = start + 1;
    let mut in_class = false;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'[' => {
                in_class = true;
                i += 1;
            }
            b']' if in_class => {
                in_class = false;
                i += 1;
            }
            b'/' if !in_class => {
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
                    i += 1;
                }
                return (i, true);
            }
            b'\n' | b'\r' => return (i, false),
            _ => i += 1,
        }
    }
    (bytes.len(), false)
}

fn scan_template(bytes: &[u8], start: usize) -> (usize, bool) {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'`' => return (i + 1, true),
            b'$' if bytes.get(i + 1) == Some(&b'{') => {
                let (end, terminated) = scan_interpolation(bytes, i + 2);
                if !terminated {
                    return (end, false);
                }
                i = end;
            }
            _ => i += 1,
        }
    }
    (bytes.len(), false)
}

/// Scan a `${ … }` interpolation body. Braces are counted; nested string and
/// template literals are skipped opaquely so a `}` inside them cannot close
/// the interpolation.
fn scan_interpolation(bytes: &[u8], mut i: usize) -> (usize, bool) {
    let mut depth = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                depth += 1;
                i += 1;
            }
            b'}' => {
                depth -= 1;
                i += 1;
                if depth == 0 {
                    return (i, true);
                }
            }
            b'"' | b'\'' => {
                let (end, _) = scan_string(bytes, i);
                i = end.max(i + 1);
            }
            b'`' => {
                let (end, _) = scan_template(bytes, i);
                i = end.max(i + 1);
            }
            _ => i += 1,
        }
    }
    (bytes.len(), false)
}
