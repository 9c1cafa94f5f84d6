//! Parser: token sequence to AST.
//!
//! A single left-to-right pass with an explicit integer depth counter for
//! brackets. Depth is adjusted only by punctuator tokens; literal tokens
//! are opaque, so a brace inside a string or comment never influences
//! structure.
//!
//! Recovery policy: malformed constructs degrade to pass-through text with
//! a diagnostic, and end of input closes whatever is still open. The
//! parser never fails, because one malformed construct must not corrupt
//! unrelated code elsewhere in the file.

use crate::letblock::ast::{Declaration, LetBlock, Node, Program};
use crate::letblock::diagnostics::DiagnosticSink;
use crate::letblock::token::{Token, TokenKind};

/// Parse a token sequence into a [`Program`].
///
/// The sequence is normally the output of [`lex`](crate::letblock::lexing::lex);
/// a trailing [`TokenKind::Eof`] token is treated as end of input.
pub fn parse(tokens: &[Token], sink: &mut DiagnosticSink) -> Program {
    let mut cursor = Cursor { tokens, pos: 0 };
    let nodes = parse_nodes(&mut cursor, sink, false);
    Program { nodes }
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len() || self.tokens[self.pos].kind == TokenKind::Eof
    }

    fn peek(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> &'a Token {
        let token = &self.tokens[self.pos];
        self.pos += 1;
        token
    }

    fn skip_whitespace(&mut self) {
        while !self.at_end() && self.peek().kind.is_whitespace() {
            self.pos += 1;
        }
    }

    /// Does the next non-whitespace token after the current one open a paren?
    fn followed_by_open_paren(&self) -> bool {
        self.tokens[self.pos + 1..]
            .iter()
            .find(|t| !t.kind.is_whitespace())
            .is_some_and(|t| t.is_punct('('))
    }
}

/// Parse a node sequence. With `inside_body` set, stop (without consuming)
/// at the `}` that closes the body, balancing any plain braces opened
/// in between.
fn parse_nodes(cursor: &mut Cursor, sink: &mut DiagnosticSink, inside_body: bool) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut run: Vec<Token> = Vec::new();
    let mut brace_depth: i64 = 0;

    while !cursor.at_end() {
        let token = cursor.peek();

        if inside_body && brace_depth == 0 && token.is_punct('}') {
            break;
        }

        if token.kind == TokenKind::Let
            && cursor.followed_by_open_paren()
            && !run_ends_with_dot(&run)
        {
            match parse_let_block(cursor, sink) {
                Ok(block) => {
                    if !run.is_empty() {
                        nodes.push(Node::Plain(std::mem::take(&mut run)));
                    }
                    nodes.push(Node::LetBlock(block));
                }
                Err(consumed) => {
                    // Degraded to pass-through; its braces still count.
                    for token in &consumed {
                        brace_depth += brace_delta(token);
                    }
                    run.extend(consumed);
                }
            }
            continue;
        }

        brace_depth += brace_delta(token);
        run.push(cursor.advance().clone());
    }

    if !run.is_empty() {
        nodes.push(Node::Plain(run));
    }
    nodes
}

fn brace_delta(token: &Token) -> i64 {
    if token.is_punct('{') {
        1
    } else if token.is_punct('}') {
        -1
    } else {
        0
    }
}

/// `let` as a property name (`obj.let(x)`) is a method call, not a
/// let-block.
fn run_ends_with_dot(run: &[Token]) -> bool {
    run.iter()
        .rev()
        .find(|t| !t.kind.is_whitespace())
        .is_some_and(|t| t.is_punct('.'))
}

/// Parse one `let ( declList ) { body }` occurrence. The cursor sits on the
/// `let` token, already known to be followed by `(`.
///
/// On a malformed header the construct degrades: the tokens consumed so far
/// are returned in `Err` for the caller to append to its plain run.
fn parse_let_block(cursor: &mut Cursor, sink: &mut DiagnosticSink) -> Result<LetBlock, Vec<Token>> {
    let start = cursor.pos;
    let position = cursor.peek().position;

    cursor.advance(); // `let`
    cursor.skip_whitespace();
    cursor.advance(); // `(`

    let mut declarations = Vec::new();
    let mut decl_tokens: Vec<Token> = Vec::new();
    let mut depth: i64 = 0;
    let mut closed = false;

    while !cursor.at_end() {
        let token = cursor.peek();
        if token.kind == TokenKind::Punctuator && depth == 0 {
            if token.is_punct(')') {
                cursor.advance();
                closed = true;
                break;
            }
            if token.is_punct(',') {
                let comma = cursor.advance();
                match build_declaration(std::mem::take(&mut decl_tokens), sink) {
                    Ok(Some(decl)) => declarations.push(decl),
                    Ok(None) => {
                        sink.push("empty declaration in let-block header", comma.position)
                    }
                    Err(()) => return Err(cursor.tokens[start..cursor.pos].to_vec()),
                }
                continue;
            }
        }
        if token.kind == TokenKind::Punctuator {
            match token.text.as_str() {
                "(" | "[" | "{" => depth += 1,
                ")" | "]" | "}" => depth = (depth - 1).max(0),
                _ => {}
            }
        }
        decl_tokens.push(cursor.advance().clone());
    }

    match build_declaration(decl_tokens, sink) {
        Ok(Some(decl)) => declarations.push(decl),
        Ok(None) => {
            if closed && declarations.is_empty() {
                sink.push("let-block header has no declarations", position);
            }
            // Otherwise a tolerated trailing comma.
        }
        Err(()) => return Err(cursor.tokens[start..cursor.pos].to_vec()),
    }

    if !closed {
        // End of input inside the header: close the node here. With no
        // declarations at all there is nothing to rewrite, so the text
        // passes through instead.
        sink.push("unterminated let-block header", position);
        if declarations.is_empty() {
            return Err(cursor.tokens[start..cursor.pos].to_vec());
        }
        return Ok(LetBlock {
            declarations,
            body: Vec::new(),
            header_tokens: cursor.tokens[start..cursor.pos].to_vec(),
            position,
        });
    }

    let header_end = cursor.pos;
    cursor.skip_whitespace();
    if cursor.at_end() || !cursor.peek().is_punct('{') {
        sink.push("expected '{' after let(...) header", position);
        return Err(cursor.tokens[start..cursor.pos].to_vec());
    }
    cursor.advance(); // `{`

    let body = parse_nodes(cursor, sink, true);
    if cursor.at_end() {
        sink.push("unterminated let-block body", position);
    } else {
        cursor.advance(); // `}`
    }

    Ok(LetBlock {
        declarations,
        body,
        header_tokens: cursor.tokens[start..header_end].to_vec(),
        position,
    })
}

/// Build one declaration from its token run.
///
/// `Ok(None)` means the run was empty (a stray or trailing comma).
/// `Err(())` means the run cannot be a declaration and the whole construct
/// should degrade to pass-through.
fn build_declaration(
    tokens: Vec<Token>,
    sink: &mut DiagnosticSink,
) -> Result<Option<Declaration>, ()> {
    let first = tokens.iter().position(|t| !t.kind.is_whitespace());
    let Some(first) = first else {
        return Ok(None);
    };
    let last = tokens.iter().rposition(|t| !t.kind.is_whitespace());
    let trimmed: Vec<Token> = tokens[first..=last.unwrap_or(first)].to_vec();

    let name = trimmed[0].clone();
    if name.kind != TokenKind::Word {
        sink.push(
            format!("expected identifier in let-block declaration, found `{}`", name.text),
            name.position,
        );
        return Err(());
    }

    // First non-whitespace token after the name, if any.
    let next = trimmed[1..]
        .iter()
        .position(|t| !t.kind.is_whitespace())
        .map(|offset| offset + 1);
    match next {
        None => Ok(Some(Declaration {
            name,
            initializer: Vec::new(),
            tokens: trimmed,
        })),
        Some(eq) if trimmed[eq].is_punct('=') => {
            let initializer: Vec<Token> = trimmed[eq + 1..]
                .iter()
                .skip_while(|t| t.kind.is_whitespace())
                .cloned()
                .collect();
            if initializer.is_empty() {
                sink.push(
                    "missing initializer expression after `=`",
                    trimmed[eq].position,
                );
            }
            Ok(Some(Declaration {
                name,
                initializer,
                tokens: trimmed,
            }))
        }
        Some(unexpected) => {
            sink.push(
                format!(
                    "malformed let-block declaration: unexpected `{}` after `{}`",
                    trimmed[unexpected].text, name.text
                ),
                trimmed[unexpected].position,
            );
            Err(())
        }
    }
}
