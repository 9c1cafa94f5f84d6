//! AST for the let-block construct.
//!
//! The tree has exactly two node kinds: plain token runs that pass through
//! to the output verbatim, and let-block nodes carrying a declaration list
//! plus a recursively parsed body. The root [`Program`] owns the whole tree
//! exclusively.

use serde::{Deserialize, Serialize};

use crate::letblock::position::Position;
use crate::letblock::token::{detokenize, Token};

/// One entry in a let-block header: a name and an optional initializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// The identifier token naming the binding.
    pub name: Token,
    /// Initializer expression as an opaque token run, edge-trimmed. Empty
    /// when the declaration has no `=` part.
    pub initializer: Vec<Token>,
    /// The full declaration token run (name through initializer end, edge
    /// whitespace trimmed), kept so the generator can reproduce the
    /// original spacing.
    pub tokens: Vec<Token>,
}

impl Declaration {
    /// The declaration as it appeared in the source, e.g. `x = "foo"`.
    pub fn source_text(&self) -> String {
        detokenize(&self.tokens)
    }

    /// The initializer expression text, or `None` for a bare name.
    pub fn initializer_text(&self) -> Option<String> {
        if self.initializer.is_empty() {
            None
        } else {
            Some(detokenize(&self.initializer))
        }
    }
}

/// One `let ( declList ) { body }` occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetBlock {
    /// Declarations in source order. Order is load-bearing: it decides
    /// nesting (and therefore shadowing) under exception emulation.
    pub declarations: Vec<Declaration>,
    /// Body nodes between the braces, nested let-blocks included.
    pub body: Vec<Node>,
    /// Raw header tokens, `let` through the closing `)`. Used to degrade a
    /// declaration-less block back to pass-through text and to position
    /// diagnostics.
    pub header_tokens: Vec<Token>,
    /// Position of the `let` keyword.
    pub position: Position,
}

impl LetBlock {
    /// The header as it appeared in the source, e.g. `let (x = 1)`.
    pub fn header_text(&self) -> String {
        detokenize(&self.header_tokens)
    }
}

/// An AST node: a pass-through token run or a let-block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Plain(Vec<Token>),
    LetBlock(LetBlock),
}

/// Root of the tree: the ordered top-level node sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    pub nodes: Vec<Node>,
}

impl Program {
    /// Total number of let-block nodes in the tree, nested ones included.
    pub fn let_block_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes
                .iter()
                .map(|node| match node {
                    Node::Plain(_) => 0,
                    Node::LetBlock(block) => 1 + count(&block.body),
                })
                .sum()
        }
        count(&self.nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letblock::token::TokenKind;

    fn tok(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text, 0..text.len(), Position::default())
    }

    #[test]
    fn test_declaration_text_helpers() {
        let decl = Declaration {
            name: tok(TokenKind::Word, "x"),
            initializer: vec![tok(TokenKind::StringLiteral, "\"foo\"")],
            tokens: vec![
                tok(TokenKind::Word, "x"),
                tok(TokenKind::Whitespace, " "),
                tok(TokenKind::Punctuator, "="),
                tok(TokenKind::Whitespace, " "),
                tok(TokenKind::StringLiteral, "\"foo\""),
            ],
        };
        assert_eq!(decl.source_text(), "x = \"foo\"");
        assert_eq!(decl.initializer_text().as_deref(), Some("\"foo\""));
    }

    #[test]
    fn test_bare_declaration_has_no_initializer() {
        let decl = Declaration {
            name: tok(TokenKind::Word, "x"),
            initializer: vec![],
            tokens: vec![tok(TokenKind::Word, "x")],
        };
        assert_eq!(decl.initializer_text(), None);
    }

    #[test]
    fn test_let_block_count_recurses() {
        let inner = LetBlock {
            declarations: vec![],
            body: vec![],
            header_tokens: vec![],
            position: Position::default(),
        };
        let outer = LetBlock {
            declarations: vec![],
            body: vec![Node::LetBlock(inner)],
            header_tokens: vec![],
            position: Position::default(),
        };
        let program = Program {
            nodes: vec![Node::Plain(vec![]), Node::LetBlock(outer)],
        };
        assert_eq!(program.let_block_count(), 2);
    }
}
