//! Token types for the C lexer.

use crate::ast::Span;

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword (C keywords are not distinguished here).
    Ident(String),
    /// Any single punctuation character.
    Punct(char),
    /// Number, string or character literal. The text is available through the span.
    Literal,
}

/// A token with its kind, source span and line information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// 1-based line of the token's first character.
    pub line: usize,
    /// The token starts at column 0.
    pub line_start: bool,
}

impl Token {
    pub fn ident(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }
}
