//! Parser for line-anchored function definition heads
//!
//! Recognizes `<return type tokens> <name> ( <params> ) {` where the first token starts at column 0. A head
//! spanning several lines is reported once per line it starts at column 0 with a return type left before the name.
//! Everything else in the token stream (bodies, prototypes, globals, indented code) is ignored.
//!
//! ## Examples
//!
//! ```rust
//! use clay_syntax::ast::Params;
//! use clay_syntax::parser;
//!
//! let source = "static int helper(int x) { return x; }\nvoid run()\n{\n}\n";
//! let decls = parser::scan_declarations(source);
//! assert_eq!(decls.len(), 2);
//! assert_eq!(decls[0].params, Params::Other("int x".to_string()));
//! assert!(decls[1].returns_void());
//! ```

use crate::ast::{FunctionDecl, Params, Span};
use crate::lexer::{self, Token, TokenKind};

/// Control-flow keywords that look like `name(...) {` but never name a function.
const CONTROL_KEYWORDS: &[&str] = &["if", "for", "while", "switch", "return", "sizeof", "do", "else"];

struct Parser<'a> {
    source: &'a str,
    tokens: &'a [Token],
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Self { source, tokens }
    }

    fn parse(&self) -> Vec<FunctionDecl> {
        let mut decls = Vec::new();
        let mut i = 0;
        while i < self.tokens.len() {
            let tok = &self.tokens[i];
            // Every column-0 identifier is tried, including ones inside a longer head's return type
            // (`ATTR\nvoid f(void) {` yields a head at each line).
            if tok.line_start && tok.ident().is_some() {
                if let Some(decl) = self.declaration_at(i) {
                    decls.push(decl);
                }
            }
            i += 1;
        }
        decls
    }

    /// Try to read a definition head starting at token `start`.
    ///
    /// A head needs at least one return-type token before its name.
    fn declaration_at(&self, start: usize) -> Option<FunctionDecl> {
        // Return type and name: identifiers and `*` up to the opening parenthesis.
        let mut i = start;
        while let Some(tok) = self.tokens.get(i) {
            if tok.ident().is_some() || tok.is_punct('*') {
                i += 1;
            } else {
                break;
            }
        }

        let lparen = i;
        if lparen < start + 2 || !self.tokens.get(lparen)?.is_punct('(') {
            return None;
        }

        let name = self.tokens[lparen - 1].ident()?;
        if CONTROL_KEYWORDS.contains(&name) {
            return None;
        }

        let rparen = self.matching_paren(lparen)?;
        if !self.tokens.get(rparen + 1)?.is_punct('{') {
            return None;
        }

        let return_type = self.tokens[start..lparen - 1]
            .iter()
            .map(|t| self.text(t.span).to_string())
            .collect();

        let span = Span::new(self.tokens[start].span.start, self.tokens[rparen].span.end);

        let decl = FunctionDecl {
            header: self.text(span).to_string(),
            return_type,
            name: name.to_string(),
            params: self.params(lparen, rparen),
            line: self.tokens[start].line,
            span,
        };
        Some(decl)
    }

    fn matching_paren(&self, lparen: usize) -> Option<usize> {
        let mut depth = 0usize;
        for (offset, tok) in self.tokens[lparen..].iter().enumerate() {
            match tok.kind {
                TokenKind::Punct('(') => depth += 1,
                TokenKind::Punct(')') => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(lparen + offset);
                    }
                }
                _ => {}
            }
        }
        None
    }

    fn params(&self, lparen: usize, rparen: usize) -> Params {
        let inner = &self.tokens[lparen + 1..rparen];
        match inner {
            [] => Params::Empty,
            [only] if only.ident() == Some("void") => Params::Void,
            [first, .., last] => Params::Other(self.text(Span::new(first.span.start, last.span.end)).to_string()),
            [only] => Params::Other(self.text(only.span).to_string()),
        }
    }

    fn text(&self, span: Span) -> &'a str {
        &self.source[span.start..span.end]
    }
}

/// Tokenize `source` and return every line-anchored function definition head, in source order.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn scan_declarations(source: &str) -> Vec<FunctionDecl> {
    let tokens = lexer::lex(source);
    let decls = Parser::new(source, &tokens).parse();
    tracing::trace!(count = decls.len(), "scanned declarations");
    decls
}

include!("parser/tests.rs");
