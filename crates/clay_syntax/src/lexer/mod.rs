//! Lexer for C test sources
//!
//! Produces just enough structure to find function definition heads:
//! - Identifiers (keywords included) and single-character punctuation
//! - Opaque literals (numbers, strings, characters)
//! - Line numbers and a column-0 flag on every token
//!
//! Skipped entirely:
//! - Whitespace, `//` and `/* */` comments
//! - Preprocessor lines (`#...`, including backslash continuations)
//!
//! The lexer never fails. Unterminated comments and literals run to the end of the input.

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::ast::Span;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for C source code.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    /// Byte offset of the first character of the current line
    line_start_pos: usize,
    /// Whether a token (or directive) already appeared on the current line
    line_has_token: bool,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            line_start_pos: 0,
            line_has_token: false,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    pub fn tokenize(mut self) -> Vec<Token> {
        while self.peek().is_some() {
            self.scan_token();
        }
        self.tokens
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Length of a `\`-newline continuation at the current position (LF or CRLF), if there is one.
    fn continuation_len(&self) -> Option<usize> {
        let rest = &self.source[self.current_pos..];
        if rest.starts_with("\\\n") {
            Some(2)
        } else if rest.starts_with("\\\r\n") {
            Some(3)
        } else {
            None
        }
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.line_start_pos = self.current_pos;
            self.line_has_token = false;
        }
        Some(c)
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;
        let line = self.line;
        let line_start = start == self.line_start_pos;
        let first_on_line = !self.line_has_token;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            c if c.is_whitespace() => {}

            '/' if self.peek() == Some('/') => self.skip_line_comment(),
            '/' if self.peek() == Some('*') => {
                self.advance();
                self.skip_block_comment();
            }

            '#' if first_on_line => {
                self.skip_directive();
            }

            '"' | '\'' => {
                self.scan_quoted(c);
                self.push(TokenKind::Literal, start, line, line_start);
            }

            '0'..='9' => {
                self.scan_number();
                self.push(TokenKind::Literal, start, line, line_start);
            }

            _ if is_ident_start(c) => {
                while self.peek().is_some_and(is_ident_continue) {
                    self.advance();
                }
                let name = self.source[start..self.current_pos].to_string();
                self.push(TokenKind::Ident(name), start, line, line_start);
            }

            _ => self.push(TokenKind::Punct(c), start, line, line_start),
        }
    }

    fn push(&mut self, kind: TokenKind, start: usize, line: usize, line_start: bool) {
        self.line_has_token = true;
        self.tokens.push(Token {
            kind,
            span: Span::new(start, self.current_pos),
            line,
            line_start,
        });
    }

    // ========================================================================
    // Skipped constructs
    // ========================================================================

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self) {
        while let Some(c) = self.advance() {
            if c == '*' && self.peek() == Some('/') {
                self.advance();
                return;
            }
        }
    }

    /// Skip a preprocessor line, following `\`-newline continuations.
    fn skip_directive(&mut self) {
        self.line_has_token = true;
        while let Some(c) = self.peek() {
            match c {
                '\n' => break,
                '\\' => {
                    let len = self.continuation_len().unwrap_or(1);
                    for _ in 0..len {
                        self.advance();
                    }
                    // Advancing over the newline reset the flag.
                    self.line_has_token = true;
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    fn scan_quoted(&mut self, quote: char) {
        while let Some(c) = self.peek() {
            match c {
                '\n' => return,
                '\\' => {
                    self.advance();
                    self.advance();
                }
                _ => {
                    self.advance();
                    if c == quote {
                        return;
                    }
                }
            }
        }
    }

    fn scan_number(&mut self) {
        while self.peek().is_some_and(|c| is_ident_continue(c) || c == '.') {
            self.advance();
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
