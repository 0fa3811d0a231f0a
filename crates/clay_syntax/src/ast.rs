//! Declaration records produced by the parser.

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Shape of a definition's parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Params {
    /// `()`
    Empty,
    /// `(void)`
    Void,
    /// Anything else, as written (trimmed).
    Other(String),
}

impl Params {
    /// `true` for `()` and `(void)`.
    pub fn is_nullary(&self) -> bool {
        matches!(self, Params::Empty | Params::Void)
    }
}

/// A line-anchored function definition head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    /// Header text exactly as written, from the first return-type token through the closing `)`.
    pub header: String,
    /// Return-type tokens in order (`["static", "int", "*"]`); empty for a bare `name(...)` head.
    pub return_type: Vec<String>,
    /// Function name.
    pub name: String,
    pub params: Params,
    /// 1-based line of the first header token.
    pub line: usize,
    pub span: Span,
}

impl FunctionDecl {
    /// `true` when the return type is exactly `void` (a single token).
    pub fn returns_void(&self) -> bool {
        matches!(self.return_type.as_slice(), [ty] if ty == "void")
    }
}
