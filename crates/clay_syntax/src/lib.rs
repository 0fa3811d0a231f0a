//! Structural recognizer for C function definitions.
//!
//! The generator never builds a pattern per file. Instead each source file is tokenized once and every
//! *line-anchored* function definition head (`<return type> <name>(<params>) {` starting at column 0) is
//! reported as a [`ast::FunctionDecl`]. Deciding which of those are tests is left to the caller.
//!
//! ## Notes
//! - This crate is "syntax-only": it knows nothing about test groups or naming conventions.
//! - Comments, string/character literals and preprocessor lines are skipped, so a definition that is commented
//!   out or lives inside a macro is never reported.
//!
//! ## Examples
//! ```rust
//! use clay_syntax::parser;
//!
//! let decls = parser::scan_declarations("void test_math__add(void)\n{\n}\n");
//! assert_eq!(decls.len(), 1);
//! assert_eq!(decls[0].name, "test_math__add");
//! assert_eq!(decls[0].header, "void test_math__add(void)");
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;
