#![forbid(unsafe_code)]
//! Clay unit-test driver generator
//!
//! Clay scans a directory of C test files, finds every function following the
//! `void test_<group>__<name>(void)` convention, and writes a self-contained
//! test driver (`clay_main.c`) plus its header (`clay.h`) that a C compiler
//! turns into a runnable test executable.
//!
//! ## Pipeline
//!
//! - [`discovery`] walks the scan root and matches declarations per file
//! - [`registry`] assembles suites and the flat callback table
//! - [`runtime`] provides the C support library (on disk or bundled)
//! - [`render`] fills the driver template
//! - [`output`] writes the result
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Generated code**: The renderer emits C source as *strings*; nothing in it is evaluated by this crate.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod generator;
pub mod output;
pub mod registry;
pub mod render;
pub mod runtime;
pub mod version;

pub use config::GeneratorConfig;
pub use errors::{GenerateError, Result};
pub use generator::{Generation, generate};
pub use registry::GenerationResult;
