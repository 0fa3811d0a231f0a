//! Error types for driver generation.
//!
//! Every failure is fatal for the scan root being processed: discovery is deterministic over static input, so
//! there is nothing to retry. Nothing is written unless generation succeeded.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error raised while discovering, rendering, or writing a test driver.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error("No tests found under \"{}\"", .root.display())]
    #[diagnostic(
        code(clay::no_tests_found),
        help("tests are `void test_<group>__<name>(void)` definitions starting a line in a `*.c` file, where <group> is the file path with `/` replaced by `_`")
    )]
    NoTestsFound { root: PathBuf },

    #[error("scan root \"{}\" is not a directory", .root.display())]
    #[diagnostic(code(clay::scan_root_missing))]
    ScanRootMissing { root: PathBuf },

    #[error("support library file \"{}\" is unavailable", .path.display())]
    #[diagnostic(
        code(clay::resource_unavailable),
        help("check the --clay-path directory, or omit it to use the bundled support library")
    )]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("bundled support library file \"{name}\" could not be decoded")]
    #[diagnostic(code(clay::corrupt_bundle))]
    CorruptBundle {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("group `{group}` defines its `{hook}` hook more than once (again at line {line})")]
    #[diagnostic(
        code(clay::duplicate_hook),
        help("keep a single definition of each lifecycle hook per file")
    )]
    DuplicateHook { group: String, hook: String, line: usize },

    #[error("failed to walk \"{}\"", .path.display())]
    #[diagnostic(code(clay::walk))]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read \"{}\"", .path.display())]
    #[diagnostic(code(clay::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write \"{}\"", .path.display())]
    #[diagnostic(code(clay::output_write))]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
