//! Support-library resolver
//!
//! The generated driver inlines the C support library (`clay.c`, `clay_sandbox.c`) and ships `clay.h` next to it.
//! Those files come from one of two sources:
//! - [`ExternalLibrary`] - a directory given with `--clay-path`
//! - [`BundledLibrary`] - the copy compiled into this binary
//!
//! Both are read through [`LibrarySource`], so the renderer never knows which one it got.

pub mod bundle;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use bundle::BundledLibrary;

use crate::errors::{GenerateError, Result};

/// Library modules inlined into the driver, in order.
pub const LIBRARY_MODULES: &[&str] = &["clay.c", "clay_sandbox.c"];

/// Header written next to the driver.
pub const HEADER_FILE: &str = "clay.h";

/// Provider of support-library text by logical filename.
pub trait LibrarySource {
    /// Load the full text of `name` (e.g. `clay.c`).
    ///
    /// ## Errors
    /// - [`GenerateError::ResourceUnavailable`] when the file cannot be provided.
    fn load(&self, name: &str) -> Result<String>;

    /// Short human-readable origin, for logs.
    fn origin(&self) -> String;
}

/// Support library read from a directory on disk.
#[derive(Debug, Clone)]
pub struct ExternalLibrary {
    dir: PathBuf,
}

impl ExternalLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl LibrarySource for ExternalLibrary {
    fn load(&self, name: &str) -> Result<String> {
        let path = self.dir.join(name);
        fs::read_to_string(&path).map_err(|source| GenerateError::ResourceUnavailable { path, source })
    }

    fn origin(&self) -> String {
        self.dir.display().to_string()
    }
}

/// Pick the library source: the directory when one is given, the bundle otherwise.
pub fn resolve(library_dir: Option<&Path>) -> Result<Box<dyn LibrarySource>> {
    let source: Box<dyn LibrarySource> = match library_dir {
        Some(dir) => Box::new(ExternalLibrary::new(dir)),
        None => Box::new(BundledLibrary::open()?),
    };
    tracing::debug!(origin = %source.origin(), "resolved support library");
    Ok(source)
}

/// The library modules' text joined with newlines, ready to inline into the driver.
pub fn library_text(source: &dyn LibrarySource) -> Result<String> {
    let modules = LIBRARY_MODULES
        .iter()
        .map(|name| source.load(name))
        .collect::<Result<Vec<_>>>()?;
    Ok(modules.join("\n"))
}

/// Error for a file a source does not provide.
pub(crate) fn not_provided(name: &str) -> GenerateError {
    GenerateError::ResourceUnavailable {
        path: PathBuf::from(name),
        source: io::Error::new(io::ErrorKind::NotFound, "not part of the support library"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_external_library_reads_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("clay.c"), "/* core */").unwrap();
        fs::write(dir.path().join("clay_sandbox.c"), "/* sandbox */").unwrap();

        let library = ExternalLibrary::new(dir.path());
        assert_eq!(library.load("clay.c").unwrap(), "/* core */");
        assert_eq!(library_text(&library).unwrap(), "/* core */\n/* sandbox */");
    }

    #[test]
    fn test_external_library_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let library = ExternalLibrary::new(dir.path());

        match library.load("clay.h").unwrap_err() {
            GenerateError::ResourceUnavailable { path, source } => {
                assert_eq!(path, dir.path().join("clay.h"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected ResourceUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_prefers_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("clay.h"), "// custom").unwrap();

        let source = resolve(Some(dir.path())).unwrap();
        assert_eq!(source.load("clay.h").unwrap(), "// custom");

        let bundled = resolve(None).unwrap();
        assert!(bundled.load("clay.h").unwrap().contains("__CLAY_TEST_H__"));
    }
}
