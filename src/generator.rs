//! Generation pipeline
//!
//! discovery -> library resolution -> rendering, all in memory. [`write`] puts the result on disk afterwards, so
//! any error before that point leaves the output directory untouched.

use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::discovery;
use crate::errors::{GenerateError, Result};
use crate::output::{self, WrittenFiles};
use crate::registry::GenerationResult;
use crate::render::{self, RenderedOutput};
use crate::runtime;

/// A fully rendered scan root.
#[derive(Debug, Clone)]
pub struct Generation {
    /// Absolute scan root
    pub root: PathBuf,
    /// Where [`write`] puts the files
    pub output_dir: PathBuf,
    pub result: GenerationResult,
    pub rendered: RenderedOutput,
}

/// Discover and render the tests under `root`.
///
/// ## Errors
/// - Any discovery, library, or rendering failure; nothing has been written when this returns `Err`.
#[tracing::instrument(skip_all, fields(root = %root.display()))]
pub fn generate(root: &Path, config: &GeneratorConfig) -> Result<Generation> {
    let root = std::path::absolute(root).map_err(|source| GenerateError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let result = discovery::discover(&root)?;
    let library = runtime::resolve(config.library_dir.as_deref())?;
    let rendered = render::render(&result, library.as_ref(), config.print_sink)?;

    tracing::info!(
        suites = result.suites.len(),
        callbacks = result.callbacks.len(),
        "rendered test driver"
    );

    Ok(Generation {
        output_dir: config.output_dir_for(&root),
        root,
        result,
        rendered,
    })
}

/// Write a rendered generation to its output directory.
pub fn write(generation: &Generation) -> Result<WrittenFiles> {
    output::write_output(&generation.output_dir, &generation.rendered)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_generate_defaults_output_to_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("core.c"), "void test_core__one(void)\n{\n}\n").unwrap();

        let generation = generate(dir.path(), &GeneratorConfig::new()).unwrap();
        assert!(generation.root.is_absolute());
        assert_eq!(generation.output_dir, generation.root);
        assert!(generation.rendered.driver.contains("{\"one\", &test_core__one, 0}"));

        let files = write(&generation).unwrap();
        assert!(files.driver.exists());
        assert!(files.header.exists());
    }

    #[test]
    fn test_failed_generation_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.c"), "void helper(void) {}\n").unwrap();
        let out = dir.path().join("out");

        let config = GeneratorConfig::new().with_output_dir(&out);
        let err = generate(dir.path(), &config).unwrap_err();
        assert!(matches!(err, GenerateError::NoTestsFound { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn test_missing_library_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.c"), "void test_a__x(void) {}\n").unwrap();

        let config = GeneratorConfig::new().with_library_dir(dir.path().join("no-such-dir"));
        let err = generate(dir.path(), &config).unwrap_err();
        assert!(matches!(err, GenerateError::ResourceUnavailable { .. }));
    }
}
