//! Tree walker
//!
//! Visits every `*.c` file under the scan root in a deterministic order (entries sorted by file name, depth
//! first, a directory's contents right after the directory itself) and registers each file as one group.

use std::fs;
use std::path::Path;

use clay_core::naming;
use walkdir::WalkDir;

use super::{TestGroupName, register_source};
use crate::errors::{GenerateError, Result};
use crate::registry::GenerationResult;

/// Check whether `path` names a test source by its suffix.
pub fn is_test_source(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(naming::source_stem)
        .is_some()
}

/// Discover every suite under `root`.
///
/// ## Errors
/// - [`GenerateError::ScanRootMissing`] when `root` is not a directory.
/// - [`GenerateError::NoTestsFound`] when no file produced a suite.
/// - [`GenerateError::Walk`] / [`GenerateError::Io`] when the tree or a test file cannot be read.
/// - [`GenerateError::DuplicateHook`] from suite assembly.
#[tracing::instrument(skip_all, fields(root = %root.display()))]
pub fn discover(root: &Path) -> Result<GenerationResult> {
    if !root.is_dir() {
        return Err(GenerateError::ScanRootMissing {
            root: root.to_path_buf(),
        });
    }

    let mut result = GenerationResult::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| {
            let path = source.path().unwrap_or(root).to_path_buf();
            GenerateError::Walk { path, source }
        })?;

        let path = entry.path();
        if !path.is_file() || !is_test_source(path) {
            continue;
        }

        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        let Some(group) = TestGroupName::from_relative_path(relative) else {
            tracing::warn!(
                "Skipping {}: its path does not form a valid test group name",
                relative.display()
            );
            continue;
        };

        let text = read_source(path)?;
        let produced = register_source(&mut result, &group, &text)?;
        tracing::debug!(group = %group, produced, "processed test file");
    }

    if result.is_empty() {
        return Err(GenerateError::NoTestsFound {
            root: root.to_path_buf(),
        });
    }

    Ok(result)
}

/// Read a test file, replacing invalid UTF-8 instead of failing.
fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!("{} is not valid UTF-8; decoding lossily", path.display());
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
