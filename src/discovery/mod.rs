//! Test discovery
//!
//! Walks a scan root, derives a group name for every `*.c` file, and registers the functions that follow the
//! group's naming convention.
//!
//! ## Modules
//!
//! - `matcher` - naming-convention matcher over scanned declarations
//! - `walker` - deterministic tree walk driving the matcher and the suite assembler

pub mod matcher;
pub mod walker;

use std::fmt;
use std::path::{Component, Path};

use clay_core::naming;

use crate::errors::Result;
use crate::registry::GenerationResult;

pub use matcher::match_group;
pub use walker::{discover, is_test_source};

/// Group name of a test file: its path relative to the scan root, `/` replaced by `_`, suffix stripped.
///
/// Always a valid identifier fragment (letters, digits, underscores).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TestGroupName(String);

impl TestGroupName {
    /// Validate a ready-made group name.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        naming::is_valid_group_name(&name).then_some(Self(name))
    }

    /// Derive the group name for a test file from its path relative to the scan root.
    ///
    /// ## Returns
    /// - `None` when the file is not a test source, a segment is not UTF-8, or the result is not a valid
    ///   identifier fragment (e.g. `foo-bar.c`).
    pub fn from_relative_path(relative: &Path) -> Option<Self> {
        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(segment) => segments.push(segment.to_str()?),
                Component::CurDir => {}
                _ => return None,
            }
        }

        let file_name = segments.pop()?;
        segments.push(naming::source_stem(file_name)?);
        Self::new(naming::group_name_from_segments(&segments))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TestGroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Scan `text` once and register the functions belonging to `group`.
///
/// Returns `true` when the group produced a suite.
pub fn register_source(result: &mut GenerationResult, group: &TestGroupName, text: &str) -> Result<bool> {
    let decls = clay_syntax::parser::scan_declarations(text);
    result.add_group(group.as_str(), match_group(group.as_str(), &decls))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn group(path: &str) -> Option<String> {
        TestGroupName::from_relative_path(Path::new(path)).map(|g| g.to_string())
    }

    #[test]
    fn test_group_name_from_path() {
        assert_eq!(group("math.c").as_deref(), Some("math"));
        assert_eq!(group("a/b.c").as_deref(), Some("a_b"));
        assert_eq!(group("./core/io/buffer.c").as_deref(), Some("core_io_buffer"));
    }

    #[test]
    fn test_non_sources_have_no_group() {
        assert_eq!(group("math.h"), None);
        assert_eq!(group("README"), None);
        assert_eq!(group("dir/.c"), None);
    }

    #[test]
    fn test_invalid_identifiers_have_no_group() {
        assert_eq!(group("foo-bar.c"), None);
        assert_eq!(group("my dir/x.c"), None);
        assert_eq!(group("v1.2/x.c"), None);
        assert_eq!(group("../x.c"), None);
    }

    #[test]
    fn test_register_source_matches_only_own_group() {
        let mut result = GenerationResult::new();
        let text = "void test_math__add(void) {}\nvoid test_other__x(void) {}\n";
        let produced = register_source(&mut result, &TestGroupName::new("math").unwrap(), text).unwrap();

        assert!(produced);
        assert_eq!(result.callbacks.len(), 1);
        assert_eq!(result.declarations, vec!["void test_math__add(void)"]);
    }
}
