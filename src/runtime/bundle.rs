//! Support library compiled into the binary.
//!
//! `build.rs` zlib-compresses everything under `runtime/` into `OUT_DIR`; this module decodes it.

use std::collections::HashMap;
use std::io::Read;

use flate2::read::ZlibDecoder;

use super::{LibrarySource, not_provided};
use crate::errors::{GenerateError, Result};

/// `(logical filename, zlib bytes)` pairs generated by `build.rs`.
static BUNDLE: &[(&str, &[u8])] = include!(concat!(env!("OUT_DIR"), "/bundle.gen.rs"));

/// The embedded support library, decoded once when opened.
#[derive(Debug, Clone)]
pub struct BundledLibrary {
    files: HashMap<&'static str, String>,
}

impl BundledLibrary {
    /// Decode every bundled file.
    ///
    /// ## Errors
    /// - [`GenerateError::CorruptBundle`] when an entry does not inflate to UTF-8 text.
    pub fn open() -> Result<Self> {
        let files = BUNDLE
            .iter()
            .map(|&(name, compressed)| Ok((name, inflate(name, compressed)?)))
            .collect::<Result<HashMap<_, _>>>()?;
        Ok(Self { files })
    }

    /// Logical filenames in the bundle.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.files.keys().copied()
    }
}

impl LibrarySource for BundledLibrary {
    fn load(&self, name: &str) -> Result<String> {
        self.files.get(name).cloned().ok_or_else(|| not_provided(name))
    }

    fn origin(&self) -> String {
        "bundled".to_string()
    }
}

fn inflate(name: &str, compressed: &[u8]) -> Result<String> {
    let mut text = String::new();
    ZlibDecoder::new(compressed)
        .read_to_string(&mut text)
        .map_err(|source| GenerateError::CorruptBundle {
            name: name.to_string(),
            source,
        })?;
    Ok(text)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::runtime::{HEADER_FILE, LIBRARY_MODULES};

    #[test]
    fn test_bundle_holds_every_runtime_file() {
        let library = BundledLibrary::open().unwrap();
        let mut names: Vec<_> = library.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["clay.c", "clay.h", "clay_sandbox.c"]);

        for name in LIBRARY_MODULES.iter().chain([&HEADER_FILE]) {
            assert!(!library.load(name).unwrap().is_empty(), "{name} is empty");
        }
    }

    #[test]
    fn test_bundled_core_defines_the_driver_entry_point() {
        let library = BundledLibrary::open().unwrap();
        let core = library.load("clay.c").unwrap();
        assert!(core.contains("clay_test("));
        assert!(core.contains("struct clay_suite"));
    }

    #[test]
    fn test_unknown_file_is_unavailable() {
        let library = BundledLibrary::open().unwrap();
        let err = library.load("clay_fs.c").unwrap_err();
        assert!(matches!(err, GenerateError::ResourceUnavailable { .. }));
    }

    #[test]
    fn test_corrupt_entry() {
        let err = inflate("broken.c", b"not zlib").unwrap_err();
        assert!(matches!(err, GenerateError::CorruptBundle { ref name, .. } if name == "broken.c"));
    }
}
