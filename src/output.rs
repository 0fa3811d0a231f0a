//! Output writer - places the rendered driver and header on disk
//!
//! Writes:
//! - `clay_main.c` (the driver)
//! - `clay.h` (the support header)
//!
//! The output directory is created when missing. Callers only reach this after rendering succeeded, so a failed
//! generation never leaves partial output behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{GenerateError, Result};
use crate::render::RenderedOutput;
use crate::runtime::HEADER_FILE;

/// File name of the generated driver.
pub const DRIVER_FILE: &str = "clay_main.c";

/// Paths of the files written for one scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub driver: PathBuf,
    pub header: PathBuf,
}

/// Write `rendered` into `output_dir`, replacing existing files.
pub fn write_output(output_dir: &Path, rendered: &RenderedOutput) -> Result<WrittenFiles> {
    fs::create_dir_all(output_dir).map_err(|source| GenerateError::OutputWrite {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let files = WrittenFiles {
        driver: output_dir.join(DRIVER_FILE),
        header: output_dir.join(HEADER_FILE),
    };

    write_file(&files.driver, &rendered.driver)?;
    write_file(&files.header, &rendered.header)?;

    tracing::debug!(dir = %output_dir.display(), "wrote driver and header");
    Ok(files)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| GenerateError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rendered() -> RenderedOutput {
        RenderedOutput {
            driver: "int main(void) { return 0; }\n".to_string(),
            header: "#pragma once\n".to_string(),
        }
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("out");

        let files = write_output(&out, &rendered()).unwrap();
        assert_eq!(files.driver, out.join("clay_main.c"));
        assert_eq!(fs::read_to_string(&files.driver).unwrap(), rendered().driver);
        assert_eq!(fs::read_to_string(&files.header).unwrap(), rendered().header);
    }

    #[test]
    fn test_overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DRIVER_FILE), "stale").unwrap();

        write_output(dir.path(), &rendered()).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join(DRIVER_FILE)).unwrap(),
            rendered().driver
        );
    }

    #[test]
    fn test_unwritable_target() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();

        let err = write_output(&blocker, &rendered()).unwrap_err();
        assert!(matches!(err, GenerateError::OutputWrite { .. }));
    }
}
