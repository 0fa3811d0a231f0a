//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! Progress lines are written to the given writer (stdout in the binary):
//!
//! ```text
//! Loading test suites...
//!   core::buffer (3 tests)
//! Written test suite to "/src/tests/clay_main.c"
//! Written header to "/src/tests/clay.h"
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::generator;

use super::{CliResult, ExitCode};

/// Generate a driver for every folder, in order, stopping at the first failure.
pub fn generate_all(folders: &[PathBuf], config: &GeneratorConfig, out: &mut impl Write) -> CliResult<ExitCode> {
    for folder in folders {
        generate_folder(folder, config, &mut *out)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Generate, report, and write the driver for one folder.
pub fn generate_folder(folder: &Path, config: &GeneratorConfig, out: &mut impl Write) -> CliResult<()> {
    writeln!(out, "Loading test suites...")?;

    let generation = generator::generate(folder, config)?;
    for suite in &generation.result.suites {
        writeln!(out, "  {} ({} tests)", suite.display_name, suite.count)?;
    }

    let files = generator::write(&generation)?;
    writeln!(out, "Written test suite to \"{}\"", files.driver.display())?;
    writeln!(out, "Written header to \"{}\"", files.header.display())?;
    Ok(())
}
