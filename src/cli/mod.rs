//! CLI module for the Clay driver generator
//!
//! ```text
//! clay [-c DIR] [-o DIR] [-v MODE] FOLDER...
//! ```
//!
//! Each `FOLDER` is scanned independently, in argument order. The first failure stops the invocation.
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use clay_core::PrintSink;
use clay_core::lang::sinks;

use crate::config::GeneratorConfig;
use crate::errors::GenerateError;
use crate::version::CLAY_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<GenerateError> for CliError {
    fn from(err: GenerateError) -> Self {
        Self::failure(format!("{:?}", miette::Report::new(err)))
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::failure(format!("Error writing progress output: {err}"))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate a C unit-test driver from `test_<group>__<name>` functions
#[derive(Parser, Debug)]
#[command(name = "clay")]
#[command(version = CLAY_VERSION)]
#[command(about = "Generate a C unit-test driver from test_<group>__<name> functions", long_about = None)]
pub struct Cli {
    /// Directories to scan for `*.c` test files
    #[arg(value_name = "FOLDER", required = true, num_args = 1..)]
    pub folders: Vec<PathBuf>,

    /// Directory holding clay.c, clay_sandbox.c and clay.h (default: bundled copy)
    #[arg(short = 'c', long = "clay-path", value_name = "DIR", env = "CLAY_PATH")]
    pub clay_path: Option<PathBuf>,

    /// Output directory for clay_main.c and clay.h (default: each FOLDER)
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Where the generated driver prints its progress: stdout, stderr or silent
    #[arg(
        short = 'v',
        long = "report-to",
        value_name = "MODE",
        default_value = "stdout",
        value_parser = parse_print_sink
    )]
    pub report_to: PrintSink,
}

impl Cli {
    /// Configuration shared by every folder of this invocation.
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            library_dir: self.clay_path.clone(),
            output_dir: self.output.clone(),
            print_sink: self.report_to,
        }
    }
}

fn parse_print_sink(value: &str) -> Result<PrintSink, String> {
    sinks::from_str(value).ok_or_else(|| {
        let known: Vec<_> = sinks::SINKS.iter().map(|info| info.canonical).collect();
        format!("unknown report mode `{value}` (expected one of: {})", known.join(", "))
    })
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.config();
    let mut stdout = io::stdout().lock();
    commands::generate_all(&cli.folders, &config, &mut stdout)
}

// ============================================================================
// Tests
// ============================================================================
