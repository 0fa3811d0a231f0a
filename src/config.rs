//! Generator configuration.
//!
//! Built once per invocation, before discovery starts, and passed by reference to every stage that needs it.

use std::path::{Path, PathBuf};

use clay_core::PrintSink;

/// Options shared by every scan root of one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory holding `clay.c`, `clay_sandbox.c` and `clay.h`; `None` uses the bundled copy
    pub library_dir: Option<PathBuf>,
    /// Where to write the driver and header; `None` writes into each scan root
    pub output_dir: Option<PathBuf>,
    /// Destination of the generated driver's progress output
    pub print_sink: PrintSink,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.library_dir = Some(dir.into());
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_print_sink(mut self, sink: PrintSink) -> Self {
        self.print_sink = sink;
        self
    }

    /// Output directory for `root`: the explicit one if set, the root itself otherwise.
    pub fn output_dir_for(&self, root: &Path) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| root.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::new();
        assert_eq!(config.print_sink, PrintSink::Stdout);
        assert!(config.library_dir.is_none());
        assert_eq!(config.output_dir_for(Path::new("/src/tests")), PathBuf::from("/src/tests"));
    }

    #[test]
    fn test_explicit_output_dir_wins() {
        let config = GeneratorConfig::new()
            .with_output_dir("/tmp/out")
            .with_print_sink(PrintSink::Silent);
        assert_eq!(config.output_dir_for(Path::new("/src/tests")), PathBuf::from("/tmp/out"));
        assert_eq!(config.print_sink, PrintSink::Silent);
    }
}
