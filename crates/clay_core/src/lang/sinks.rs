//! Print-sink vocabulary for the generated driver.
//!
//! The driver routes all of its output through a `clay_print(...)` macro. The sink decides what that macro
//! expands to. It only affects the generated C code, never the generator's own diagnostics.

use std::fmt;

use crate::lang::registry::{self, LangItemInfo};

/// Where the generated driver sends its progress and failure output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrintSink {
    #[default]
    Stdout,
    Stderr,
    Silent,
}

/// Metadata entry for a print sink.
pub type SinkInfo = LangItemInfo<PrintSink>;

/// Registry of print sinks.
pub const SINKS: &[SinkInfo] = &[
    SinkInfo {
        id: PrintSink::Stdout,
        canonical: "stdout",
        aliases: &["standard-output"],
        description: "Print through printf.",
    },
    SinkInfo {
        id: PrintSink::Stderr,
        canonical: "stderr",
        aliases: &["error-output"],
        description: "Print through fprintf(stderr, ...).",
    },
    SinkInfo {
        id: PrintSink::Silent,
        canonical: "silent",
        aliases: &["suppressed"],
        description: "Discard all driver output.",
    },
];

/// Resolve a sink spelling (canonical or alias).
pub fn from_str(name: &str) -> Option<PrintSink> {
    registry::resolve(SINKS, name)
}

/// Return the canonical spelling for a sink.
pub fn as_str(sink: PrintSink) -> &'static str {
    info_for(sink).canonical
}

/// Return the metadata entry for a sink.
pub fn info_for(sink: PrintSink) -> &'static SinkInfo {
    match sink {
        PrintSink::Stdout => &SINKS[0],
        PrintSink::Stderr => &SINKS[1],
        PrintSink::Silent => &SINKS[2],
    }
}

/// Body of the generated `#define clay_print(...)` macro.
pub fn print_expansion(sink: PrintSink) -> &'static str {
    match sink {
        PrintSink::Stdout => "printf(__VA_ARGS__)",
        PrintSink::Stderr => "fprintf(stderr, __VA_ARGS__)",
        PrintSink::Silent => "",
    }
}

impl fmt::Display for PrintSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}
