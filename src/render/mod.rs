//! Registration table renderer
//!
//! Produces the two output texts from a [`GenerationResult`]:
//! - the driver (`clay_main.c`): support library, extern declarations, callback and suite tables, and a `main`
//!   forwarding to `clay_test`
//! - the header (`clay.h`), copied from the library source
//!
//! Rendering is pure over its inputs; nothing touches the filesystem here.

pub mod template;

use clay_core::PrintSink;
use clay_core::lang::sinks;

use crate::errors::Result;
use crate::registry::{Callback, GenerationResult, Suite};
use crate::runtime::{self, HEADER_FILE, LibrarySource};
use crate::version::CLAY_VERSION;
use template::{DRIVER_TEMPLATE, SUITE_TEMPLATE, substitute};

/// Separator between entries of the callback and suite tables.
const TABLE_SEPARATOR: &str = ",\n\t";

/// Entry rendered for an absent lifecycle hook.
pub const NULL_HOOK: &str = "{NULL, NULL, 0}";

/// Rendered output texts, not yet written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    /// Content of `clay_main.c`
    pub driver: String,
    /// Content of `clay.h`
    pub header: String,
}

/// Render the driver and header for `result`.
///
/// ## Errors
/// - [`GenerateError::ResourceUnavailable`](crate::GenerateError::ResourceUnavailable) when the library source
///   lacks a module or the header.
#[tracing::instrument(skip_all, fields(suites = result.suites.len(), callbacks = result.callbacks.len()))]
pub fn render(result: &GenerationResult, library: &dyn LibrarySource, sink: PrintSink) -> Result<RenderedOutput> {
    let library_text = runtime::library_text(library)?;
    let header = library.load(HEADER_FILE)?;

    Ok(RenderedOutput {
        driver: render_driver(result, &library_text, sink),
        header,
    })
}

/// Fill the driver template around an already loaded library text.
pub fn render_driver(result: &GenerationResult, library_text: &str, sink: PrintSink) -> String {
    let extern_declarations = extern_declarations(result);
    let test_callbacks = callback_table(result);
    let test_suites = suite_table(result);
    let suites_str = selector_string(result);
    let cb_count = result.callbacks.len().to_string();
    let suite_count = result.suites.len().to_string();

    substitute(
        DRIVER_TEMPLATE,
        &[
            ("version", CLAY_VERSION),
            ("clay_print", sinks::print_expansion(sink)),
            ("clay_library", library_text),
            ("extern_declarations", extern_declarations.as_str()),
            ("test_callbacks", test_callbacks.as_str()),
            ("cb_count", cb_count.as_str()),
            ("test_suites", test_suites.as_str()),
            ("suite_count", suite_count.as_str()),
            ("suites_str", suites_str.as_str()),
        ],
    )
}

/// One `extern <header>;` line per matched definition.
pub fn extern_declarations(result: &GenerationResult) -> String {
    result
        .declarations
        .iter()
        .map(|decl| format!("extern {decl};"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Body of `_all_callbacks`.
pub fn callback_table(result: &GenerationResult) -> String {
    result
        .callbacks
        .iter()
        .map(callback_entry)
        .collect::<Vec<_>>()
        .join(TABLE_SEPARATOR)
}

/// Body of `_all_suites`.
pub fn suite_table(result: &GenerationResult) -> String {
    result
        .suites
        .iter()
        .map(suite_entry)
        .collect::<Vec<_>>()
        .join(TABLE_SEPARATOR)
}

/// Suite display names joined with `, `.
pub fn selector_string(result: &GenerationResult) -> String {
    result.suite_names().collect::<Vec<_>>().join(", ")
}

fn callback_entry(callback: &Callback) -> String {
    format!(
        "{{\"{}\", &{}, {}}}",
        callback.short_name, callback.symbol, callback.suite_index
    )
}

fn hook_entry(hook: Option<&Callback>) -> String {
    hook.map_or_else(|| NULL_HOOK.to_string(), callback_entry)
}

fn suite_entry(suite: &Suite) -> String {
    let initialize = hook_entry(suite.initialize.as_ref());
    let cleanup = hook_entry(suite.cleanup.as_ref());
    let cb_ptr = format!("&_all_callbacks[{}]", suite.offset);
    let cb_count = suite.count.to_string();

    substitute(
        SUITE_TEMPLATE,
        &[
            ("clean_name", suite.display_name.as_str()),
            ("initialize", initialize.as_str()),
            ("cleanup", cleanup.as_str()),
            ("cb_ptr", cb_ptr.as_str()),
            ("cb_count", cb_count.as_str()),
        ],
    )
    .trim()
    .to_string()
}
