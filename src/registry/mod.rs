//! Registration data model
//!
//! Everything the renderer needs is collected here, in discovery order:
//! - [`Callback`] - one ordinary test in the flat callback table
//! - [`Suite`] - one non-empty group: display name, hooks, and a window into the callback table
//! - [`GenerationResult`] - the aggregate handed to the renderer
//!
//! ## Invariants
//!
//! - A suite's `offset` equals the number of callbacks registered by all earlier suites, so the suite windows
//!   partition [`GenerationResult::callbacks`] with no gaps or overlaps.
//! - Hooks are never part of the flat callback list; they live on their suite only.
//! - `declarations` holds every matched function, hooks included, even for groups that produced no suite.

pub mod assembler;

use std::ops::Range;

pub use assembler::{Accumulator, Assembly, assemble};

/// A function matched for a group, borrowed from the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateFunction<'a> {
    /// Definition head as written, e.g. `void test_math__add(void)`
    pub declaration: &'a str,
    /// Full symbol, e.g. `test_math__add`
    pub symbol: &'a str,
    /// Part after the group prefix, e.g. `add`
    pub short_name: &'a str,
    /// 1-based line of the definition
    pub line: usize,
}

/// A registered function: ordinary test or lifecycle hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callback {
    pub short_name: String,
    pub symbol: String,
    /// Index of the owning suite in [`GenerationResult::suites`]
    pub suite_index: usize,
}

impl Callback {
    pub fn new(candidate: &CandidateFunction<'_>, suite_index: usize) -> Self {
        Self {
            short_name: candidate.short_name.to_string(),
            symbol: candidate.symbol.to_string(),
            suite_index,
        }
    }
}

/// Registration record of a group with at least one ordinary test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suite {
    /// Group name (`a_b`)
    pub group: String,
    /// Display name (`a::b`)
    pub display_name: String,
    /// `None` renders as the null hook
    pub initialize: Option<Callback>,
    pub cleanup: Option<Callback>,
    /// First callback of this suite in the flat callback table
    pub offset: usize,
    /// Number of ordinary callbacks
    pub count: usize,
}

impl Suite {
    /// This suite's window into the flat callback table.
    pub fn window(&self) -> Range<usize> {
        self.offset..self.offset + self.count
    }
}

/// Everything discovered under one scan root, ready to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    pub suites: Vec<Suite>,
    pub callbacks: Vec<Callback>,
    /// Definition heads to declare `extern`, in discovery order
    pub declarations: Vec<String>,
    accumulator: Accumulator,
}

impl GenerationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble one group's candidates and append the outcome.
    ///
    /// Returns `true` when the group produced a suite.
    pub fn add_group<'a>(
        &mut self,
        group: &str,
        candidates: impl IntoIterator<Item = CandidateFunction<'a>>,
    ) -> crate::Result<bool> {
        let (assembly, next) = assemble(group, candidates, self.accumulator)?;
        self.accumulator = next;
        Ok(self.append(assembly))
    }

    fn append(&mut self, assembly: Assembly) -> bool {
        self.declarations.extend(assembly.declarations);
        match assembly.suite {
            Some(suite) => {
                self.callbacks.extend(assembly.callbacks);
                self.suites.push(suite);
                true
            }
            None => false,
        }
    }

    /// Suite display names, in suite order.
    pub fn suite_names(&self) -> impl Iterator<Item = &str> {
        self.suites.iter().map(|s| s.display_name.as_str())
    }

    /// Callbacks registered by `suite`.
    pub fn callbacks_of(&self, suite: &Suite) -> &[Callback] {
        &self.callbacks[suite.window()]
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }
}
