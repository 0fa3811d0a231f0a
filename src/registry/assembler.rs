//! Suite assembly
//!
//! Turns one group's matched functions into a suite record. Offsets are assigned as a fold: the caller passes
//! the [`Accumulator`] it got from the previous group and receives the next one, so the offset of every suite is
//! a pure function of the groups assembled before it.

use clay_core::HookId;
use clay_core::lang::hooks;
use clay_core::naming;

use super::{CandidateFunction, Callback, Suite};
use crate::errors::{GenerateError, Result};

/// Running totals threaded through successive [`assemble`] calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulator {
    /// Ordinary callbacks registered so far (the next suite's offset)
    pub callback_count: usize,
    /// Suites produced so far (the next suite's index)
    pub suite_count: usize,
}

/// Outcome of assembling one group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    /// `None` when the group has no ordinary test
    pub suite: Option<Suite>,
    /// Ordinary callbacks to append to the flat table (empty when `suite` is `None`)
    pub callbacks: Vec<Callback>,
    /// Every matched definition head, hooks included
    pub declarations: Vec<String>,
}

/// Partition `candidates` into hooks and ordinary callbacks and build the group's suite.
///
/// ## Parameters
/// - `group`: the group name the candidates were matched against.
/// - `candidates`: matches in source order.
/// - `acc`: totals from all previously assembled groups.
///
/// ## Returns
/// - The assembly and the accumulator to pass to the next group. A group without ordinary tests leaves the
///   accumulator unchanged.
///
/// ## Errors
/// - [`GenerateError::DuplicateHook`] when the group defines the same lifecycle hook twice.
pub fn assemble<'a>(
    group: &str,
    candidates: impl IntoIterator<Item = CandidateFunction<'a>>,
    acc: Accumulator,
) -> Result<(Assembly, Accumulator)> {
    let suite_index = acc.suite_count;

    let mut initialize: Option<Callback> = None;
    let mut cleanup: Option<Callback> = None;
    let mut callbacks = Vec::new();
    let mut declarations = Vec::new();

    for candidate in candidates {
        declarations.push(candidate.declaration.to_string());

        let Some(id) = hooks::from_str(candidate.short_name) else {
            callbacks.push(Callback::new(&candidate, suite_index));
            continue;
        };
        let slot = match id {
            HookId::Initialize => &mut initialize,
            HookId::Cleanup => &mut cleanup,
        };

        if slot.is_some() {
            return Err(GenerateError::DuplicateHook {
                group: group.to_string(),
                hook: hooks::as_str(id).to_string(),
                line: candidate.line,
            });
        }
        *slot = Some(Callback::new(&candidate, suite_index));
    }

    if callbacks.is_empty() {
        let assembly = Assembly {
            declarations,
            ..Assembly::default()
        };
        return Ok((assembly, acc));
    }

    let suite = Suite {
        group: group.to_string(),
        display_name: naming::display_name(group),
        initialize,
        cleanup,
        offset: acc.callback_count,
        count: callbacks.len(),
    };

    let next = Accumulator {
        callback_count: acc.callback_count + callbacks.len(),
        suite_count: acc.suite_count + 1,
    };

    let assembly = Assembly {
        suite: Some(suite),
        callbacks,
        declarations,
    };
    Ok((assembly, next))
}
