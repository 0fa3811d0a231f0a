//! Lifecycle hook vocabulary.
//!
//! A group may define a per-suite setup and teardown function. They are recognized purely by their short name
//! (the part after `test_<group>__`), so these spellings are reserved and never become ordinary tests.

use crate::lang::registry::{self, LangItemInfo};

/// Stable identifier for the lifecycle hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookId {
    Initialize,
    Cleanup,
}

/// Metadata entry for a lifecycle hook.
pub type HookInfo = LangItemInfo<HookId>;

/// Registry of lifecycle hooks, in the order they appear in a suite record.
pub const HOOKS: &[HookInfo] = &[
    HookInfo {
        id: HookId::Initialize,
        canonical: "initialize",
        aliases: &[],
        description: "Runs before every test of the suite.",
    },
    HookInfo {
        id: HookId::Cleanup,
        canonical: "cleanup",
        aliases: &[],
        description: "Runs after every test of the suite, even when the test failed.",
    },
];

/// Resolve a short name to a hook id; `None` means an ordinary test.
///
/// Matching is exact: `initialize_db` is an ordinary test.
pub fn from_str(short_name: &str) -> Option<HookId> {
    registry::resolve(HOOKS, short_name)
}

/// Return the canonical spelling for a hook.
pub fn as_str(id: HookId) -> &'static str {
    info_for(id).canonical
}

/// Return the metadata entry for a hook.
pub fn info_for(id: HookId) -> &'static HookInfo {
    match id {
        HookId::Initialize => &HOOKS[0],
        HookId::Cleanup => &HOOKS[1],
    }
}
