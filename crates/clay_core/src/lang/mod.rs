//! Registry-first vocabularies shared by the generator.
//!
//! Each vocabulary exposes a stable `*Id` enum, a `const` table of [`registry::LangItemInfo`] entries, and
//! `from_str` / `as_str` / `info_for` lookups, so callers never compare raw strings.

pub mod hooks;
pub mod registry;
pub mod sinks;
