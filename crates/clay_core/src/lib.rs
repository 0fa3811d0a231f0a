//! Provide the pure naming policy and canonical vocabulary for the Clay test-driver generator.
//!
//! This crate is intentionally small and dependency-free. It holds the deterministic rules that every other
//! part of the generator agrees on:
//! - how a source file's path becomes a test-group name,
//! - how a group name becomes the function prefix the matcher looks for,
//! - how a group name is shown to humans (the suite display name),
//! - which short names are reserved for lifecycle hooks, and which print sinks the driver supports.
//!
//! ## Notes
//!
//! - **No IO**, no global state. Path handling happens in the generator crate; this crate only sees strings.

pub mod lang;
pub mod naming;

pub use lang::hooks::HookId;
pub use lang::sinks::PrintSink;
