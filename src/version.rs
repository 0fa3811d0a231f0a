//! Generator version information.
//!
//! The version is stamped into the header comment of every generated driver, and reported by `clay --version`.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")` in multiple places.

/// The generator version string (for example, `0.7.0`).
pub const CLAY_VERSION: &str = env!("CARGO_PKG_VERSION");
