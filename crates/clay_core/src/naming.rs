//! Test-group naming policy.
//!
//! A *group* is the set of tests found in one source file. Its name is derived from the file's path relative
//! to the scan root, and it is spliced into two places:
//! - the expected symbol prefix (`test_<group>__`), which decides which functions belong to the group, and
//! - the suite display name (`a_b` -> `a::b`), which is what the generated driver prints and filters on.
//!
//! ## Examples
//! ```rust
//! use clay_core::naming;
//!
//! let group = naming::group_name_from_segments(&["core", "buffer"]);
//! assert_eq!(group, "core_buffer");
//! assert_eq!(naming::symbol_prefix(&group), "test_core_buffer__");
//! assert_eq!(naming::display_name(&group), "core::buffer");
//! assert_eq!(naming::short_name(&group, "test_core_buffer__grow"), Some("grow"));
//! ```

/// File suffix of test sources picked up by the tree walker.
pub const SOURCE_SUFFIX: &str = ".c";

/// Separator between the group prefix and the short test name inside a symbol.
pub const GROUP_SEPARATOR: &str = "__";

/// Separator used in suite display names.
pub const SCOPE_SEPARATOR: &str = "::";

/// Prefix shared by every test symbol, before the group name.
pub const TEST_PREFIX: &str = "test_";

/// Check whether a character may appear in a group name or short name.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Check whether `name` is usable as a group name.
///
/// ## Returns
/// - (`bool`): `true` when the name is non-empty and made only of ASCII letters, digits and underscores.
///
/// ## Notes
/// - The group name is spliced into a C identifier, so anything else could never match a declaration.
pub fn is_valid_group_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_word_char)
}

/// Join directory segments and the file stem into a group name.
///
/// ## Parameters
/// - `segments`: directory segments relative to the scan root, followed by the file stem.
pub fn group_name_from_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("_")
}

/// Strip the source suffix from a file name, yielding the stem used for the group name.
///
/// ## Returns
/// - (`Option<&str>`): the stem, or `None` when the file is not a test source (or is nothing but the suffix).
pub fn source_stem(file_name: &str) -> Option<&str> {
    file_name.strip_suffix(SOURCE_SUFFIX).filter(|stem| !stem.is_empty())
}

/// Render a group name for humans: every `_` becomes `::`.
pub fn display_name(group: &str) -> String {
    group.replace('_', SCOPE_SEPARATOR)
}

/// The symbol prefix a function must carry to belong to `group`.
pub fn symbol_prefix(group: &str) -> String {
    format!("{TEST_PREFIX}{group}{GROUP_SEPARATOR}")
}

/// Extract the short test name from `symbol`, if it belongs to `group`.
///
/// ## Returns
/// - (`Option<&str>`): the part after `test_<group>__`, or `None` when the prefix does not match or the
///   remainder is empty or contains non-word characters.
pub fn short_name<'a>(group: &str, symbol: &'a str) -> Option<&'a str> {
    let rest = symbol
        .strip_prefix(TEST_PREFIX)?
        .strip_prefix(group)?
        .strip_prefix(GROUP_SEPARATOR)?;

    if rest.is_empty() || !rest.chars().all(is_word_char) {
        return None;
    }
    Some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_name_joins_segments_with_underscores() {
        assert_eq!(group_name_from_segments(&["math"]), "math");
        assert_eq!(group_name_from_segments(&["a", "b"]), "a_b");
        assert_eq!(group_name_from_segments(&["core", "io", "buffer"]), "core_io_buffer");
    }

    #[test]
    fn test_source_stem() {
        assert_eq!(source_stem("math.c"), Some("math"));
        assert_eq!(source_stem("math.h"), None);
        assert_eq!(source_stem("math.cc"), None);
        assert_eq!(source_stem(".c"), None);
    }

    #[test]
    fn test_valid_group_names() {
        assert!(is_valid_group_name("math"));
        assert!(is_valid_group_name("a_b2"));
        assert!(!is_valid_group_name(""));
        assert!(!is_valid_group_name("foo-bar"));
        assert!(!is_valid_group_name("foo.bar"));
        assert!(!is_valid_group_name("caf\u{e9}"));
    }

    #[test]
    fn test_display_name_uses_scope_separator() {
        assert_eq!(display_name("math"), "math");
        assert_eq!(display_name("a_b"), "a::b");
        assert_eq!(display_name("my_file"), "my::file");
    }

    #[test]
    fn test_short_name_requires_group_prefix() {
        assert_eq!(short_name("math", "test_math__add"), Some("add"));
        assert_eq!(short_name("math", "test_math__add__carry"), Some("add__carry"));
        assert_eq!(short_name("math", "test_math__"), None);
        assert_eq!(short_name("math", "test_mathx__add"), None);
        assert_eq!(short_name("a", "test_a_b__c"), None);
        assert_eq!(short_name("a_b", "test_a_b__c"), Some("c"));
        assert_eq!(short_name("math", "math__add"), None);
    }
}
