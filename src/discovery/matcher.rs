//! Naming-convention matcher
//!
//! A function belongs to group `G` when its definition starts a line, returns `void`, takes `()` or `(void)`,
//! and is named `test_G__<short name>` with a non-empty word-character short name.
//!
//! The rule is applied to declarations already produced by [`clay_syntax::parser::scan_declarations`], so a
//! file is tokenized once and only ever compared against its own group name.

use clay_core::naming;
use clay_syntax::ast::FunctionDecl;

use crate::registry::CandidateFunction;

/// Yield the declarations that belong to `group`, in source order.
///
/// The iterator is lazy and `Clone`, so a caller can restart the pass by cloning it or calling again.
pub fn match_group<'a>(
    group: &'a str,
    decls: &'a [FunctionDecl],
) -> impl Iterator<Item = CandidateFunction<'a>> + Clone + 'a {
    decls.iter().filter_map(move |decl| candidate(group, decl))
}

fn candidate<'a>(group: &str, decl: &'a FunctionDecl) -> Option<CandidateFunction<'a>> {
    if !decl.returns_void() || !decl.params.is_nullary() {
        return None;
    }

    let short_name = naming::short_name(group, &decl.name)?;
    Some(CandidateFunction {
        declaration: &decl.header,
        symbol: &decl.name,
        short_name,
        line: decl.line,
    })
}
