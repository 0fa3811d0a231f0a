//! `${key}` placeholder substitution for the driver templates.
//!
//! Substitution is a single left-to-right pass: replacement values are copied verbatim and never rescanned, so
//! library text containing `${...}` passes through untouched. Unknown keys are left in place.

/// Driver layout, embedded at compile time.
pub const DRIVER_TEMPLATE: &str = include_str!("templates/clay_main.c.in");

/// One entry of the suite table.
pub const SUITE_TEMPLATE: &str = include_str!("templates/suite.c.in");

/// Replace every `${key}` in `template` with its value from `values`.
pub fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + values.iter().map(|(_, v)| v.len()).sum::<usize>());
    let mut rest = template;

    while let Some(open) = rest.find("${") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let key = &after[..close];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + 2 + close + 1]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}
