use once_cell::sync::Lazy;
use regex::Regex;

pub mod embedded_from_part;
pub use embedded_from_part::*;

pub mod native_from_part;
pub use native_from_part::*;

pub mod sub_select;
pub use sub_select::*;

pub mod dialect_from_part;
pub use dialect_from_part::*;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

pub(crate) fn collapse_whitespace(value: &str) -> String {
    WHITESPACE_RE.replace_all(value, " ").into_owned()
}

// Words that can follow a table reference but are never its alias.
const RESERVED: [&str; 17] = [
    "as", "join", "inner", "left", "right", "outer", "full", "cross", "fetch", "on", "with",
    "where", "group", "order", "union", "natural", "from",
];

pub(crate) fn is_reserved(word: &str) -> bool {
    RESERVED.iter().any(|reserved| reserved.eq_ignore_ascii_case(word))
}

/// Alias declared at `parts[idx]`, skipping an optional `as`.
pub(crate) fn alias_at(parts: &[&str], idx: usize) -> Option<String> {
    let mut candidate = *parts.get(idx)?;
    if candidate.eq_ignore_ascii_case("as") {
        candidate = *parts.get(idx + 1)?;
    }

    let alias = candidate.trim_end_matches(',');
    if alias.is_empty() || is_reserved(alias) || alias.contains(['(', ')', '=']) {
        return None;
    }

    Some(alias.to_string())
}

/// Alias following a table token. A table written as `Table,` has no alias.
pub(crate) fn alias_after_table(parts: &[&str], table_idx: usize) -> Option<String> {
    match parts.get(table_idx) {
        Some(table) if table.ends_with(',') => None,
        Some(_) => alias_at(parts, table_idx + 1),
        None => None,
    }
}
