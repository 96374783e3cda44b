use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use crate::{
    from_part::{alias_after_table, alias_at, collapse_whitespace, SubSelect},
    parser::Tokenizer,
    QueryError,
};

/// FROM segment of a native SQL template.
///
/// Tracks `table -> alias` for plain tables and `alias -> columns` for
/// parenthesized sub-selects, both only at the top bracket level.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NativeFromPart {
    value: String,
    tables: IndexMap<String, String>,
    alias_columns: IndexMap<String, IndexSet<String>>,
}

impl NativeFromPart {
    pub fn new(value: &str) -> Result<Self, QueryError> {
        let value = value.trim();
        let normalized = collapse_whitespace(value);
        let parts: Vec<&str> = normalized.split(' ').filter(|p| !p.is_empty()).collect();

        let mut from_part = Self {
            value: value.to_string(),
            ..Default::default()
        };

        let mut level = 0;
        let mut in_quotes = false;
        let mut sub_select_start: Option<usize> = None;
        for (idx, part) in parts.iter().enumerate() {
            let outer = level == 0 && !in_quotes;
            level += Tokenizer::bracket_delta(in_quotes, part);
            in_quotes = Tokenizer::is_in_quotes(in_quotes, part);

            if outer {
                if part.eq_ignore_ascii_case("from") || part.eq_ignore_ascii_case("join") {
                    from_part.register_table(&parts, idx + 1);
                }
                if level > 0 && Self::opens_sub_select(&parts, idx) && Self::is_source(&parts, idx) {
                    sub_select_start = Some(idx);
                }
            } else if level == 0 {
                if let Some(start) = sub_select_start.take() {
                    let columns = SubSelect::columns(&parts[start..=idx])?;
                    match alias_at(&parts, idx + 1) {
                        Some(alias) => {
                            trace!(target: "criteria_query::parser", "sub-select {} -> {:?}", alias, columns);
                            from_part.alias_columns.insert(alias, columns);
                        }
                        None => return Err(QueryError::SubQueryColumns(parts[start..=idx].join(" "))),
                    }
                }
            }
        }

        Ok(from_part)
    }

    fn register_table(&mut self, parts: &[&str], table_idx: usize) {
        let Some(table) = parts.get(table_idx) else {
            return;
        };
        if table.contains('(') {
            return;
        }
        if let Some(alias) = alias_after_table(parts, table_idx) {
            self.tables
                .insert(table.trim_end_matches(',').to_string(), alias);
        }
    }

    // Sub-selects in join conditions (`in (select ...)`, `exists (select ...)`) are
    // not sources.
    fn is_source(parts: &[&str], idx: usize) -> bool {
        idx.checked_sub(1)
            .and_then(|prev| parts.get(prev))
            .is_some_and(|prev| {
                prev.eq_ignore_ascii_case("from")
                    || prev.eq_ignore_ascii_case("join")
                    || prev.ends_with(',')
            })
    }

    // `(select ...` or a bare `(` followed by `select`.
    fn opens_sub_select(parts: &[&str], idx: usize) -> bool {
        let inner = parts[idx].trim_start_matches('(');
        if !parts[idx].starts_with('(') {
            return false;
        }
        if inner.is_empty() {
            return parts
                .get(idx + 1)
                .is_some_and(|next| next.eq_ignore_ascii_case("select"));
        }
        inner.eq_ignore_ascii_case("select")
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn tables(&self) -> &IndexMap<String, String> {
        &self.tables
    }

    pub fn alias_columns(&self) -> &IndexMap<String, IndexSet<String>> {
        &self.alias_columns
    }

    pub fn alias_by_table(&self, table: &str) -> Option<&str> {
        self.tables.get(table).map(String::as_str)
    }

    /// First sub-select alias, in declaration order, exposing `column`.
    pub fn alias_by_column(&self, column: &str) -> Result<&str, QueryError> {
        self.alias_columns
            .iter()
            .find(|(_, columns)| columns.contains(column))
            .map(|(alias, _)| alias.as_str())
            .ok_or_else(|| QueryError::AliasNotFound(column.to_string()))
    }

    /// Dotted fields are used verbatim, bare fields exposed by a sub-select get
    /// its alias, anything else is left unqualified.
    pub fn resolve_field(&self, field: &str) -> String {
        if field.contains('.') {
            return field.to_string();
        }

        match self.alias_by_column(field) {
            Ok(alias) => format!("{}.{}", alias, field),
            Err(_) => field.to_string(),
        }
    }
}
