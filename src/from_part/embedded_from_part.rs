use indexmap::IndexMap;

use crate::from_part::{alias_after_table, collapse_whitespace};

/// FROM segment of an object-query template.
///
/// Records the root entity alias and every relationship path joined with
/// `join`/`fetch`, keyed by the last path segment (`join s.parent p` records
/// `parent -> p`).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EmbeddedFromPart {
    value: String,
    main_table_alias: Option<String>,
    tables: IndexMap<String, Option<String>>,
}

impl EmbeddedFromPart {
    pub fn new(value: &str) -> Self {
        let value = value.trim();
        let normalized = collapse_whitespace(value);
        let parts: Vec<&str> = normalized.split(' ').filter(|p| !p.is_empty()).collect();

        let mut from_part = Self {
            value: value.to_string(),
            ..Default::default()
        };

        for (idx, part) in parts.iter().enumerate() {
            if part.eq_ignore_ascii_case("from") {
                let Some(table) = parts.get(idx + 1) else {
                    continue;
                };
                let alias = alias_after_table(&parts, idx + 1);
                if from_part.main_table_alias.is_none() {
                    from_part.main_table_alias = alias.clone();
                }
                from_part
                    .tables
                    .insert(table.trim_end_matches(',').to_string(), alias);
            } else if part.contains('.') && Self::follows_join(&parts, idx) {
                let path = part.trim_end_matches(',');
                let table = path.rsplit('.').next().unwrap_or(path);
                from_part
                    .tables
                    .insert(table.to_string(), alias_after_table(&parts, idx));
            }
        }

        from_part
    }

    fn follows_join(parts: &[&str], idx: usize) -> bool {
        idx > 0
            && (parts[idx - 1].eq_ignore_ascii_case("join")
                || parts[idx - 1].eq_ignore_ascii_case("fetch"))
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn main_table_alias(&self) -> Option<&str> {
        self.main_table_alias.as_deref()
    }

    pub fn tables(&self) -> &IndexMap<String, Option<String>> {
        &self.tables
    }

    pub fn alias_by_table(&self, table: &str) -> Option<&str> {
        self.tables.get(table).and_then(|alias| alias.as_deref())
    }

    pub fn is_known_alias(&self, name: &str) -> bool {
        self.tables
            .values()
            .any(|alias| alias.as_deref() == Some(name))
    }

    /// Rewrites a dotted path so it starts at the alias of the last joined
    /// segment: with `join s.subEntity se`, `subEntity.name` becomes `se.name`.
    /// Paths without a joined segment come back unchanged.
    pub fn resolve_field_chain(&self, chain: &str) -> String {
        let segments: Vec<&str> = chain.split('.').collect();
        if segments.len() < 2 {
            return chain.to_string();
        }

        let last_joined = segments
            .iter()
            .enumerate()
            .filter_map(|(idx, segment)| self.alias_by_table(segment).map(|alias| (idx, alias)))
            .last();

        match last_joined {
            Some((idx, alias)) if idx + 1 < segments.len() => {
                format!("{}.{}", alias, segments[idx + 1..].join("."))
            }
            Some((_, alias)) => alias.to_string(),
            None => chain.to_string(),
        }
    }

    /// Fully qualified form of a request field: already-aliased paths stay as they
    /// are, joined paths resolve through their alias, anything else is rooted at
    /// the main entity alias.
    pub fn qualify_field(&self, field: &str) -> String {
        if let Some((head, _)) = field.split_once('.') {
            if self.is_known_alias(head) {
                return field.to_string();
            }
        }

        let resolved = self.resolve_field_chain(field);
        if !resolved.eq_ignore_ascii_case(field) {
            return resolved;
        }

        match &self.main_table_alias {
            Some(alias) => format!("{}.{}", alias, field),
            None => field.to_string(),
        }
    }
}
