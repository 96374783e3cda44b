use indexmap::IndexSet;

use crate::{parser::Tokenizer, QueryError};

/// Column list of a parenthesized sub-select used as a FROM source.
pub struct SubSelect;

impl SubSelect {
    /// `parts` spans the sub-select from its opening `(` token to the token
    /// holding the matching `)`. Each top-level projection contributes its last
    /// word with any qualifier dropped: `t.id` gives `id`, `sum(t.val) as summ`
    /// gives `summ`.
    pub fn columns(parts: &[&str]) -> Result<IndexSet<String>, QueryError> {
        let projection = Self::projection(parts)?;

        let mut columns = IndexSet::new();
        let mut level = 0;
        let mut in_quotes = false;
        for piece in projection.split(',') {
            level += Tokenizer::bracket_delta(in_quotes, piece);
            in_quotes = Tokenizer::is_in_quotes(in_quotes, piece);
            if level != 0 || in_quotes {
                continue;
            }

            let Some(last) = piece.split_whitespace().last() else {
                continue;
            };
            let last = last.trim_matches(|c: char| c == '(' || c == ')');
            let column = last.rsplit('.').next().unwrap_or(last);
            if !column.is_empty() {
                columns.insert(column.to_string());
            }
        }

        if columns.is_empty() {
            return Err(QueryError::SubQueryColumns(parts.join(" ")));
        }

        Ok(columns)
    }

    // Text between the sub-select's `select` and its top-level `from`.
    fn projection(parts: &[&str]) -> Result<String, QueryError> {
        let mut tokens: Vec<&str> = parts.to_vec();
        if let Some(first) = tokens.first_mut() {
            let token = *first;
            *first = token.strip_prefix('(').unwrap_or(token);
        }
        if let Some(last) = tokens.last_mut() {
            let token = *last;
            if let Some(idx) = token.rfind(')') {
                *last = &token[..idx];
            }
        }

        let select_idx = tokens
            .iter()
            .position(|token| token.eq_ignore_ascii_case("select"))
            .ok_or_else(|| QueryError::SubQueryColumns(parts.join(" ")))?;

        let mut level = 0;
        let mut in_quotes = false;
        for (idx, token) in tokens.iter().enumerate().skip(select_idx + 1) {
            if level == 0 && !in_quotes && token.eq_ignore_ascii_case("from") {
                return Ok(tokens[select_idx + 1..idx].join(" "));
            }
            level += Tokenizer::bracket_delta(in_quotes, token);
            in_quotes = Tokenizer::is_in_quotes(in_quotes, token);
        }

        Err(QueryError::SubQueryColumns(parts.join(" ")))
    }
}
