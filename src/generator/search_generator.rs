use crate::{
    generator::{templates, ClauseGenerator, ClauseKind, ClauseRequest},
    Dialect, QueryError,
};

/// OR-combines the search comparison over the template's search fields.
pub struct SearchClauseGenerator {
    dialect: Dialect,
}

impl SearchClauseGenerator {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }
}

impl ClauseGenerator for SearchClauseGenerator {
    fn kind(&self) -> ClauseKind {
        ClauseKind::Search
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn generate(&self, request: &ClauseRequest) -> Result<String, QueryError> {
        let parsed = request.parsed;
        let Some(search) = request.criteria.active_search() else {
            return Ok(String::new());
        };
        if !parsed.has_search_fields() {
            return Ok(String::new());
        }

        let comparison = templates::search_comparison(&search.value, search.exact);
        let clauses: Vec<String> = parsed
            .search_fields
            .iter()
            .map(|field| templates::simple_search(&parsed.qualify_field(field), &comparison))
            .chain(
                parsed
                    .advanced_search_fields
                    .iter()
                    .map(|template| templates::advanced_search(template, &comparison)),
            )
            .collect();

        Ok(format!("({})", clauses.join(" or ")))
    }
}
