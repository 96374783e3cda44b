use crate::{
    generator::{ClauseGenerator, ClauseKind, ClauseRequest},
    Dialect, QueryError,
};

/// Comma-separated sort list; the `order by` keyword is added by the caller.
pub struct OrderClauseGenerator {
    dialect: Dialect,
}

impl OrderClauseGenerator {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }
}

impl ClauseGenerator for OrderClauseGenerator {
    fn kind(&self) -> ClauseKind {
        ClauseKind::Order
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn generate(&self, request: &ClauseRequest) -> Result<String, QueryError> {
        let sorts: Vec<String> = request
            .criteria
            .sorts
            .iter()
            .map(|sort| {
                format!(
                    "{} {}",
                    request.parsed.qualify_field(&sort.field),
                    sort.direction().keyword()
                )
            })
            .collect();

        Ok(sorts.join(", "))
    }
}
