use crate::{
    binder::ParamName,
    criteria::{FieldType, Filter, FilterOperation},
    generator::{templates, ClauseGenerator, ClauseKind, ClauseRequest},
    Dialect, QueryError,
};

/// AND-combines one parameterized predicate per filter.
pub struct FilterClauseGenerator {
    dialect: Dialect,
}

impl FilterClauseGenerator {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Operation/type pairs with a clause template.
    pub fn supports(operation: FilterOperation, field_type: FieldType) -> bool {
        match operation {
            FilterOperation::Eq | FilterOperation::Ne | FilterOperation::In => true,
            FilterOperation::Like => field_type == FieldType::String,
            FilterOperation::Between | FilterOperation::Lt | FilterOperation::Gt => {
                field_type.is_ordered()
            }
        }
    }

    /// Predicate for `filter` over the already-qualified `field`, bound to `param`.
    pub fn predicate(filter: &Filter, field: &str, param: &str) -> Result<String, QueryError> {
        if !Self::supports(filter.operation, filter.field_type) {
            return Err(QueryError::UnsupportedFilterOperation {
                field_type: filter.field_type,
                operation: filter.operation,
            });
        }

        let textual = filter.field_type.is_textual();
        let predicate = match filter.operation {
            FilterOperation::Eq if textual => templates::lowered_eq(field, param),
            FilterOperation::Eq => templates::eq(field, param),
            FilterOperation::Ne if textual => templates::lowered_ne(field, param),
            FilterOperation::Ne => templates::ne(field, param),
            FilterOperation::Like => templates::lowered_like(field, param),
            FilterOperation::In => templates::in_list(field, param),
            FilterOperation::Between => templates::between(field, param),
            FilterOperation::Lt => templates::lt(field, param),
            FilterOperation::Gt => templates::gt(field, param),
        };

        Ok(predicate)
    }
}

impl ClauseGenerator for FilterClauseGenerator {
    fn kind(&self) -> ClauseKind {
        ClauseKind::Filter
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn generate(&self, request: &ClauseRequest) -> Result<String, QueryError> {
        let filters = &request.criteria.filters;
        if filters.is_empty() {
            return Ok(String::new());
        }

        let predicates = filters
            .iter()
            .map(|filter| {
                let field = request.parsed.qualify_field(&filter.field);
                let param = ParamName::of(&filter.field, request.config);
                Self::predicate(filter, &field, &param)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(format!("({})", predicates.join(" and ")))
    }
}
