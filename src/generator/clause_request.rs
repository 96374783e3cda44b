use crate::{criteria::Criteria, parser::ParsedQuery, QueryConfig};

/// Everything a clause generator reads while rendering.
#[derive(Debug, Clone, Copy)]
pub struct ClauseRequest<'a> {
    pub criteria: &'a Criteria,
    pub parsed: &'a ParsedQuery,
    pub config: &'a QueryConfig,
}

impl<'a> ClauseRequest<'a> {
    pub fn new(criteria: &'a Criteria, parsed: &'a ParsedQuery, config: &'a QueryConfig) -> Self {
        Self {
            criteria,
            parsed,
            config,
        }
    }
}
