use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    criteria::{Criteria, FieldType, Filter, Search, Sort},
    QueryError,
};

/// Knows the declared type of each filterable field of a listing.
pub trait FieldTypeResolver {
    fn field_type(&self, field: &str) -> Option<FieldType>;
}

impl FieldTypeResolver for IndexMap<String, FieldType> {
    fn field_type(&self, field: &str) -> Option<FieldType> {
        self.get(field).copied()
    }
}

impl FieldTypeResolver for HashMap<String, FieldType> {
    fn field_type(&self, field: &str) -> Option<FieldType> {
        self.get(field).copied()
    }
}

/// One filter as sent by a client: the operator is its request token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRequest {
    pub field: String,
    pub operator: String,
    #[serde(default)]
    pub value: String,
}

/// Listing request payload.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListRequest {
    pub page: u32,
    pub size: u32,
    pub filters: Vec<FilterRequest>,
    pub search: Option<Search>,
    pub sorts: Vec<Sort>,
}

impl Criteria {
    /// Build criteria from a request, typing every filter through `resolver`.
    pub fn from_request(
        request: &ListRequest,
        resolver: &dyn FieldTypeResolver,
    ) -> Result<Self, QueryError> {
        let filters = request
            .filters
            .iter()
            .map(|filter| {
                let field_type = resolver
                    .field_type(&filter.field)
                    .ok_or_else(|| QueryError::UnknownFilterField(filter.field.clone()))?;
                Filter::new(&filter.field, field_type, &filter.operator, &filter.value)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            page: request.page,
            size: request.size,
            filters,
            search: request.search.clone(),
            sorts: request.sorts.clone(),
        })
    }
}
