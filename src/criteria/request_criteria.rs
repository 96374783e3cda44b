use serde::{Deserialize, Serialize};

use crate::criteria::{Filter, Search, Sort};

/// Request-driven refinements applied to a parsed template.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Criteria {
    /// Zero-based page number.
    pub page: u32,
    /// Rows per page.
    pub size: u32,
    pub filters: Vec<Filter>,
    pub search: Option<Search>,
    pub sorts: Vec<Sort>,
}

impl Criteria {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            ..Default::default()
        }
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_search(mut self, search: Search) -> Self {
        self.search = Some(search);
        self
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sorts.push(sort);
        self
    }

    pub fn with_sorts(mut self, sorts: Vec<Sort>) -> Self {
        self.sorts = sorts;
        self
    }

    /// Search term worth generating a clause for.
    pub fn active_search(&self) -> Option<&Search> {
        self.search.as_ref().filter(|search| !search.is_blank())
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    pub fn limit(&self) -> u32 {
        self.size
    }
}
