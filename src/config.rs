use serde::{Deserialize, Serialize};

/// Settings shared by the clause generators and the parameter binder.
///
/// - `list_delimiter` separates the values of IN and BETWEEN filters.
/// - `param_namespace` prefixes every generated parameter name so it cannot
///   collide with caller-supplied parameters. An empty namespace disables the prefix.
/// - `date_format` is the chrono format used to parse DATE filter values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Separator for list-valued filters
    pub list_delimiter: String,
    /// Prefix for filter-derived parameter names
    pub param_namespace: String,
    /// Format of DATE filter values
    pub date_format: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            list_delimiter: ",".to_string(),
            param_namespace: "filter".to_string(),
            date_format: "%Y-%m-%dT%H:%M:%S".to_string(),
        }
    }
}

impl QueryConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `delimiter` to split IN and BETWEEN filter values.
    pub fn with_list_delimiter(mut self, delimiter: &str) -> Self {
        self.list_delimiter = delimiter.to_string();
        self
    }

    /// Prefix generated parameter names with `namespace`.
    pub fn with_param_namespace(mut self, namespace: &str) -> Self {
        self.param_namespace = namespace.to_string();
        self
    }

    /// Convenience: generated parameter names are the bare camel-cased field path.
    pub fn without_param_namespace(self) -> Self {
        self.with_param_namespace("")
    }

    /// Parse DATE filter values with `format`.
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }
}
