use serde::{Deserialize, Serialize};

/// Free-text search term applied to the template's search fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Search {
    pub value: String,
    /// Whole-value match instead of substring match.
    #[serde(default)]
    pub exact: bool,
}

impl Search {
    pub fn new(value: &str, exact: bool) -> Self {
        Self {
            value: value.to_string(),
            exact,
        }
    }

    pub fn partial(value: &str) -> Self {
        Self::new(value, false)
    }

    pub fn exact(value: &str) -> Self {
        Self::new(value, true)
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}
