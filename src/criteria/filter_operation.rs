use std::fmt;

use serde::{Deserialize, Serialize};

use crate::QueryError;

/// Comparison requested by a filter, addressed in requests by its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FilterOperation {
    Eq,
    Ne,
    Like,
    In,
    Between,
    Lt,
    Gt,
}

impl FilterOperation {
    pub const ALL: [FilterOperation; 7] = [
        FilterOperation::Eq,
        FilterOperation::Ne,
        FilterOperation::Like,
        FilterOperation::In,
        FilterOperation::Between,
        FilterOperation::Lt,
        FilterOperation::Gt,
    ];

    /// Canonical request token.
    pub fn token(&self) -> &'static str {
        match self {
            FilterOperation::Eq => "=",
            FilterOperation::Ne => "!=",
            FilterOperation::Like => "~",
            FilterOperation::In => "in",
            FilterOperation::Between => "between",
            FilterOperation::Lt => "<",
            FilterOperation::Gt => ">",
        }
    }

    pub fn from_token(token: &str) -> Result<Self, QueryError> {
        let token = token.trim();
        if token == "<>" {
            return Ok(FilterOperation::Ne);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|operation| operation.token().eq_ignore_ascii_case(token))
            .ok_or_else(|| QueryError::UnknownFilterOperation(token.to_string()))
    }
}

impl TryFrom<&str> for FilterOperation {
    type Error = QueryError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        Self::from_token(token)
    }
}

impl fmt::Display for FilterOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterOperation::Eq => "EQ",
            FilterOperation::Ne => "NE",
            FilterOperation::Like => "LIKE",
            FilterOperation::In => "IN",
            FilterOperation::Between => "BETWEEN",
            FilterOperation::Lt => "LT",
            FilterOperation::Gt => "GT",
        };
        write!(f, "{}", name)
    }
}
