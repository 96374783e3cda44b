use std::fmt;

use serde::{Deserialize, Serialize};

/// Clause a generator contributes to the final query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClauseKind {
    Search,
    Filter,
    Order,
}

impl fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClauseKind::Search => write!(f, "search"),
            ClauseKind::Filter => write!(f, "filter"),
            ClauseKind::Order => write!(f, "order"),
        }
    }
}
