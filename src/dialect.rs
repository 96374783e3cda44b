use std::fmt;

use serde::{Deserialize, Serialize};

/// Query language a template is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Object-query language: joins walk relationship paths (`join s.parent p`).
    Embedded,
    /// Plain SQL understood by the backing engine.
    Native,
}

impl Dialect {
    pub fn is_native(&self) -> bool {
        matches!(self, Dialect::Native)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Embedded => write!(f, "embedded"),
            Dialect::Native => write!(f, "native"),
        }
    }
}
