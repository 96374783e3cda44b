use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared type of a filtered field. Drives both the clause template and the
/// conversion of the raw request value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldType {
    String,
    Integer,
    Bool,
    Date,
    Enum,
}

impl FieldType {
    /// Compared case-insensitively by the generated clauses.
    pub fn is_textual(&self) -> bool {
        matches!(self, FieldType::String | FieldType::Enum)
    }

    pub fn is_ordered(&self) -> bool {
        matches!(self, FieldType::Integer | FieldType::Date)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::String => "STRING",
            FieldType::Integer => "INTEGER",
            FieldType::Bool => "BOOL",
            FieldType::Date => "DATE",
            FieldType::Enum => "ENUM",
        };
        write!(f, "{}", name)
    }
}
