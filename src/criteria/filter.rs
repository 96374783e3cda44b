use serde::{Deserialize, Serialize};

use crate::{
    criteria::{FieldType, FilterOperation},
    QueryError,
};

/// A single `field <operation> value` restriction. The value stays raw text
/// until parameters are bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    pub field_type: FieldType,
    pub operation: FilterOperation,
    #[serde(default)]
    pub value: String,
}

impl Filter {
    pub fn new(
        field: &str,
        field_type: FieldType,
        operation: &str,
        value: &str,
    ) -> Result<Self, QueryError> {
        Ok(Self::with_operation(
            field,
            field_type,
            FilterOperation::from_token(operation)?,
            value,
        ))
    }

    pub fn with_operation(
        field: &str,
        field_type: FieldType,
        operation: FilterOperation,
        value: &str,
    ) -> Self {
        Self {
            field: field.to_string(),
            field_type,
            operation,
            value: value.to_string(),
        }
    }

    /// Blank filters still produce a clause but bind no parameter.
    pub fn has_value(&self) -> bool {
        !self.value.trim().is_empty()
    }
}
