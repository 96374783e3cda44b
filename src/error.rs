use thiserror::Error;

use crate::{
    criteria::{FieldType, FilterOperation},
    generator::ClauseKind,
    parser::ParseError,
    Dialect,
};

/// Every failure the engine reports. None of them is retried or recovered from:
/// a request either gets a complete query or one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Unknown filter operation '{0}'")]
    UnknownFilterOperation(String),

    #[error("Field type {field_type} is not supported by filter operation {operation}")]
    UnsupportedFilterOperation {
        field_type: FieldType,
        operation: FilterOperation,
    },

    #[error("BETWEEN filter on '{field}' must contain exactly 2 values separated by '{delimiter}'")]
    BetweenRequiresTwoValues { field: String, delimiter: String },

    #[error("Field '{field}' of type {field_type} cannot be filtered with BETWEEN")]
    BetweenUnsupportedType { field: String, field_type: FieldType },

    #[error("Invalid number '{value}' for filter on '{field}'")]
    InvalidNumber { field: String, value: String },

    #[error("Cannot parse '{value}' for filter on '{field}' as a date with format '{format}'")]
    InvalidDate {
        field: String,
        value: String,
        format: String,
    },

    #[error("No alias found in query for column '{0}'")]
    AliasNotFound(String),

    #[error("Cannot determine the column list of sub-select '{0}'")]
    SubQueryColumns(String),

    #[error("No {kind} clause generator registered for the {dialect} dialect")]
    GeneratorNotFound { kind: ClauseKind, dialect: Dialect },

    #[error("Grouped embedded query needs a native translator to build its count query")]
    TranslatorMissing,

    #[error("Native translation failed: {0}")]
    Translation(String),

    #[error("Field '{0}' is not known to the field type resolver")]
    UnknownFilterField(String),
}
