use crate::{
    from_part::{EmbeddedFromPart, NativeFromPart},
    Dialect, QueryError,
};

/// FROM segment resolved according to the template's dialect.
#[derive(Debug, Clone, PartialEq)]
pub enum FromPart {
    Embedded(EmbeddedFromPart),
    Native(NativeFromPart),
}

impl FromPart {
    pub fn parse(dialect: Dialect, value: &str) -> Result<Self, QueryError> {
        match dialect {
            Dialect::Embedded => Ok(FromPart::Embedded(EmbeddedFromPart::new(value))),
            Dialect::Native => Ok(FromPart::Native(NativeFromPart::new(value)?)),
        }
    }

    pub fn dialect(&self) -> Dialect {
        match self {
            FromPart::Embedded(_) => Dialect::Embedded,
            FromPart::Native(_) => Dialect::Native,
        }
    }

    /// Trimmed source text of the segment, `from` keyword included.
    pub fn value(&self) -> &str {
        match self {
            FromPart::Embedded(part) => part.value(),
            FromPart::Native(part) => part.value(),
        }
    }

    /// Expression a request field refers to inside this FROM segment.
    pub fn qualify_field(&self, field: &str) -> String {
        match self {
            FromPart::Embedded(part) => part.qualify_field(field),
            FromPart::Native(part) => part.resolve_field(field),
        }
    }
}
