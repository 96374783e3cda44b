use tracing::debug;

use crate::{
    from_part::FromPart,
    parser::{ParseError, QueryParser, QueryPartType},
    Dialect, QueryError,
};

/// A SELECT template split into its clauses, plus the fields free-text search
/// applies to. Immutable once built, so one instance can serve any number of
/// requests.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    /// Projection including the `select` keyword; empty for `from ...` templates.
    pub select: String,
    pub from_part: FromPart,
    /// Segments keep their keyword: `where ...`, `group by ...`, `order by ...`.
    pub where_part: Option<String>,
    pub group: Option<String>,
    pub order: Option<String>,
    /// Request-level field paths matched with `lower(field) <comparison>`.
    pub search_fields: Vec<String>,
    /// Raw expressions carrying a `{0}` placeholder for the comparison.
    pub advanced_search_fields: Vec<String>,
}

impl ParsedQuery {
    pub fn parse(text: &str, dialect: Dialect) -> Result<Self, QueryError> {
        Self::parse_with_search(text, dialect, &[], &[])
    }

    pub fn parse_with_search(
        text: &str,
        dialect: Dialect,
        search_fields: &[&str],
        advanced_search_fields: &[&str],
    ) -> Result<Self, QueryError> {
        let parser = QueryParser::new(text)?;

        let mut select = String::new();
        let mut from_part = None;
        let mut where_part = None;
        let mut group = None;
        let mut order = None;
        for (part_type, segment) in parser.segments()? {
            match part_type {
                QueryPartType::Select => select = segment,
                QueryPartType::From => from_part = Some(FromPart::parse(dialect, &segment)?),
                QueryPartType::Where => where_part = Some(segment),
                QueryPartType::Group => group = Some(segment),
                QueryPartType::Order => order = Some(segment),
            }
        }

        let Some(from_part) = from_part else {
            return Err(ParseError::new("Query has no FROM part", parser.tokens().len(), text).into());
        };

        debug!(
            target: "criteria_query::parser",
            "parsed {} query: from='{}' where={} group={} order={}",
            dialect,
            from_part.value(),
            where_part.is_some(),
            group.is_some(),
            order.is_some()
        );

        Ok(Self {
            select,
            from_part,
            where_part,
            group,
            order,
            search_fields: search_fields.iter().map(|field| field.to_string()).collect(),
            advanced_search_fields: advanced_search_fields
                .iter()
                .map(|field| field.to_string())
                .collect(),
        })
    }

    pub fn dialect(&self) -> Dialect {
        self.from_part.dialect()
    }

    pub fn has_search_fields(&self) -> bool {
        !self.search_fields.is_empty() || !self.advanced_search_fields.is_empty()
    }

    pub fn qualify_field(&self, field: &str) -> String {
        self.from_part.qualify_field(field)
    }
}
