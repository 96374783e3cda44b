use tracing::trace;

use crate::parser::{ParseCursor, ParseError, QueryPartType, Tokenizer};

/// Splits a SELECT template into its top-level segments.
#[derive(Debug, Clone)]
pub struct QueryParser {
    text: String,
    tokens: Vec<String>,
}

impl QueryParser {
    pub fn new(text: &str) -> Result<Self, ParseError> {
        Ok(Self {
            text: text.to_string(),
            tokens: Tokenizer::tokenize(text)?,
        })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Segments in source order. Each segment keeps its opening keyword, so the
    /// WHERE segment reads `where ...` and the GROUP segment `group by ...`.
    /// The SELECT segment is empty when the template starts at `from`.
    pub fn segments(&self) -> Result<Vec<(QueryPartType, String)>, ParseError> {
        let tokens = &self.tokens;
        let mut segments = Vec::new();
        let mut cursor = ParseCursor::default();

        while let Some(next) = cursor.advance(tokens) {
            cursor = next;

            let boundary = QueryPartType::BOUNDARIES
                .iter()
                .copied()
                .find(|part_type| cursor.is_boundary(tokens, *part_type));

            if let Some(part_type) = boundary {
                let (text, moved) = cursor.change_part(tokens, part_type);
                trace!(target: "criteria_query::parser", "segment {} -> '{}'", cursor.part, text);
                segments.push((cursor.part, text));
                cursor = moved;
            }
        }

        if !cursor.is_top_level() {
            return ParseError::new(
                &format!("Unbalanced brackets (depth {} at end of query)", cursor.bracket_level),
                tokens.len(),
                &self.text,
            )
            .err();
        }

        let text = cursor.remaining(tokens);
        trace!(target: "criteria_query::parser", "segment {} -> '{}'", cursor.part, text);
        segments.push((cursor.part, text));

        Ok(segments)
    }
}
