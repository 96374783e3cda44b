use crate::parser::{QueryPartType, Tokenizer};

/// Position of the segmenting scan over a token list.
///
/// `next` is the index of the token the next `advance` will consume, so the
/// current token is `next - 1`. Each step returns a new cursor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseCursor {
    pub next: usize,
    pub last_boundary: usize,
    pub bracket_level: i32,
    pub in_quotes: bool,
    pub part: QueryPartType,
}

impl ParseCursor {
    /// Consume the next token, tracking bracket depth and quoted literals.
    /// `None` when exhausted.
    pub fn advance(self, tokens: &[String]) -> Option<Self> {
        let token = tokens.get(self.next)?;

        Some(Self {
            next: self.next + 1,
            bracket_level: self.bracket_level + Tokenizer::bracket_delta(self.in_quotes, token),
            in_quotes: Tokenizer::is_in_quotes(self.in_quotes, token),
            ..self
        })
    }

    pub fn current<'a>(&self, tokens: &'a [String]) -> Option<&'a str> {
        self.next
            .checked_sub(1)
            .and_then(|idx| tokens.get(idx))
            .map(String::as_str)
    }

    pub fn is_top_level(&self) -> bool {
        self.bracket_level == 0
    }

    /// The current token opens `part_type`: it sits outside any bracket or literal,
    /// equals the part keyword case-insensitively and the part may follow the open one.
    pub fn is_boundary(&self, tokens: &[String], part_type: QueryPartType) -> bool {
        match self.current(tokens) {
            Some(token) => {
                self.is_top_level()
                    && !self.in_quotes
                    && token.eq_ignore_ascii_case(part_type.keyword())
                    && part_type.can_follow(self.part)
            }
            None => false,
        }
    }

    /// Close the open segment just before the current token and open `part_type`.
    /// Returns the closed segment's text and the moved cursor.
    pub fn change_part(self, tokens: &[String], part_type: QueryPartType) -> (String, Self) {
        let boundary = self.next.saturating_sub(1);
        let finished = tokens[self.last_boundary..boundary].join(" ");

        (
            finished,
            Self {
                last_boundary: boundary,
                part: part_type,
                ..self
            },
        )
    }

    /// Text of the segment still open at the end of input.
    pub fn remaining(&self, tokens: &[String]) -> String {
        tokens[self.last_boundary.min(tokens.len())..].join(" ")
    }
}
