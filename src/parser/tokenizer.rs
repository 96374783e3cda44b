use crate::parser::ParseError;

/// Splits query text into space-separated tokens while keeping quoted literals intact.
pub struct Tokenizer;

impl Tokenizer {
    /// Tokens are trimmed and blank tokens dropped, except inside a single-quoted
    /// literal where every piece is kept so the literal's spacing survives a rejoin.
    pub fn tokenize(text: &str) -> Result<Vec<String>, ParseError> {
        let normalized = text.replace(['\r', '\n', '\t'], " ");

        let mut tokens = Vec::new();
        let mut in_quotes = false;
        for part in normalized.split(' ') {
            in_quotes = Self::is_in_quotes(in_quotes, part);
            if !part.trim().is_empty() || in_quotes {
                tokens.push(part.trim().to_string());
            }
        }

        if in_quotes {
            let last = tokens.last().cloned().unwrap_or_default();
            return ParseError::new("Unclosed quoted literal", tokens.len(), &last).err();
        }

        Ok(tokens)
    }

    /// Net change in bracket depth across `token`. Brackets inside a single-quoted
    /// literal are not counted; `in_quotes` is the quote state before the token.
    pub fn bracket_delta(in_quotes: bool, token: &str) -> i32 {
        let mut in_quotes = in_quotes;
        let mut delta = 0;
        for c in token.chars() {
            match c {
                '\'' => in_quotes = !in_quotes,
                '(' if !in_quotes => delta += 1,
                ')' if !in_quotes => delta -= 1,
                _ => {}
            }
        }
        delta
    }

    /// A token with an odd number of `'` flips the quote state.
    pub fn toggles_quotes(token: &str) -> bool {
        token.matches('\'').count() % 2 == 1
    }

    pub fn is_in_quotes(in_quotes: bool, token: &str) -> bool {
        in_quotes != Self::toggles_quotes(token)
    }
}
