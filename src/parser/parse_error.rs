use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub text: String,
    pub position: usize,
}

impl ParseError {
    pub fn new(message: &str, position: usize, text: &str) -> Self {
        Self {
            message: message.to_string(),
            text: text.to_string(),
            position,
        }
    }

    pub fn err<T>(self) -> Result<T, ParseError> {
        Err(self)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ParseError: {}\n  at token [{}] -> '{}'",
            self.message, self.position, self.text
        )
    }
}

impl std::error::Error for ParseError {}
