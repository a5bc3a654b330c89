// Token: a whitespace-delimited piece of input text

use crate::enums::TokenType;

/// A token found in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The type of this token.
    pub token_type: TokenType,
    /// The token text.
    pub text: String,
    /// Position of the token in the text, in characters.
    pub pos: usize,
}

impl Token {
    pub fn new(token_type: TokenType, text: impl Into<String>, pos: usize) -> Self {
        Self {
            token_type,
            text: text.into(),
            pos,
        }
    }

    /// Length of the token in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
