// Shared enums: SpellResult, TokenType

/// Outcome of validating a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpellResult {
    /// The word, or the root left after stripping a known suffix, is in the lexicon.
    Valid,
    /// Neither the word nor its root is known.
    Misspelled,
}

impl SpellResult {
    /// Check whether the result is `Valid`.
    pub fn is_valid(self) -> bool {
        self == SpellResult::Valid
    }
}

/// Token types produced when splitting text for checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Consists solely of Kannada script characters; eligible for checking.
    Word,
    /// Consists solely of Kannada digits.
    Numeral,
    /// Contains characters outside the Kannada block.
    Foreign,
}

/// Default number of suggestions returned for a misspelled word.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spell_result_equality() {
        assert_eq!(SpellResult::Valid, SpellResult::Valid);
        assert_ne!(SpellResult::Valid, SpellResult::Misspelled);
    }

    #[test]
    fn valid_orders_before_misspelled() {
        assert!(SpellResult::Valid < SpellResult::Misspelled);
    }

    #[test]
    fn is_valid() {
        assert!(SpellResult::Valid.is_valid());
        assert!(!SpellResult::Misspelled.is_valid());
    }

    #[test]
    fn token_type_is_copy() {
        let a = TokenType::Word;
        let b = a;
        assert_eq!(a, b);
    }
}
