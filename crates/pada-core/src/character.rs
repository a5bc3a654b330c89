// Kannada script character classification

use std::ops::RangeInclusive;

use crate::enums::TokenType;

/// The Kannada Unicode block.
pub const KANNADA_BLOCK: RangeInclusive<char> = '\u{0C80}'..='\u{0CFF}';

/// Kannada digits ೦ through ೯.
pub const KANNADA_DIGITS: RangeInclusive<char> = '\u{0CE6}'..='\u{0CEF}';

/// The vowel sign U (ು), appended by rewrite rules to restore a verb stem.
pub const VOWEL_SIGN_U: char = '\u{0CC1}';

/// Check whether a character lies in the Kannada block.
#[inline]
pub fn is_kannada_char(c: char) -> bool {
    KANNADA_BLOCK.contains(&c)
}

/// Check whether a character is a Kannada digit.
#[inline]
pub fn is_kannada_digit(c: char) -> bool {
    KANNADA_DIGITS.contains(&c)
}

/// Check whether every character of a non-empty word is Kannada script.
pub fn is_kannada_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_kannada_char)
}

/// Check whether a non-empty word consists only of Kannada digits.
pub fn is_kannada_numeral(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_kannada_digit)
}

/// Classify a whitespace-delimited token.
///
/// Numerals are reported before words: a digit string is inside the
/// Kannada block but must never reach the spell checker.
pub fn classify_token(token: &str) -> TokenType {
    if is_kannada_numeral(token) {
        TokenType::Numeral
    } else if is_kannada_word(token) {
        TokenType::Word
    } else {
        TokenType::Foreign
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_bounds() {
        assert!(is_kannada_char('\u{0C80}'));
        assert!(is_kannada_char('\u{0CFF}'));
        assert!(!is_kannada_char('\u{0C7F}'));
        assert!(!is_kannada_char('\u{0D00}'));
        assert!(!is_kannada_char('a'));
    }

    #[test]
    fn kannada_word_detection() {
        assert!(is_kannada_word("ಕನ್ನಡ"));
        assert!(!is_kannada_word("ಕನ್ನಡ!"));
        assert!(!is_kannada_word("kannada"));
        assert!(!is_kannada_word(""));
    }

    #[test]
    fn numeral_detection() {
        assert!(is_kannada_numeral("೧೯೪೭"));
        assert!(!is_kannada_numeral("೧೯a"));
        assert!(!is_kannada_numeral("1947"));
        assert!(!is_kannada_numeral(""));
    }

    #[test]
    fn token_classification() {
        assert_eq!(classify_token("ಭಾರತ"), TokenType::Word);
        assert_eq!(classify_token("೨೦೨೪"), TokenType::Numeral);
        assert_eq!(classify_token("India"), TokenType::Foreign);
        assert_eq!(classify_token("ಭಾರತ,"), TokenType::Foreign);
    }

    #[test]
    fn vowel_sign_u_is_kannada() {
        assert!(is_kannada_char(VOWEL_SIGN_U));
        assert_eq!(VOWEL_SIGN_U.to_string(), "ು");
    }
}
