// Whitespace tokenizer for Kannada text

use pada_core::Token;
use pada_core::character::classify_token;

/// Split `text` on whitespace into classified tokens.
///
/// Positions are char offsets into `text`. Punctuation attached to a word
/// stays part of the token, which then classifies as `Foreign`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<(usize, usize)> = None;

    for (char_pos, (byte_pos, ch)) in text.char_indices().enumerate() {
        match (ch.is_whitespace(), start) {
            (true, Some((byte_start, char_start))) => {
                tokens.push(make_token(&text[byte_start..byte_pos], char_start));
                start = None;
            }
            (false, None) => start = Some((byte_pos, char_pos)),
            _ => {}
        }
    }
    if let Some((byte_start, char_start)) = start {
        tokens.push(make_token(&text[byte_start..], char_start));
    }
    tokens
}

fn make_token(text: &str, pos: usize) -> Token {
    Token::new(classify_token(text), text, pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pada_core::TokenType;

    #[test]
    fn splits_on_any_whitespace() {
        let tokens = tokenize("  ನಾನು ಕನ್ನಡ\tಕಲಿಯುತ್ತೇನೆ\n");
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["ನಾನು", "ಕನ್ನಡ", "ಕಲಿಯುತ್ತೇನೆ"]);
    }

    #[test]
    fn positions_are_char_offsets() {
        let tokens = tokenize("ಮನೆ ಮರ");
        assert_eq!(tokens[0].pos, 0);
        // "ಮನೆ" is three chars, plus one space
        assert_eq!(tokens[1].pos, 4);
        assert_eq!(tokens[1].char_len(), 2);
    }

    #[test]
    fn tokens_are_classified() {
        let tokens = tokenize("ಭಾರತ ೧೯೪೭ India ಭಾರತ,");
        let types: Vec<_> = tokens.iter().map(|t| t.token_type).collect();
        assert_eq!(
            types,
            vec![
                TokenType::Word,
                TokenType::Numeral,
                TokenType::Foreign,
                TokenType::Foreign
            ]
        );
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n ").is_empty());
    }
}
