// Lexicon-backed decision engine

use pada_core::SpellResult;

use crate::lexicon::Lexicon;
use crate::morphology::SuffixCatalog;
use crate::speller::Speller;

/// Accepts a word if it is in the lexicon, or if removing the fast-path
/// suffix leaves a root that is.
///
/// The caller is expected to pass only Kannada words (no digits, no foreign
/// script); anything else simply comes back `Misspelled`.
#[derive(Debug, Clone, Copy)]
pub struct LexiconSpeller<'a> {
    lexicon: &'a Lexicon,
    catalog: &'a SuffixCatalog,
}

impl<'a> LexiconSpeller<'a> {
    pub fn new(lexicon: &'a Lexicon, catalog: &'a SuffixCatalog) -> Self {
        Self { lexicon, catalog }
    }

    /// Split `word` into root and fast-path suffix.
    ///
    /// The suffix is empty when no catalog entry matches.
    pub fn split<'w>(&self, word: &'w str) -> (&'w str, &'w str) {
        match self.catalog.first_matching_suffix(word) {
            Some(m) => word.split_at(word.len() - m.suffix.len()),
            None => (word, ""),
        }
    }
}

impl Speller for LexiconSpeller<'_> {
    fn spell(&self, word: &str) -> SpellResult {
        if self.lexicon.contains(word) {
            return SpellResult::Valid;
        }
        let (root, suffix) = self.split(word);
        if !suffix.is_empty() && self.lexicon.contains(root) {
            return SpellResult::Valid;
        }
        SpellResult::Misspelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pada_core::Category;

    fn lexicon() -> Lexicon {
        Lexicon::from_entries([
            ("ಕನ್ನಡ", Category::Uncategorized),
            ("ಪ್ರೀತಿಸು", Category::Id(3)),
            ("ಮನೆ", Category::Id(2)),
        ])
        .unwrap()
    }

    #[test]
    fn exact_word_is_valid() {
        let (lex, catalog) = (lexicon(), SuffixCatalog::paradigm());
        let speller = LexiconSpeller::new(&lex, &catalog);
        assert_eq!(speller.spell("ಕನ್ನಡ"), SpellResult::Valid);
    }

    #[test]
    fn unknown_word_is_misspelled() {
        let (lex, catalog) = (lexicon(), SuffixCatalog::paradigm());
        let speller = LexiconSpeller::new(&lex, &catalog);
        assert_eq!(speller.spell("ಭಾರತ"), SpellResult::Misspelled);
    }

    #[test]
    fn inflected_form_of_known_root_is_valid() {
        let (lex, catalog) = (lexicon(), SuffixCatalog::paradigm());
        let speller = LexiconSpeller::new(&lex, &catalog);
        assert_eq!(speller.spell("ಪ್ರೀತಿಸುದ್ದಳು"), SpellResult::Valid);
        assert_eq!(speller.spell("ಮನೆಗಳನ್ನು"), SpellResult::Valid);
    }

    #[test]
    fn inflected_form_of_unknown_root_is_misspelled() {
        let (lex, catalog) = (lexicon(), SuffixCatalog::paradigm());
        let speller = LexiconSpeller::new(&lex, &catalog);
        assert_eq!(speller.spell("ಭಾರತದಲ್ಲಿ"), SpellResult::Misspelled);
    }

    #[test]
    fn split_returns_root_and_suffix() {
        let (lex, catalog) = (lexicon(), SuffixCatalog::paradigm());
        let speller = LexiconSpeller::new(&lex, &catalog);
        assert_eq!(speller.split("ಪ್ರೀತಿಸುದ್ದಳು"), ("ಪ್ರೀತಿಸು", "ದ್ದಳು"));
        assert_eq!(speller.split("ಕನ್ನಡ"), ("ಕನ್ನಡ", ""));
    }

    #[test]
    fn empty_and_foreign_input_degrade_to_misspelled() {
        let (lex, catalog) = (lexicon(), SuffixCatalog::paradigm());
        let speller = LexiconSpeller::new(&lex, &catalog);
        assert_eq!(speller.spell(""), SpellResult::Misspelled);
        assert_eq!(speller.spell("kannada"), SpellResult::Misspelled);
    }

    #[test]
    fn repeated_checks_agree() {
        let (lex, catalog) = (lexicon(), SuffixCatalog::paradigm());
        let speller = LexiconSpeller::new(&lex, &catalog);
        for _ in 0..3 {
            assert!(speller.spell("ಮನೆಗಳ").is_valid());
        }
    }
}
