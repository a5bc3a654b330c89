// PadaHandle: top-level integration point for Kannada spell checking.
//
// Owns the lexicon, both suffix catalogs, the suggestion options and the
// ignore list. Speller, ranker and resolver are lightweight views created
// on the fly in each method call.
//
// Two catalogs are kept apart: the interactive path (classify, suggest)
// splits suffixes with the paradigm table, while `resolve` runs the full
// resolver over the linguistic stemmer table.

use hashbrown::HashSet;
use pada_core::{SpellResult, TokenType};

use crate::lexicon::Lexicon;
use crate::morphology::{CatalogError, ResolvedWord, SuffixCatalog, SuffixResolver};
use crate::speller::{LexiconSpeller, Speller};
use crate::suggestion::{self, AccuracyReport, SuggestOptions, SuggestionRanker};
use crate::tokenizer;
use crate::wordlist::{self, WordlistError};

/// Error type for PadaHandle construction failures.
#[derive(Debug, thiserror::Error)]
pub enum PadaError {
    /// The suffix catalog configuration is malformed.
    #[error("invalid suffix catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// The word list is malformed.
    #[error("invalid word list: {0}")]
    Wordlist(#[from] WordlistError),
}

/// A misspelled word found while checking a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
    pub word: String,
    /// Char offset of the word in the checked text.
    pub pos: usize,
}

/// Top-level handle for checking Kannada text.
#[derive(Debug)]
pub struct PadaHandle {
    lexicon: Lexicon,
    /// Fast-path catalog used by `classify` and `suggest`.
    catalog: SuffixCatalog,
    /// Catalog driving the full resolver.
    resolver_catalog: SuffixCatalog,
    options: SuggestOptions,
    ignored: HashSet<String>,
}

impl PadaHandle {
    /// Create a handle over a lexicon and a fast-path catalog.
    ///
    /// The resolver uses the built-in stemmer table; see
    /// [`PadaHandle::with_resolver_catalog`].
    pub fn new(lexicon: Lexicon, catalog: SuffixCatalog) -> Self {
        Self {
            lexicon,
            catalog,
            resolver_catalog: SuffixCatalog::stemmer(),
            options: SuggestOptions::default(),
            ignored: HashSet::new(),
        }
    }

    /// Build a handle from categorized word-list text with the built-in
    /// paradigm table as fast-path catalog.
    pub fn from_categorized(text: &str) -> Result<Self, PadaError> {
        let entries = wordlist::parse_categorized(text)?;
        let lexicon = Lexicon::from_entries(entries)?;
        Ok(Self::new(lexicon, SuffixCatalog::paradigm()))
    }

    /// Replace the catalog used by [`PadaHandle::resolve`].
    pub fn with_resolver_catalog(mut self, catalog: SuffixCatalog) -> Self {
        self.resolver_catalog = catalog;
        self
    }

    // =========================================================================
    // Checking
    // =========================================================================

    /// Classify a single Kannada word.
    ///
    /// The ignore list is not consulted.
    pub fn classify(&self, word: &str) -> SpellResult {
        LexiconSpeller::new(&self.lexicon, &self.catalog).spell(word)
    }

    /// Check whether a word is acceptable: ignored, or classified valid.
    pub fn spell(&self, word: &str) -> bool {
        self.is_ignored(word) || self.classify(word).is_valid()
    }

    /// Suggest up to `limit` corrections for `word`, best first.
    ///
    /// Returns nothing for a word that is already valid.
    pub fn suggest(&self, word: &str, limit: usize) -> Vec<String> {
        if self.classify(word).is_valid() {
            return Vec::new();
        }
        SuggestionRanker::new(&self.lexicon, &self.catalog)
            .rank(word, &self.options_with_limit(limit))
            .into_iter()
            .map(|s| s.word)
            .collect()
    }

    /// Suggest corrections using the configured maximum count.
    pub fn suggestions(&self, word: &str) -> Vec<String> {
        self.suggest(word, self.options.max_suggestions)
    }

    /// Measure how well suggestions recover the expected word of each
    /// `(misspelled, expected)` pair, looking at the first `limit`.
    ///
    /// Unlike [`PadaHandle::suggest`], inputs are ranked even when they are
    /// valid words.
    pub fn evaluate<I, S>(&self, pairs: I, limit: usize) -> AccuracyReport
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let ranker = SuggestionRanker::new(&self.lexicon, &self.catalog);
        suggestion::evaluate(&ranker, pairs, &self.options_with_limit(limit))
    }

    fn options_with_limit(&self, limit: usize) -> SuggestOptions {
        SuggestOptions {
            max_suggestions: limit,
            ..self.options.clone()
        }
    }

    /// Run the full suffix resolver on `word`.
    pub fn resolve(&self, word: &str) -> ResolvedWord {
        SuffixResolver::new(&self.resolver_catalog).resolve(word)
    }

    /// Longest prefix of `word` that is a lexicon word.
    pub fn longest_valid_root<'w>(&self, word: &'w str) -> &'w str {
        self.lexicon.longest_valid_root(word)
    }

    /// Check every Kannada word of `text`.
    ///
    /// Numerals, tokens containing other scripts and ignored words are
    /// skipped.
    pub fn check_text(&self, text: &str) -> Vec<Misspelling> {
        tokenizer::tokenize(text)
            .into_iter()
            .filter(|token| token.token_type == TokenType::Word)
            .filter(|token| !self.spell(&token.text))
            .map(|token| Misspelling {
                word: token.text,
                pos: token.pos,
            })
            .collect()
    }

    // =========================================================================
    // Ignore list
    // =========================================================================

    /// Accept `word` in all later checks.
    pub fn ignore_word(&mut self, word: impl Into<String>) {
        self.ignored.insert(word.into());
    }

    pub fn is_ignored(&self, word: &str) -> bool {
        self.ignored.contains(word)
    }

    /// Ignored words, in no particular order.
    pub fn ignored_words(&self) -> impl Iterator<Item = &str> {
        self.ignored.iter().map(String::as_str)
    }

    pub fn clear_ignored(&mut self) {
        self.ignored.clear();
    }

    // =========================================================================
    // Options and accessors
    // =========================================================================

    pub fn set_max_suggestions(&mut self, value: usize) {
        self.options.max_suggestions = value;
    }

    pub fn set_preserve_category(&mut self, value: bool) {
        self.options.preserve_category = value;
    }

    pub fn options(&self) -> &SuggestOptions {
        &self.options
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn catalog(&self) -> &SuffixCatalog {
        &self.catalog
    }

    pub fn resolver_catalog(&self) -> &SuffixCatalog {
        &self.resolver_catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pada_core::Category;

    const WORDS: &str = "\
Category 2:
ಮನೆ

Category 3:
ಪ್ರೀತಿಸು

Uncategorized:
ಕನ್ನಡ
ಸಾಕಾಣಿಗೆ
";

    fn handle() -> PadaHandle {
        PadaHandle::from_categorized(WORDS).unwrap()
    }

    #[test]
    fn handle_loads_categorized_text() {
        let handle = handle();
        assert_eq!(handle.lexicon().len(), 4);
        assert_eq!(handle.lexicon().search("ಮನೆ"), Some(Category::Id(2)));
    }

    #[test]
    fn classify_and_spell() {
        let handle = handle();
        assert_eq!(handle.classify("ಕನ್ನಡ"), SpellResult::Valid);
        assert_eq!(handle.classify("ಪ್ರೀತಿಸುದ್ದಳು"), SpellResult::Valid);
        assert_eq!(handle.classify("ಭಾರತ"), SpellResult::Misspelled);
        assert!(!handle.spell("ಭಾರತ"));
    }

    #[test]
    fn valid_word_gets_no_suggestions() {
        assert!(handle().suggest("ಕನ್ನಡ", 8).is_empty());
    }

    #[test]
    fn suggestions_use_configured_limit() {
        let mut handle = handle();
        assert_eq!(handle.suggestions("ಸಾಕಾಣಿಗ")[0], "ಸಾಕಾಣಿಗೆ");
        handle.set_max_suggestions(2);
        assert_eq!(handle.suggestions("ಸಾಕಾಣಿಗ").len(), 2);
    }

    #[test]
    fn evaluate_ranks_valid_inputs_too() {
        let handle = handle();
        let report = handle.evaluate([("ಕನ್ನಡ", "ಕನ್ನಡ"), ("ಸಾಕಾಣಿಗ", "ಸಾಕಾಣಿಗೆ")], 1);
        assert_eq!(report.results[0].rank, Some(1));
        assert_eq!(report.results[1].suggestions, ["ಸಾಕಾಣಿಗೆ"]);
        assert_eq!(report.summary.top_one, 2);
    }

    #[test]
    fn ignored_words_are_accepted() {
        let mut handle = handle();
        handle.ignore_word("ಭಾರತ");
        assert!(handle.spell("ಭಾರತ"));
        assert!(handle.is_ignored("ಭಾರತ"));
        // classify stays a pure lexicon decision
        assert_eq!(handle.classify("ಭಾರತ"), SpellResult::Misspelled);
        assert_eq!(handle.ignored_words().count(), 1);
        handle.clear_ignored();
        assert!(!handle.spell("ಭಾರತ"));
    }

    #[test]
    fn check_text_reports_positions() {
        let handle = handle();
        let found = handle.check_text("ಕನ್ನಡ ಭಾರತ ೧೯೪೭ India ಮನೆಗಳ");
        assert_eq!(
            found,
            vec![Misspelling {
                word: "ಭಾರತ".to_string(),
                pos: 6,
            }]
        );
    }

    #[test]
    fn resolve_uses_stemmer_table() {
        let handle = handle();
        let resolved = handle.resolve("ಮಾಡಲು");
        assert_eq!(resolved.root, "ಮಾಡು");
        assert_eq!(resolved.categories, vec![Category::Id(73)]);
    }

    #[test]
    fn resolver_catalog_can_be_replaced() {
        let handle = handle().with_resolver_catalog(SuffixCatalog::paradigm());
        let resolved = handle.resolve("ಮಾಡಲು");
        assert!(resolved.is_unchanged());
    }

    #[test]
    fn longest_valid_root_delegates_to_lexicon() {
        assert_eq!(handle().longest_valid_root("ಕನ್ನಡಿಗ"), "ಕನ್ನಡ");
    }

    #[test]
    fn malformed_word_list_is_an_error() {
        let err = PadaHandle::from_categorized("Category two:\nಮನೆ").unwrap_err();
        assert!(matches!(
            err,
            PadaError::Wordlist(WordlistError::InvalidHeader { .. })
        ));
    }
}
