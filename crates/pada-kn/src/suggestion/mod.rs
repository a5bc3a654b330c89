// Suggestion generation module
//
// Ranks lexicon words by edit distance to the root of a misspelled word and
// re-attaches the suffix that was split off.

pub mod accuracy;
pub mod ranker;

pub use accuracy::{AccuracyReport, AccuracyResult, Summary, evaluate};
pub use ranker::SuggestionRanker;

use pada_core::enums::DEFAULT_MAX_SUGGESTIONS;

/// A ranked correction candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The suggested word, suffix included.
    pub word: String,
    /// Levenshtein distance between the misspelled root and the candidate root.
    pub distance: usize,
}

/// Options controlling suggestion generation.
#[derive(Debug, Clone)]
pub struct SuggestOptions {
    /// Maximum number of suggestions returned.
    pub max_suggestions: usize,
    /// Only rank lexicon words tagged with the category of the suffix that
    /// was split off. Falls back to the whole lexicon if no word carries it.
    pub preserve_category: bool,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            preserve_category: false,
        }
    }
}
