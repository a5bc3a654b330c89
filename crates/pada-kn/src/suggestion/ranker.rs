// Edit-distance suggestion ranker

use pada_core::Category;

use crate::lexicon::Lexicon;
use crate::morphology::SuffixCatalog;
use crate::suggestion::{SuggestOptions, Suggestion};

/// Ranks every lexicon word against the root of a misspelled word.
///
/// Cost is linear in the lexicon size per query, which is fine for
/// interactive corrections of single words.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRanker<'a> {
    lexicon: &'a Lexicon,
    catalog: &'a SuffixCatalog,
}

impl<'a> SuggestionRanker<'a> {
    pub fn new(lexicon: &'a Lexicon, catalog: &'a SuffixCatalog) -> Self {
        Self { lexicon, catalog }
    }

    /// Rank candidates for `word`.
    ///
    /// Candidates are sorted by ascending distance. Equal distances keep the
    /// lexicon's enumeration order. If a suffix was split off, it is appended
    /// to every candidate.
    pub fn rank(&self, word: &str, options: &SuggestOptions) -> Vec<Suggestion> {
        if options.max_suggestions == 0 || self.lexicon.is_empty() {
            return Vec::new();
        }

        let (root, suffix, category) = match self.catalog.first_matching_suffix(word) {
            Some(m) => (
                &word[..word.len() - m.suffix.len()],
                m.suffix,
                Some(m.category),
            ),
            None => (word, "", None),
        };

        let restricted: Vec<String>;
        let pool: &[String] = match category {
            Some(category) if options.preserve_category => {
                restricted = self.words_in(category);
                if restricted.is_empty() {
                    self.lexicon.all_words()
                } else {
                    &restricted
                }
            }
            _ => self.lexicon.all_words(),
        };
        log::trace!("ranking {} candidates for root {root:?}", pool.len());

        let mut scored: Vec<(&str, usize)> = pool
            .iter()
            .map(|candidate| (candidate.as_str(), strsim::levenshtein(root, candidate)))
            .collect();
        // `sort_by_key` is stable; ties stay in enumeration order.
        scored.sort_by_key(|&(_, distance)| distance);
        scored.truncate(options.max_suggestions);

        scored
            .into_iter()
            .map(|(candidate, distance)| {
                let mut full = String::with_capacity(candidate.len() + suffix.len());
                full.push_str(candidate);
                full.push_str(suffix);
                Suggestion {
                    word: full,
                    distance,
                }
            })
            .collect()
    }

    fn words_in(&self, category: Category) -> Vec<String> {
        self.lexicon
            .all_words_with_category()
            .filter(|&(_, c)| c == category)
            .map(|(word, _)| word)
            .collect()
    }
}
