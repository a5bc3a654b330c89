// Suffix catalog: ordered suffix categories with stripping behaviors

use pada_core::Category;
use pada_core::character::VOWEL_SIGN_U;
use serde::Deserialize;

use super::tables;

/// How the resolver treats a suffix once it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuffixBehavior {
    /// Remove the suffix and keep resolving.
    Strip,
    /// Keep the suffix's leading character, drop the rest and stop.
    Retain,
    /// Keep the suffix's leading character, append the rewrite marker and
    /// keep resolving.
    Rewrite,
    /// Last-resort short endings, tried only if nothing else ever matched.
    Fallback,
}

/// Error raised when a catalog is built from malformed configuration.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("category {category} contains an empty suffix")]
    EmptySuffix { category: Category },

    #[error("{behavior:?} category {category} has no suffixes")]
    EmptySpecialCategory {
        category: Category,
        behavior: SuffixBehavior,
    },

    #[error("category {0} is declared more than once")]
    DuplicateCategory(Category),

    #[error("{behavior:?} is declared by both category {first} and category {second}")]
    DuplicateSpecial {
        behavior: SuffixBehavior,
        first: Category,
        second: Category,
    },

    #[error("a rewrite category is declared but the rewrite marker is empty")]
    EmptyRewriteMarker,

    #[error("invalid catalog configuration: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// A suffix with its length in characters precomputed.
#[derive(Debug, Clone)]
struct Suffix {
    text: String,
    chars: usize,
}

/// One named group of candidate endings sharing a behavior.
///
/// Suffix order matters: within a category the first structural match wins.
#[derive(Debug, Clone)]
pub struct SuffixCategory {
    id: Category,
    behavior: SuffixBehavior,
    suffixes: Vec<Suffix>,
}

impl SuffixCategory {
    /// Create a category from its id, behavior and ordered suffix list.
    pub fn new<I, S>(id: u16, behavior: SuffixBehavior, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let suffixes = suffixes
            .into_iter()
            .map(|s| {
                let text: String = s.into();
                let chars = text.chars().count();
                Suffix { text, chars }
            })
            .collect();
        Self {
            id: Category::from(id),
            behavior,
            suffixes,
        }
    }

    /// The category identifier.
    pub fn id(&self) -> Category {
        self.id
    }

    /// The behavior applied when one of this category's suffixes matches.
    pub fn behavior(&self) -> SuffixBehavior {
        self.behavior
    }

    /// The suffixes in priority order.
    pub fn suffixes(&self) -> impl Iterator<Item = &str> {
        self.suffixes.iter().map(|s| s.text.as_str())
    }

    /// Number of suffixes.
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    /// Whether the category has no suffixes.
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// First suffix that `word` ends with under the standard length guard
    /// `len(word) > len(suffix) + 1`.
    ///
    /// `word_chars` is the character count of `word`.
    pub fn find_guarded(&self, word: &str, word_chars: usize) -> Option<&str> {
        self.suffixes
            .iter()
            .find(|s| word_chars > s.chars + 1 && word.ends_with(s.text.as_str()))
            .map(|s| s.text.as_str())
    }

    /// First suffix that `word` ends with under the stricter fallback guard
    /// `len(word) - len(suffix) > len(suffix) + 1`.
    pub fn find_fallback(&self, word: &str, word_chars: usize) -> Option<&str> {
        self.suffixes
            .iter()
            .find(|s| {
                word_chars > s.chars
                    && word_chars - s.chars > s.chars + 1
                    && word.ends_with(s.text.as_str())
            })
            .map(|s| s.text.as_str())
    }

    /// First suffix that `word` ends with while leaving a non-empty root.
    pub fn find_unguarded(&self, word: &str, word_chars: usize) -> Option<&str> {
        self.suffixes
            .iter()
            .find(|s| word_chars > s.chars && word.ends_with(s.text.as_str()))
            .map(|s| s.text.as_str())
    }
}

/// A suffix found at the end of a word, with the category it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatch<'a> {
    pub category: Category,
    pub suffix: &'a str,
}

/// Immutable, ordered table of suffix categories.
///
/// Declaration order is priority order. At most one category may carry each
/// of the `Retain`, `Rewrite` and `Fallback` behaviors; every other category
/// is a `Strip` category.
#[derive(Debug, Clone)]
pub struct SuffixCatalog {
    categories: Vec<SuffixCategory>,
    retain: Option<usize>,
    rewrite: Option<usize>,
    fallback: Option<usize>,
    rewrite_marker: String,
}

impl SuffixCatalog {
    /// Validate and build a catalog.
    pub fn new(
        categories: Vec<SuffixCategory>,
        rewrite_marker: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let rewrite_marker = rewrite_marker.into();

        for (i, category) in categories.iter().enumerate() {
            if categories[..i].iter().any(|c| c.id == category.id) {
                return Err(CatalogError::DuplicateCategory(category.id));
            }
            if category.suffixes.iter().any(|s| s.text.is_empty()) {
                return Err(CatalogError::EmptySuffix {
                    category: category.id,
                });
            }
            if category.behavior != SuffixBehavior::Strip {
                if category.suffixes.is_empty() {
                    return Err(CatalogError::EmptySpecialCategory {
                        category: category.id,
                        behavior: category.behavior,
                    });
                }
                if let Some(first) = categories[..i]
                    .iter()
                    .find(|c| c.behavior == category.behavior)
                {
                    return Err(CatalogError::DuplicateSpecial {
                        behavior: category.behavior,
                        first: first.id,
                        second: category.id,
                    });
                }
            }
            if category.behavior == SuffixBehavior::Rewrite && rewrite_marker.is_empty() {
                return Err(CatalogError::EmptyRewriteMarker);
            }
        }

        Ok(Self::build(categories, rewrite_marker))
    }

    /// Assemble a catalog without validation.
    fn build(categories: Vec<SuffixCategory>, rewrite_marker: String) -> Self {
        let position = |behavior: SuffixBehavior| {
            categories.iter().position(|c| c.behavior == behavior)
        };
        let retain = position(SuffixBehavior::Retain);
        let rewrite = position(SuffixBehavior::Rewrite);
        let fallback = position(SuffixBehavior::Fallback);
        log::debug!(
            "suffix catalog with {} categories (retain: {}, rewrite: {}, fallback: {})",
            categories.len(),
            retain.is_some(),
            rewrite.is_some(),
            fallback.is_some()
        );
        Self {
            categories,
            retain,
            rewrite,
            fallback,
            rewrite_marker,
        }
    }

    /// The four-category paradigm table used for interactive checking.
    ///
    /// All categories strip; there are no retain, rewrite or fallback rules.
    pub fn paradigm() -> Self {
        let categories = tables::PARADIGM_TABLE
            .iter()
            .map(|&(id, suffixes)| {
                SuffixCategory::new(id, SuffixBehavior::Strip, suffixes.iter().copied())
            })
            .collect();
        Self::build(categories, VOWEL_SIGN_U.to_string())
    }

    /// The full linguistic table used by the stemmer.
    ///
    /// Categories 1 to 70 strip, 71 is the fallback, 72 retains and 73
    /// rewrites with the vowel sign U.
    pub fn stemmer() -> Self {
        let categories = tables::STEMMER_TABLE
            .iter()
            .map(|&(id, suffixes)| {
                let behavior = match id {
                    tables::STEMMER_FALLBACK => SuffixBehavior::Fallback,
                    tables::STEMMER_RETAIN => SuffixBehavior::Retain,
                    tables::STEMMER_REWRITE => SuffixBehavior::Rewrite,
                    _ => SuffixBehavior::Strip,
                };
                SuffixCategory::new(id, behavior, suffixes.iter().copied())
            })
            .collect();
        Self::build(categories, VOWEL_SIGN_U.to_string())
    }

    /// All categories in declaration order.
    pub fn categories(&self) -> &[SuffixCategory] {
        &self.categories
    }

    /// Look up a category by id.
    pub fn category(&self, id: Category) -> Option<&SuffixCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// `Strip` categories in priority order.
    pub fn strip_categories(&self) -> impl Iterator<Item = &SuffixCategory> {
        self.categories
            .iter()
            .filter(|c| c.behavior == SuffixBehavior::Strip)
    }

    /// The `Retain` category, if configured.
    pub fn retain(&self) -> Option<&SuffixCategory> {
        self.retain.map(|i| &self.categories[i])
    }

    /// The `Rewrite` category, if configured.
    pub fn rewrite(&self) -> Option<&SuffixCategory> {
        self.rewrite.map(|i| &self.categories[i])
    }

    /// The `Fallback` category, if configured.
    pub fn fallback(&self) -> Option<&SuffixCategory> {
        self.fallback.map(|i| &self.categories[i])
    }

    /// Text appended after a rewrite rule trims its suffix.
    pub fn rewrite_marker(&self) -> &str {
        &self.rewrite_marker
    }

    /// Fast-path suffix lookup used by the spell checker and the ranker.
    ///
    /// Scans every category in table order and returns the first suffix the
    /// word ends with, provided a non-empty root remains. No recursion and no
    /// rewriting.
    pub fn first_matching_suffix(&self, word: &str) -> Option<SuffixMatch<'_>> {
        let word_chars = word.chars().count();
        self.categories.iter().find_map(|c| {
            c.find_unguarded(word, word_chars).map(|suffix| SuffixMatch {
                category: c.id,
                suffix,
            })
        })
    }

    /// Assign a word to a single category for batch corpus classification.
    ///
    /// Checks retain, rewrite, the strip categories in order and finally the
    /// fallback, all under the standard length guard. Returns `None` when the
    /// word is unclassifiable.
    pub fn classify(&self, word: &str) -> Option<Category> {
        let word_chars = word.chars().count();
        self.retain()
            .into_iter()
            .chain(self.rewrite())
            .chain(self.strip_categories())
            .chain(self.fallback())
            .find(|c| c.find_guarded(word, word_chars).is_some())
            .map(|c| c.id)
    }
}

impl Default for SuffixCatalog {
    fn default() -> Self {
        Self::paradigm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> SuffixCatalog {
        SuffixCatalog::new(
            vec![
                SuffixCategory::new(1, SuffixBehavior::Strip, ["ಗಳನ್ನು", "ಗಳ"]),
                SuffixCategory::new(2, SuffixBehavior::Strip, ["ದಲ್ಲಿ"]),
                SuffixCategory::new(9, SuffixBehavior::Fallback, ["ದ", "ಗೆ"]),
                SuffixCategory::new(10, SuffixBehavior::Retain, ["ರದ"]),
                SuffixCategory::new(11, SuffixBehavior::Rewrite, ["ಡಲು"]),
            ],
            "ು",
        )
        .unwrap()
    }

    #[test]
    fn special_categories_are_located() {
        let catalog = small_catalog();
        assert_eq!(catalog.retain().map(|c| c.id()), Some(Category::Id(10)));
        assert_eq!(catalog.rewrite().map(|c| c.id()), Some(Category::Id(11)));
        assert_eq!(catalog.fallback().map(|c| c.id()), Some(Category::Id(9)));
        let strips: Vec<_> = catalog.strip_categories().map(|c| c.id()).collect();
        assert_eq!(strips, vec![Category::Id(1), Category::Id(2)]);
    }

    #[test]
    fn empty_suffix_is_rejected() {
        let err = SuffixCatalog::new(
            vec![SuffixCategory::new(1, SuffixBehavior::Strip, ["ಗಳ", ""])],
            "ು",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::EmptySuffix {
                category: Category::Id(1)
            }
        ));
    }

    #[test]
    fn empty_special_category_is_rejected() {
        let err = SuffixCatalog::new(
            vec![SuffixCategory::new(
                72,
                SuffixBehavior::Retain,
                Vec::<String>::new(),
            )],
            "ು",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::EmptySpecialCategory {
                behavior: SuffixBehavior::Retain,
                ..
            }
        ));
    }

    #[test]
    fn empty_strip_category_is_allowed() {
        let catalog = SuffixCatalog::new(
            vec![SuffixCategory::new(5, SuffixBehavior::Strip, Vec::<String>::new())],
            "",
        )
        .unwrap();
        assert!(catalog.categories()[0].is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = SuffixCatalog::new(
            vec![
                SuffixCategory::new(1, SuffixBehavior::Strip, ["ಗಳ"]),
                SuffixCategory::new(1, SuffixBehavior::Strip, ["ದ"]),
            ],
            "ು",
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCategory(Category::Id(1))));
    }

    #[test]
    fn second_rewrite_category_is_rejected() {
        let err = SuffixCatalog::new(
            vec![
                SuffixCategory::new(1, SuffixBehavior::Rewrite, ["ಡಲು"]),
                SuffixCategory::new(2, SuffixBehavior::Rewrite, ["ಸಲು"]),
            ],
            "ು",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateSpecial {
                behavior: SuffixBehavior::Rewrite,
                ..
            }
        ));
    }

    #[test]
    fn rewrite_needs_a_marker() {
        let err = SuffixCatalog::new(
            vec![SuffixCategory::new(1, SuffixBehavior::Rewrite, ["ಡಲು"])],
            "",
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::EmptyRewriteMarker));
    }

    #[test]
    fn guarded_match_respects_length() {
        let category = SuffixCategory::new(1, SuffixBehavior::Strip, ["ಗಳ"]);
        // "ಗಳ" is 2 chars; the word needs at least 4.
        assert_eq!(category.find_guarded("ಮಗಳ", 3), None);
        assert_eq!(category.find_guarded("ಮನೆಗಳ", 5), Some("ಗಳ"));
    }

    #[test]
    fn fallback_guard_is_stricter() {
        let category = SuffixCategory::new(71, SuffixBehavior::Fallback, ["ಗೆ"]);
        // len(w) - 2 > 3 requires len(w) >= 6
        assert_eq!(category.find_fallback("ಮನೆಗೆ", 5), None);
        assert_eq!(category.find_fallback("ಶಾಲೆಗೆ", 6), Some("ಗೆ"));
    }

    #[test]
    fn first_matching_suffix_scans_in_table_order() {
        let catalog = SuffixCatalog::paradigm();
        let m = catalog.first_matching_suffix("ಪ್ರೀತಿಸುದ್ದಳು").unwrap();
        assert_eq!(m.category, Category::Id(3));
        assert_eq!(m.suffix, "ದ್ದಳು");
    }

    #[test]
    fn first_matching_suffix_needs_non_empty_root() {
        let catalog = SuffixCatalog::paradigm();
        assert_eq!(catalog.first_matching_suffix("ಗಳ"), None);
        assert_eq!(catalog.first_matching_suffix("ಕನ್ನಡ").map(|m| m.suffix), None);
    }

    #[test]
    fn first_matching_suffix_ignores_stricter_guards() {
        let catalog = SuffixCatalog::paradigm();
        // A two-char word still gives up its one-char suffix.
        let m = catalog.first_matching_suffix("ಅದ").unwrap();
        assert_eq!(m.suffix, "ದ");
        assert_eq!(m.category, Category::Id(4));
    }

    #[test]
    fn classify_prefers_retain_then_rewrite() {
        let catalog = small_catalog();
        assert_eq!(catalog.classify("ಬೇಸರದ"), Some(Category::Id(10)));
        assert_eq!(catalog.classify("ಮಾಡಲು"), Some(Category::Id(11)));
        assert_eq!(catalog.classify("ಮನೆಗಳನ್ನು"), Some(Category::Id(1)));
        assert_eq!(catalog.classify("ಮನೆಗೆ"), Some(Category::Id(9)));
        assert_eq!(catalog.classify("ಮನೆ"), None);
    }

    #[test]
    fn built_in_tables_have_expected_shape() {
        let paradigm = SuffixCatalog::paradigm();
        assert_eq!(paradigm.categories().len(), 4);
        assert!(paradigm.retain().is_none());
        assert!(paradigm.rewrite().is_none());

        let stemmer = SuffixCatalog::stemmer();
        assert_eq!(stemmer.categories().len(), 73);
        assert_eq!(stemmer.strip_categories().count(), 70);
        assert_eq!(stemmer.retain().map(|c| c.id()), Some(Category::Id(72)));
        assert_eq!(stemmer.rewrite().map(|c| c.id()), Some(Category::Id(73)));
        assert_eq!(stemmer.fallback().map(|c| c.id()), Some(Category::Id(71)));
        assert_eq!(stemmer.rewrite_marker(), "ು");
    }
}
