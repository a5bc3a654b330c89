// Morphological resolver: peels suffix layers off a surface word
//
// Resolution repeatedly applies the first rule that fires, in this order:
//
//   1. retain   keep the suffix's leading character, drop the rest, stop
//   2. rewrite  keep the leading character, append the rewrite marker, repeat
//   3. strip    remove the first guarded match of the first matching strip
//               category, repeat (scanning restarts at the first category)
//   4. fallback only if neither rewrite nor strip has fired during this
//               resolution: remove a short generic ending and stop
//
// All rules except the fallback use the guard `len(w) > len(s) + 1`; the
// fallback uses `len(w) - len(s) > len(s) + 1`. Lengths are in chars.

use pada_core::Category;

use super::catalog::SuffixCatalog;

/// Result of resolving one surface word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWord {
    /// The root left after all rules were applied.
    pub root: String,
    /// Categories whose rules fired, in application order.
    pub categories: Vec<Category>,
    /// Tail of the input word that is not part of the root's unchanged
    /// prefix. Empty when nothing was removed.
    pub suffix: String,
}

impl ResolvedWord {
    /// Whether no rule fired.
    pub fn is_unchanged(&self) -> bool {
        self.categories.is_empty()
    }
}

/// A single rule application chosen for the current word.
enum Step<'c> {
    Retain(Category, &'c str),
    Rewrite(Category, &'c str),
    Strip(Category, &'c str),
    Fallback(Category, &'c str),
}

/// Full suffix resolver over a catalog.
#[derive(Debug, Clone, Copy)]
pub struct SuffixResolver<'a> {
    catalog: &'a SuffixCatalog,
}

impl<'a> SuffixResolver<'a> {
    pub fn new(catalog: &'a SuffixCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a SuffixCatalog {
        self.catalog
    }

    /// Resolve `word` into its root and the categories applied.
    ///
    /// The number of rule applications is capped at the input's char count,
    /// which bounds rewrite rules that do not shorten the word.
    pub fn resolve(&self, word: &str) -> ResolvedWord {
        let limit = word.chars().count();
        let mut current = word.to_string();
        // Byte length of the input prefix still present, unchanged, in `current`.
        let mut kept = word.len();
        let mut categories = Vec::new();
        let mut stripped = false;

        loop {
            let Some(step) = self.next_step(&current, stripped) else {
                break;
            };
            if categories.len() == limit {
                log::warn!("resolution of {word:?} stopped after {limit} rule applications");
                break;
            }
            match step {
                Step::Retain(category, suffix) => {
                    current.truncate(leading_char_end(&current, suffix));
                    kept = kept.min(current.len());
                    categories.push(category);
                    break;
                }
                Step::Rewrite(category, suffix) => {
                    current.truncate(leading_char_end(&current, suffix));
                    kept = kept.min(current.len());
                    current.push_str(self.catalog.rewrite_marker());
                    categories.push(category);
                    stripped = true;
                }
                Step::Strip(category, suffix) => {
                    current.truncate(current.len() - suffix.len());
                    kept = kept.min(current.len());
                    categories.push(category);
                    stripped = true;
                }
                Step::Fallback(category, suffix) => {
                    current.truncate(current.len() - suffix.len());
                    kept = kept.min(current.len());
                    categories.push(category);
                    break;
                }
            }
        }

        ResolvedWord {
            root: current,
            categories,
            suffix: word[kept..].to_string(),
        }
    }

    /// Pick the rule that fires on `word`, if any.
    fn next_step(&self, word: &str, stripped: bool) -> Option<Step<'a>> {
        let chars = word.chars().count();
        let catalog = self.catalog;

        if let Some(category) = catalog.retain() {
            if let Some(suffix) = category.find_guarded(word, chars) {
                return Some(Step::Retain(category.id(), suffix));
            }
        }
        if let Some(category) = catalog.rewrite() {
            if let Some(suffix) = category.find_guarded(word, chars) {
                return Some(Step::Rewrite(category.id(), suffix));
            }
        }
        let strip = catalog.strip_categories().find_map(|category| {
            category
                .find_guarded(word, chars)
                .map(|suffix| Step::Strip(category.id(), suffix))
        });
        if strip.is_some() {
            return strip;
        }
        if stripped {
            return None;
        }
        let category = catalog.fallback()?;
        category
            .find_fallback(word, chars)
            .map(|suffix| Step::Fallback(category.id(), suffix))
    }
}

/// Byte offset just past the first char of `suffix`, which `word` ends with.
fn leading_char_end(word: &str, suffix: &str) -> usize {
    let first = suffix.chars().next().map_or(0, char::len_utf8);
    word.len() - suffix.len() + first
}
