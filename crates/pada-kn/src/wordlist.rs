// Word lists: the categorized lexicon format and paradigm discovery
//
// A categorized word list looks like:
//
//   Category 2:
//   ಮನೆ
//   ಮರ
//
//   Uncategorized:
//   ಕನ್ನಡ
//
// Roots under "Category N:" take every suffix of catalog category N. Words
// under "Uncategorized:" are stored as they are. Blank lines are ignored.

use std::collections::BTreeSet;

use hashbrown::HashSet;
use pada_core::Category;

use crate::morphology::SuffixCatalog;

/// Error raised for malformed word-list input.
#[derive(Debug, thiserror::Error)]
pub enum WordlistError {
    #[error("line {line_no}: malformed category header {line:?}")]
    InvalidHeader { line_no: usize, line: String },

    #[error("entry {index} is an empty word")]
    EmptyWord { index: usize },
}

/// Parse a categorized word list into `(word, category)` pairs, in file order.
///
/// Lines before the first header belong to no section and are skipped.
pub fn parse_categorized(text: &str) -> Result<Vec<(String, Category)>, WordlistError> {
    let mut entries = Vec::new();
    let mut current: Option<Category> = None;
    let mut orphans = 0usize;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(category) = parse_header(line, i + 1)? {
            current = Some(category);
            continue;
        }
        match current {
            Some(category) => entries.push((line.to_string(), category)),
            None => orphans += 1,
        }
    }

    if orphans > 0 {
        log::warn!("skipped {orphans} words outside any category section");
    }
    log::debug!("parsed {} categorized entries", entries.len());
    Ok(entries)
}

/// Recognize a section header. Returns `Ok(None)` for ordinary word lines.
fn parse_header(line: &str, line_no: usize) -> Result<Option<Category>, WordlistError> {
    let label = line.strip_suffix(':').unwrap_or(line).trim_end();
    if label == "Uncategorized" {
        return Ok(Some(Category::Uncategorized));
    }
    let Some(rest) = label.strip_prefix("Category") else {
        return Ok(None);
    };
    rest.trim()
        .parse::<u16>()
        .map(|id| Some(Category::from(id)))
        .map_err(|_| WordlistError::InvalidHeader {
            line_no,
            line: line.to_string(),
        })
}

/// Parse a plain word list: one word per line.
///
/// Lines are trimmed, blank lines dropped and duplicates removed, keeping
/// the first occurrence.
pub fn parse_plain(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.lines()
        .map(str::trim)
        .filter(|w| !w.is_empty() && seen.insert(*w))
        .map(str::to_string)
        .collect()
}

/// Roots discovered for each catalog category, plus the inflected forms
/// that were explained by them.
#[derive(Debug, Clone, Default)]
pub struct Categorization {
    roots: Vec<(Category, BTreeSet<String>)>,
    inflected: HashSet<String>,
}

impl Categorization {
    /// Categories in catalog order with their sorted roots.
    pub fn categories(&self) -> impl Iterator<Item = (Category, &BTreeSet<String>)> {
        self.roots.iter().map(|(category, roots)| (*category, roots))
    }

    /// Roots discovered for `category`.
    pub fn roots(&self, category: Category) -> Option<&BTreeSet<String>> {
        self.roots
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, roots)| roots)
    }

    /// Whether `word` was explained as an inflected form of a root.
    pub fn is_inflected(&self, word: &str) -> bool {
        self.inflected.contains(word)
    }

    /// Whether `word` was discovered as a root of any category.
    pub fn is_root(&self, word: &str) -> bool {
        self.roots.iter().any(|(_, roots)| roots.contains(word))
    }

    /// Sorted words that are neither inflected forms nor roots.
    pub fn uncategorized<'w>(&self, words: &'w [String]) -> BTreeSet<&'w str> {
        words
            .iter()
            .map(String::as_str)
            .filter(|w| !self.is_inflected(w) && !self.is_root(w))
            .collect()
    }
}

/// Discover paradigm roots in a plain word list.
///
/// A word ending in suffix `s` of category `c` contributes the root
/// `word - s` to `c` when `root + s'` is in the list for every suffix `s'`
/// of `c`. A word may contribute to several categories. Empty roots are
/// never recorded.
pub fn categorize(words: &[String], catalog: &SuffixCatalog) -> Categorization {
    let known: HashSet<&str> = words.iter().map(String::as_str).collect();
    let mut result = Categorization {
        roots: catalog
            .categories()
            .iter()
            .map(|c| (c.id(), BTreeSet::new()))
            .collect(),
        inflected: HashSet::new(),
    };

    let mut form = String::new();
    for word in words {
        for (category, (_, roots)) in catalog.categories().iter().zip(&mut result.roots) {
            for suffix in category.suffixes() {
                let Some(root) = word.strip_suffix(suffix) else {
                    continue;
                };
                if root.is_empty() {
                    continue;
                }
                let complete = category.suffixes().all(|other| {
                    form.clear();
                    form.push_str(root);
                    form.push_str(other);
                    known.contains(form.as_str())
                });
                if complete {
                    roots.insert(root.to_string());
                    result.inflected.insert(word.clone());
                }
            }
        }
    }

    log::debug!(
        "categorized {} of {} words as inflected forms",
        result.inflected.len(),
        words.len()
    );
    result
}

/// Render a categorization in the categorized word-list format.
///
/// Every catalog category gets a section, even when empty. The trailing
/// "Uncategorized:" section lists [`Categorization::uncategorized`].
pub fn render_categorized(categorization: &Categorization, words: &[String]) -> String {
    let mut out = String::new();
    for (category, roots) in categorization.categories() {
        out.push_str(&format!("Category {category}:\n"));
        for root in roots {
            out.push_str(root);
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str("Uncategorized:\n");
    for word in categorization.uncategorized(words) {
        out.push_str(word);
        out.push('\n');
    }
    out
}
