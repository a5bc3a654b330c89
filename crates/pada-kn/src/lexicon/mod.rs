// Lexicon: prefix tree of canonical Kannada words with category tags
//
// The lexicon is built once per session from a categorized word list and is
// read-only afterwards. Lookups cost O(word length) regardless of dictionary
// size. The flat word list needed by the suggestion ranker is derived lazily
// and cached until the next insertion.

mod node;

pub use node::TrieNode;

use std::sync::OnceLock;

use pada_core::Category;

use crate::morphology::SuffixCatalog;
use crate::wordlist::WordlistError;

/// Prefix tree over canonical words.
///
/// Invariant: every root-to-terminal path spells exactly one inserted word,
/// and the terminal node carries the category it was last inserted with.
#[derive(Debug, Default)]
pub struct Lexicon {
    root: TrieNode,
    len: usize,
    /// Cached depth-first enumeration of all words. Reset by `insert`.
    words: OnceLock<Vec<String>>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from `(word, category)` pairs.
    ///
    /// Empty words are malformed input and abort construction.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, WordlistError>
    where
        I: IntoIterator<Item = (S, Category)>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        for (index, (word, category)) in entries.into_iter().enumerate() {
            let word = word.as_ref();
            if word.is_empty() {
                return Err(WordlistError::EmptyWord { index });
            }
            lexicon.insert(word, category);
        }
        log::debug!("lexicon built with {} words", lexicon.len);
        Ok(lexicon)
    }

    /// Insert a word, creating nodes as needed.
    ///
    /// Re-inserting an existing word keeps a single entry but overwrites its
    /// category (last write wins).
    pub fn insert(&mut self, word: &str, category: Category) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.child_or_insert(ch);
        }
        if node.mark_terminal(category) {
            self.len += 1;
        }
        self.words.take();
    }

    /// Look up a word.
    ///
    /// Returns the stored category if the word was inserted, `None` otherwise.
    /// The walk stops at the first character without a matching child.
    pub fn search(&self, word: &str) -> Option<Category> {
        let node = self.walk(word)?;
        if node.is_terminal() {
            node.category()
        } else {
            None
        }
    }

    /// Check whether a word was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.search(word).is_some()
    }

    /// Return the longest prefix of `word` that is itself a lexicon word.
    ///
    /// Walks the tree greedily and remembers the deepest terminal node seen.
    /// Returns an empty string when no prefix is a word. This recovers a
    /// root even when the actual ending is not in any suffix table.
    pub fn longest_valid_root<'w>(&self, word: &'w str) -> &'w str {
        let mut node = &self.root;
        let mut end = 0;
        for (pos, ch) in word.char_indices() {
            match node.child(ch) {
                Some(next) => node = next,
                None => break,
            }
            if node.is_terminal() {
                end = pos + ch.len_utf8();
            }
        }
        &word[..end]
    }

    /// Return every word in depth-first order.
    ///
    /// Computed on first use and cached; the lexicon does not change during
    /// a checking session so all later calls share one allocation.
    pub fn all_words(&self) -> &[String] {
        self.words
            .get_or_init(|| self.iter().map(|(word, _)| word).collect())
    }

    /// Iterate lazily over `(word, category)` pairs in depth-first order.
    ///
    /// Each call starts a fresh traversal.
    pub fn iter(&self) -> Entries<'_> {
        Entries {
            stack: vec![(&self.root, String::new())],
        }
    }

    /// Same traversal as [`Lexicon::all_words`], also yielding categories.
    pub fn all_words_with_category(&self) -> Entries<'_> {
        self.iter()
    }

    /// Insert every paradigm form of the stored roots.
    ///
    /// For each word tagged with a category the catalog knows, `word + suffix`
    /// is inserted for every suffix of that category, under the same tag.
    pub fn insert_full_forms(&mut self, catalog: &SuffixCatalog) {
        let roots: Vec<(String, Category)> = self.iter().collect();
        let before = self.len;
        for (root, category) in roots {
            if category.is_uncategorized() {
                continue;
            }
            let Some(suffix_category) = catalog.category(category) else {
                continue;
            };
            for suffix in suffix_category.suffixes() {
                let mut form = String::with_capacity(root.len() + suffix.len());
                form.push_str(&root);
                form.push_str(suffix);
                self.insert(&form, category);
            }
        }
        log::debug!("inserted {} full forms", self.len - before);
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the lexicon holds no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Follow `word` from the root, returning the node it ends at.
    fn walk(&self, word: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in word.chars() {
            node = node.child(ch)?;
        }
        Some(node)
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = (String, Category);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy depth-first iterator over lexicon entries.
///
/// Uses an explicit stack rather than recursion; children are pushed in
/// reverse so that they pop in ascending char order.
pub struct Entries<'a> {
    stack: Vec<(&'a TrieNode, String)>,
}

impl Iterator for Entries<'_> {
    type Item = (String, Category);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, prefix)) = self.stack.pop() {
            for (ch, child) in node.children().rev() {
                let mut path = String::with_capacity(prefix.len() + ch.len_utf8());
                path.push_str(&prefix);
                path.push(ch);
                self.stack.push((child, path));
            }
            if node.is_terminal() {
                let category = node.category().unwrap_or(Category::Uncategorized);
                return Some((prefix, category));
            }
        }
        None
    }
}
