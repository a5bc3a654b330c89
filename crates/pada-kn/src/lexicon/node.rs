// Prefix tree node

use std::collections::BTreeMap;

use pada_core::Category;

/// A single node of the lexicon's prefix tree.
///
/// Children are kept in a `BTreeMap` so that depth-first enumeration visits
/// them in ascending code point order. That order is what the suggestion
/// ranker uses to break distance ties, so it has to be stable across runs.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
    category: Option<Category>,
}

impl TrieNode {
    /// Create an empty, non-terminal node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the child reached by `ch`, if any.
    #[inline]
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Return the child reached by `ch`, creating it when missing.
    pub(crate) fn child_or_insert(&mut self, ch: char) -> &mut TrieNode {
        self.children.entry(ch).or_default()
    }

    /// Iterate over `(char, child)` pairs in ascending char order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&ch, node)| (ch, node))
    }

    /// Whether a dictionary word ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Category tag of the word ending here. `None` on non-terminal nodes.
    #[inline]
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Mark this node as the end of a word and (re)tag it.
    ///
    /// Returns `true` if the node was not terminal before.
    pub(crate) fn mark_terminal(&mut self, category: Category) -> bool {
        let was_terminal = self.terminal;
        self.terminal = true;
        self.category = Some(category);
        !was_terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_empty() {
        let node = TrieNode::new();
        assert!(!node.is_terminal());
        assert_eq!(node.category(), None);
        assert_eq!(node.children().count(), 0);
    }

    #[test]
    fn child_or_insert_reuses_existing() {
        let mut node = TrieNode::new();
        node.child_or_insert('ಕ').mark_terminal(Category::Id(1));
        node.child_or_insert('ಕ');
        assert_eq!(node.children().count(), 1);
        assert!(node.child('ಕ').is_some_and(TrieNode::is_terminal));
    }

    #[test]
    fn mark_terminal_reports_first_marking() {
        let mut node = TrieNode::new();
        assert!(node.mark_terminal(Category::Id(2)));
        assert!(!node.mark_terminal(Category::Id(3)));
        assert_eq!(node.category(), Some(Category::Id(3)));
    }

    #[test]
    fn children_iterate_in_char_order() {
        let mut node = TrieNode::new();
        node.child_or_insert('ನ');
        node.child_or_insert('ಅ');
        node.child_or_insert('ಕ');
        let order: Vec<char> = node.children().map(|(ch, _)| ch).collect();
        assert_eq!(order, vec!['ಅ', 'ಕ', 'ನ']);
    }
}
