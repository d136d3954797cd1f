//! Trie node storage

use rustc_hash::FxHashMap;

/// A node in the prefix tree
///
/// Children are owned exclusively by their parent; the index root owns the
/// whole tree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    is_word: bool,
}

impl TrieNode {
    /// Child reached by `c`, if any
    #[inline]
    #[must_use]
    pub fn child(&self, c: char) -> Option<&Self> {
        self.children.get(&c)
    }

    /// Child reached by `c`, created when missing
    #[inline]
    pub(crate) fn child_or_insert(&mut self, c: char) -> &mut Self {
        self.children.entry(c).or_default()
    }

    /// All `(letter, child)` edges, in no particular order
    #[inline]
    pub fn children(&self) -> impl Iterator<Item = (char, &Self)> {
        self.children.iter().map(|(&c, node)| (c, node))
    }

    /// Whether a complete word ends at this node
    #[inline]
    #[must_use]
    pub const fn is_word(&self) -> bool {
        self.is_word
    }

    /// Mark this node as a word end
    ///
    /// Returns `true` if the node was not already a word end.
    #[inline]
    pub(crate) fn mark_word(&mut self) -> bool {
        !std::mem::replace(&mut self.is_word, true)
    }

    /// Follow `path` from this node
    #[must_use]
    pub fn descend(&self, path: &str) -> Option<&Self> {
        path.chars().try_fold(self, |node, c| node.child(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_empty() {
        let node = TrieNode::default();
        assert!(!node.is_word());
        assert_eq!(node.children().count(), 0);
    }

    #[test]
    fn child_or_insert_reuses_existing() {
        let mut root = TrieNode::default();
        root.child_or_insert('a').mark_word();
        root.child_or_insert('a');

        assert_eq!(root.children().count(), 1);
        assert!(root.child('a').unwrap().is_word());
    }

    #[test]
    fn mark_word_reports_first_mark_only() {
        let mut node = TrieNode::default();
        assert!(node.mark_word());
        assert!(!node.mark_word());
        assert!(node.is_word());
    }

    #[test]
    fn descend_follows_path() {
        let mut root = TrieNode::default();
        root.child_or_insert('o')
            .child_or_insert('x')
            .mark_word();

        assert!(root.descend("ox").unwrap().is_word());
        assert!(!root.descend("o").unwrap().is_word());
        assert!(root.descend("oxe").is_none());
        assert_eq!(root.descend(""), Some(&root));
    }
}
