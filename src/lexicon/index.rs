//! Lexicon index and constrained search
//!
//! A `LexiconIndex` holds one dictionary as a prefix tree. Searching walks the
//! tree guided by the letters still left in the rack, so only prefixes that
//! exist in the dictionary are ever explored.

use super::trie::TrieNode;
use crate::core::{LetterCounts, Rack, letter_index};

/// Minimum word length used by the rack solver
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Prefix tree over one dictionary
#[derive(Debug, Default, Clone)]
pub struct LexiconIndex {
    root: TrieNode,
    len: usize,
}

impl LexiconIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word
    ///
    /// The word is trimmed and lowercased. Empty or whitespace-only input is
    /// ignored, and inserting an existing word leaves the index unchanged.
    pub fn insert(&mut self, word: &str) {
        let word = word.trim();
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for c in word.chars().flat_map(char::to_lowercase) {
            node = node.child_or_insert(c);
        }

        if node.mark_word() {
            self.len += 1;
        }
    }

    /// Whether `word` was inserted (case-insensitive)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        !word.is_empty() && self.root.descend(&word).is_some_and(TrieNode::is_word)
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Find every word buildable from the rack
    ///
    /// Each rack letter may be used at most as many times as it occurs in the
    /// rack. Only words of at least `min_length` characters are returned. The
    /// result holds each word once, in no particular order.
    ///
    /// # Examples
    /// ```
    /// use bookworm_solver::core::Rack;
    /// use bookworm_solver::lexicon::LexiconIndex;
    ///
    /// let index: LexiconIndex = ["eel", "lee", "eleven"].into_iter().collect();
    /// let rack = Rack::new("eel").unwrap();
    ///
    /// let mut found = index.search(&rack, 3);
    /// found.sort();
    /// assert_eq!(found, ["eel", "lee"]);
    /// ```
    #[must_use]
    pub fn search(&self, rack: &Rack, min_length: usize) -> Vec<String> {
        let mut found = Vec::new();
        if rack.is_empty() {
            return found;
        }

        let mut path = String::with_capacity(rack.len());
        collect_words(&self.root, &mut path, rack.counts(), min_length, &mut found);
        found
    }

    /// Like [`search`](Self::search), taking raw letters
    ///
    /// Non-letters are ignored. Input that is empty or over-long yields no
    /// matches rather than an error.
    #[must_use]
    pub fn search_letters(&self, letters: &str, min_length: usize) -> Vec<String> {
        Rack::new(letters).map_or_else(|_| Vec::new(), |rack| self.search(&rack, min_length))
    }
}

/// Backtracking walk over the tree
///
/// `remaining` is passed by value so each branch sees its own letter counts.
/// Every node is reached through exactly one path, so no word is recorded twice.
fn collect_words(
    node: &TrieNode,
    path: &mut String,
    remaining: LetterCounts,
    min_length: usize,
    found: &mut Vec<String>,
) {
    // path is ASCII, so byte length equals character count
    if node.is_word() && path.len() >= min_length {
        found.push(path.clone());
    }

    for (c, child) in node.children() {
        let Some(idx) = letter_index(c) else {
            continue;
        };
        if remaining[idx] == 0 {
            continue;
        }

        let mut next = remaining;
        next[idx] -= 1;

        path.push(c);
        collect_words(child, path, next, min_length, found);
        path.pop();
    }
}

impl<S: AsRef<str>> FromIterator<S> for LexiconIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl<S: AsRef<str>> Extend<S> for LexiconIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}
