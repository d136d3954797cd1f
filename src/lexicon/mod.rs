//! Lexicon index
//!
//! Prefix trees over word lists, searched under rack constraints.

mod index;
mod trie;

pub use index::{DEFAULT_MIN_LENGTH, LexiconIndex};
pub use trie::TrieNode;
