//! Dictionary registry
//!
//! Maps dictionary names to their lexicon indices. Built once at start-up and
//! only read afterwards.

use crate::lexicon::LexiconIndex;
use crate::wordlists::{DICTIONARIES, LoadError, loader};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

/// Named lexicon indices, iterated in name order
#[derive(Debug, Default, Clone)]
pub struct DictionaryRegistry {
    indices: BTreeMap<String, LexiconIndex>,
}

impl DictionaryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every bundled dictionary that parses
    ///
    /// Failures are returned alongside the registry instead of aborting the
    /// load; failed dictionaries are simply absent.
    #[must_use]
    pub fn builtin() -> (Self, Vec<LoadError>) {
        let mut registry = Self::new();
        let failures = registry.load_all(DICTIONARIES.iter().copied());
        (registry, failures)
    }

    /// Build and register a dictionary from words
    ///
    /// Replaces any dictionary already registered under `name`.
    pub fn register<I, S>(&mut self, name: &str, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index: LexiconIndex = words.into_iter().collect();
        info!(dictionary = name, entries = index.len(), "dictionary loaded");
        self.indices.insert(name.to_string(), index);
    }

    /// Parse a JSON word list and register it
    ///
    /// The index is only registered once fully built, so a failure leaves the
    /// registry exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the word list is malformed.
    pub fn load_json(&mut self, name: &str, json: &str) -> Result<(), LoadError> {
        let words = loader::parse_word_list(name, json)?;
        self.register(name, &words);
        Ok(())
    }

    /// Read a JSON word list from disk and register it
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the file cannot be read or is malformed.
    pub fn load_file(&mut self, name: &str, path: &Path) -> Result<(), LoadError> {
        let words = loader::load_from_file(name, path)?;
        self.register(name, &words);
        Ok(())
    }

    /// Load several JSON word lists, collecting failures
    pub fn load_all<'a, I>(&mut self, sources: I) -> Vec<LoadError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        sources
            .into_iter()
            .filter_map(|(name, json)| self.load_json(name, json).err())
            .inspect(|err| warn!(dictionary = err.dictionary(), error = %err, "dictionary failed to load"))
            .collect()
    }

    /// Index registered under `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LexiconIndex> {
        self.indices.get(name)
    }

    /// Registered names, in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.indices.keys().map(String::as_str)
    }

    /// `(name, index)` pairs, in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LexiconIndex)> {
        self.indices.iter().map(|(name, index)| (name.as_str(), index))
    }

    pub(crate) const fn indices(&self) -> &BTreeMap<String, LexiconIndex> {
        &self.indices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
