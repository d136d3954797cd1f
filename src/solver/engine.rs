//! Main rack solver interface

use super::registry::DictionaryRegistry;
use crate::core::{Rack, ScoredWord};
use crate::lexicon::DEFAULT_MIN_LENGTH;
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

/// Number of words kept per dictionary
pub const DEFAULT_LIMIT: usize = 10;

/// Ranked words per dictionary name
pub type ResultSet = BTreeMap<String, Vec<ScoredWord>>;

/// Search parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Shortest word worth reporting
    pub min_length: usize,
    /// Words kept per dictionary after ranking
    pub limit: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Main rack solver
///
/// Searches every registered dictionary for words buildable from a rack and
/// ranks them by strength.
pub struct Solver<'a> {
    registry: &'a DictionaryRegistry,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    /// Create a solver with the default configuration
    #[must_use]
    pub fn new(registry: &'a DictionaryRegistry) -> Self {
        Self::with_config(registry, SolverConfig::default())
    }

    #[must_use]
    pub const fn with_config(registry: &'a DictionaryRegistry, config: SolverConfig) -> Self {
        Self { registry, config }
    }

    #[must_use]
    pub const fn registry(&self) -> &'a DictionaryRegistry {
        self.registry
    }

    #[must_use]
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    /// Find the best words for raw rack input
    ///
    /// Non-letters are ignored. Input that leaves no usable rack (empty, or
    /// longer than the rack limit) yields an empty list for every dictionary.
    ///
    /// # Examples
    /// ```
    /// use bookworm_solver::solver::{DictionaryRegistry, Solver};
    ///
    /// let mut registry = DictionaryRegistry::new();
    /// registry.register("animals", ["cat", "act", "bat"]);
    /// registry.register("metals", ["tin"]);
    ///
    /// let results = Solver::new(&registry).find_solutions("tac");
    /// let animals: Vec<&str> = results["animals"].iter().map(|w| w.word.as_str()).collect();
    /// assert_eq!(animals, ["act", "cat"]);
    /// assert!(results["metals"].is_empty());
    /// ```
    #[must_use]
    pub fn find_solutions(&self, letters: &str) -> ResultSet {
        match Rack::new(letters) {
            Ok(rack) => self.solve(&rack),
            Err(err) => {
                debug!(input = letters, error = %err, "unusable rack, returning empty results");
                self.empty_results()
            }
        }
    }

    /// Find the best words for a rack
    ///
    /// Dictionaries are searched in parallel. Every registered dictionary is
    /// present in the result, even when nothing matched.
    #[must_use]
    pub fn solve(&self, rack: &Rack) -> ResultSet {
        self.registry
            .indices()
            .par_iter()
            .map(|(name, index)| {
                let matches = index.search(rack, self.config.min_length);
                debug!(dictionary = %name, %rack, matches = matches.len(), "searched dictionary");
                (name.clone(), rank(matches, self.config.limit))
            })
            .collect()
    }

    /// Every registered dictionary mapped to an empty list
    fn empty_results(&self) -> ResultSet {
        self.registry
            .names()
            .map(|name| (name.to_string(), Vec::new()))
            .collect()
    }
}

/// Score, sort and truncate matches
///
/// Every match is scored and sorted before truncation, so the kept words are
/// the `limit` strongest overall.
#[must_use]
pub fn rank<I>(matches: I, limit: usize) -> Vec<ScoredWord>
where
    I: IntoIterator<Item = String>,
{
    let mut scored: Vec<ScoredWord> = matches.into_iter().map(ScoredWord::new).collect();
    scored.sort_unstable();
    scored.truncate(limit);
    scored
}

/// Sort already-scored words and keep the best `limit`
#[must_use]
pub fn rank_scored(mut scored: Vec<ScoredWord>, limit: usize) -> Vec<ScoredWord> {
    scored.sort_unstable();
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[ScoredWord]) -> Vec<&str> {
        list.iter().map(|w| w.word.as_str()).collect()
    }

    fn setup_registry() -> DictionaryRegistry {
        let mut registry = DictionaryRegistry::new();
        registry.register("animals", ["cat", "bat", "ant", "gnu", "eel", "tabby"]);
        registry.register("colors", ["tan", "teal", "red"]);
        registry.register("metals", ["zinc", "tin"]);
        registry
    }

    #[test]
    fn rank_orders_by_strength_then_word() {
        let scored = vec![
            ScoredWord {
                word: "cat".to_string(),
                strength: 3.0,
            },
            ScoredWord {
                word: "bat".to_string(),
                strength: 3.25,
            },
            ScoredWord {
                word: "ant".to_string(),
                strength: 2.0,
            },
        ];

        let ranked = rank_scored(scored, DEFAULT_LIMIT);
        assert_eq!(words(&ranked), ["bat", "cat", "ant"]);
    }

    #[test]
    fn rank_scores_matches() {
        let ranked = rank(["ant", "cat", "zax"].map(String::from), DEFAULT_LIMIT);
        assert_eq!(words(&ranked), ["zax", "cat", "ant"]);
        assert!((ranked[0].strength - 5.0).abs() < 1e-9);
    }

    #[test]
    fn rank_truncates_after_sorting() {
        // 15 matches with strengths 1.0 ..= 15.0
        let scored: Vec<ScoredWord> = (1..=15)
            .map(|i| ScoredWord {
                word: format!("w{i:02}"),
                strength: f64::from(i),
            })
            .collect();

        let ranked = rank_scored(scored, DEFAULT_LIMIT);
        assert_eq!(ranked.len(), 10);
        let strengths: Vec<f64> = ranked.iter().map(|w| w.strength).collect();
        let expected: Vec<f64> = (6..=15).rev().map(f64::from).collect();
        assert_eq!(strengths, expected);
    }

    #[test]
    fn rank_ties_are_alphabetical() {
        let ranked = rank(["tea", "eat", "ate"].map(String::from), DEFAULT_LIMIT);
        assert_eq!(words(&ranked), ["ate", "eat", "tea"]);
    }

    #[test]
    fn find_solutions_covers_every_dictionary() {
        let registry = setup_registry();
        let solver = Solver::new(&registry);

        let results = solver.find_solutions("tac");
        let names: Vec<&str> = results.keys().map(String::as_str).collect();
        assert_eq!(names, ["animals", "colors", "metals"]);

        assert_eq!(words(&results["animals"]), ["cat"]);
        assert!(results["colors"].is_empty());
        assert!(results["metals"].is_empty());
    }

    #[test]
    fn find_solutions_ranks_matches() {
        let registry = setup_registry();
        let solver = Solver::new(&registry);

        let results = solver.find_solutions("tabcn");
        assert_eq!(words(&results["animals"]), ["bat", "cat", "ant"]);
        assert_eq!(words(&results["colors"]), ["tan"]);
    }

    #[test]
    fn find_solutions_respects_multiplicity() {
        let registry = setup_registry();
        let solver = Solver::new(&registry);

        assert_eq!(words(&solver.find_solutions("tabby")["animals"]), ["tabby", "bat"]);
        assert_eq!(words(&solver.find_solutions("taby")["animals"]), ["bat"]);
    }

    #[test]
    fn find_solutions_empty_rack() {
        let registry = setup_registry();
        let solver = Solver::new(&registry);

        for input in ["", "   ", "1234"] {
            let results = solver.find_solutions(input);
            assert_eq!(results.len(), 3);
            assert!(results.values().all(Vec::is_empty));
        }
    }

    #[test]
    fn find_solutions_over_long_rack_is_empty() {
        let registry = setup_registry();
        let solver = Solver::new(&registry);

        let results = solver.find_solutions(&"cat".repeat(6));
        assert_eq!(results.len(), 3);
        assert!(results.values().all(Vec::is_empty));
    }

    #[test]
    fn find_solutions_truncates_to_limit() {
        let mut registry = DictionaryRegistry::new();
        // 15 distinct three-letter words over the rack "abcdef"
        let list = [
            "abc", "abd", "abe", "abf", "acd", "ace", "acf", "ade", "adf", "aef", "bcd", "bce",
            "bcf", "bde", "bdf",
        ];
        registry.register("letters", list);

        let solver = Solver::new(&registry);
        let results = solver.find_solutions("abcdef");
        let ranked = &results["letters"];
        assert_eq!(ranked.len(), 10);

        let mut expected = rank(list.map(String::from), usize::MAX);
        expected.truncate(10);
        assert_eq!(ranked, &expected);
    }

    #[test]
    fn custom_config() {
        let mut registry = DictionaryRegistry::new();
        registry.register("words", ["ox", "box", "boxes", "sox"]);

        let config = SolverConfig {
            min_length: 2,
            limit: 2,
        };
        let solver = Solver::with_config(&registry, config);
        let results = solver.find_solutions("boxes");

        assert_eq!(words(&results["words"]), ["boxes", "box"]);
        assert_eq!(solver.config(), config);
    }

    #[test]
    fn empty_registry_gives_empty_results() {
        let registry = DictionaryRegistry::new();
        assert!(Solver::new(&registry).find_solutions("abc").is_empty());
    }

    #[test]
    fn results_are_deterministic() {
        let (registry, _) = DictionaryRegistry::builtin();
        let solver = Solver::new(&registry);

        let first = solver.find_solutions("retainslodgcup");
        for _ in 0..5 {
            assert_eq!(solver.find_solutions("retainslodgcup"), first);
        }
    }

    #[test]
    fn builtin_dictionaries_find_known_words() {
        let (registry, _) = DictionaryRegistry::builtin();
        let solver = Solver::new(&registry);

        let results = solver.find_solutions("dlogrni");
        assert!(results["metals"].iter().any(|w| w.word == "gold"));
        assert!(results["metals"].iter().any(|w| w.word == "iron"));
        assert!(results["colors"].iter().any(|w| w.word == "gold"));
        assert!(results["words"].len() <= DEFAULT_LIMIT);
    }
}
