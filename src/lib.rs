//! Bookworm Solver
//!
//! Finds the strongest words that can be spelled from a rack of letter tiles,
//! searching several named dictionaries at once.
//!
//! # Quick Start
//!
//! ```rust
//! use bookworm_solver::solver::{DictionaryRegistry, Solver};
//!
//! let mut registry = DictionaryRegistry::new();
//! registry.register("animals", ["cab", "bat", "act"]);
//!
//! let solver = Solver::new(&registry);
//! let results = solver.find_solutions("tcab");
//!
//! let words: Vec<&str> = results["animals"].iter().map(|w| w.word.as_str()).collect();
//! // cab scores 3.5; act and bat tie at 3.25 and fall back to word order
//! assert_eq!(words, ["cab", "act", "bat"]);
//! ```

// Core domain types
pub mod core;

// Trie-backed word index
pub mod lexicon;

// Dictionary registry and search engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
