//! Rack solving
//!
//! This module owns the dictionary registry and the search engine that ranks
//! words per dictionary.

mod engine;
mod registry;

pub use engine::{DEFAULT_LIMIT, ResultSet, Solver, SolverConfig, rank, rank_scored};
pub use registry::DictionaryRegistry;
