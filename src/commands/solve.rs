//! Rack solving command
//!
//! Validates a rack at the input boundary and solves it against every
//! registered dictionary.

use crate::core::{Rack, RackError};
use crate::solver::{ResultSet, Solver};
use std::time::{Duration, Instant};

/// Result of solving one rack
#[derive(Debug)]
pub struct SolveResult {
    /// The rack letters, sorted
    pub rack: String,
    pub results: ResultSet,
    pub duration: Duration,
}

impl SolveResult {
    /// Total words kept across all dictionaries
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.results.values().map(Vec::len).sum()
    }
}

/// Solve raw rack input
///
/// Unlike [`Solver::find_solutions`], unusable input is reported instead of
/// being turned into empty results, so the caller can tell the user.
///
/// # Errors
///
/// Returns `RackError` if the input holds no letters or too many letters.
pub fn solve_rack(letters: &str, solver: &Solver) -> Result<SolveResult, RackError> {
    let rack = Rack::new(letters)?;

    let start = Instant::now();
    let results = solver.solve(&rack);
    let duration = start.elapsed();

    Ok(SolveResult {
        rack: rack.to_string(),
        results,
        duration,
    })
}
