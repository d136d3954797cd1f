//! Core domain types for rack solving
//!
//! This module contains the fundamental domain types with no I/O.
//! Racks and strength scoring are pure functions of their input.

mod rack;
mod strength;

pub use rack::{ALPHABET_LEN, LetterCounts, MAX_RACK_LEN, Rack, RackError, letter_index, sanitize};
pub use strength::{QU_WEIGHT, ScoreUnit, ScoreUnits, ScoredWord, letter_weight, score_units, strength};
