//! Word analysis command
//!
//! Breaks a word's strength down unit by unit and reports which dictionaries
//! contain it.

use crate::core::{score_units, strength};
use crate::solver::DictionaryRegistry;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    /// Scoring units in order, with their weights
    pub units: Vec<(String, f64)>,
    pub strength: f64,
    /// Dictionaries that contain the word
    pub found_in: Vec<String>,
}

/// Analyze the strength of a word
///
/// # Errors
///
/// Returns an error if the word is empty or whitespace only.
pub fn analyze_word(word: &str, registry: &DictionaryRegistry) -> Result<AnalysisResult, String> {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return Err("Word must not be empty".to_string());
    }

    let units = score_units(&word)
        .map(|unit| (unit.text.to_string(), unit.weight))
        .collect();

    let found_in = registry
        .iter()
        .filter(|(_, index)| index.contains(&word))
        .map(|(name, _)| name.to_string())
        .collect();

    Ok(AnalysisResult {
        strength: strength(&word),
        word,
        units,
        found_in,
    })
}
