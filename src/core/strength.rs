//! Word strength scoring
//!
//! Strength is the sum of per-letter weights, scanned left to right, with the
//! "qu" digraph consumed as a single unit.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Weight of the "qu" digraph
pub const QU_WEIGHT: f64 = 2.75;

/// Weight of a single letter
///
/// Case-insensitive. Characters outside the table weigh nothing.
#[must_use]
pub const fn letter_weight(c: char) -> f64 {
    match c.to_ascii_lowercase() {
        'a' | 'd' | 'e' | 'g' | 'i' | 'l' | 'n' | 'o' | 'r' | 's' | 't' | 'u' => 1.0,
        'b' | 'c' | 'f' | 'h' | 'm' | 'p' => 1.25,
        'v' | 'w' | 'y' => 1.5,
        'j' | 'k' | 'q' => 1.75,
        'x' | 'z' => 2.0,
        _ => 0.0,
    }
}

/// One scoring step: either a single character or the "qu" digraph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreUnit<'a> {
    pub text: &'a str,
    pub weight: f64,
}

/// Iterator over the scoring units of a word
pub struct ScoreUnits<'a> {
    word: &'a str,
    pos: usize,
}

impl<'a> Iterator for ScoreUnits<'a> {
    type Item = ScoreUnit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.word[self.pos..];
        let mut chars = rest.chars();
        let first = chars.next()?;

        // Greedy on the digraph: "qu" always goes first
        if first.eq_ignore_ascii_case(&'q')
            && chars.next().is_some_and(|c| c.eq_ignore_ascii_case(&'u'))
        {
            self.pos += 2;
            return Some(ScoreUnit {
                text: &rest[..2],
                weight: QU_WEIGHT,
            });
        }

        let width = first.len_utf8();
        self.pos += width;
        Some(ScoreUnit {
            text: &rest[..width],
            weight: letter_weight(first),
        })
    }
}

/// Split a word into its scoring units
///
/// # Examples
/// ```
/// use bookworm_solver::core::score_units;
///
/// let units: Vec<&str> = score_units("quiz").map(|u| u.text).collect();
/// assert_eq!(units, ["qu", "i", "z"]);
/// ```
#[must_use]
pub const fn score_units(word: &str) -> ScoreUnits<'_> {
    ScoreUnits { word, pos: 0 }
}

/// Calculate the strength of a word
///
/// # Examples
/// ```
/// use bookworm_solver::core::strength;
///
/// assert!((strength("quick") - 6.75).abs() < f64::EPSILON);
/// assert!((strength("aa") - 2.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn strength(word: &str) -> f64 {
    score_units(word).map(|unit| unit.weight).sum()
}

/// A word paired with its strength
///
/// Ordered strongest first, then alphabetically, so sorting a slice ascending
/// yields display order.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredWord {
    pub word: String,
    pub strength: f64,
}

impl ScoredWord {
    /// Score a word
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        let strength = strength(&word);
        Self { word, strength }
    }
}

impl PartialEq for ScoredWord {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredWord {}

impl PartialOrd for ScoredWord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredWord {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .strength
            .total_cmp(&self.strength)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl fmt::Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1})", self.word, self.strength)
    }
}
