//! Rack representation
//!
//! A Rack is the multiset of letters available for one search, stored as
//! per-letter counts so each branch of a traversal can carry its own copy.

use std::fmt;
use thiserror::Error;

/// Maximum number of letters a rack may hold
pub const MAX_RACK_LEN: usize = 16;

/// Number of distinct rack letters (`a`..=`z`)
pub const ALPHABET_LEN: usize = 26;

/// Per-letter counts, indexed by `letter - b'a'`
pub type LetterCounts = [u8; ALPHABET_LEN];

/// A bounded multiset of lowercase ASCII letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rack {
    counts: LetterCounts,
    len: usize,
}

/// Error type for unusable rack input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RackError {
    #[error("rack contains no letters")]
    Empty,
    #[error("rack may hold at most {MAX_RACK_LEN} letters, got {0}")]
    TooLong(usize),
}

impl Rack {
    /// Create a rack from user input
    ///
    /// Every non-alphabetic character is stripped and the rest lowercased.
    ///
    /// # Errors
    /// Returns `RackError` if:
    /// - No letters remain after sanitizing
    /// - More than [`MAX_RACK_LEN`] letters remain
    ///
    /// # Examples
    /// ```
    /// use bookworm_solver::core::{Rack, RackError};
    ///
    /// let rack = Rack::new("E e-L!").unwrap();
    /// assert_eq!(rack.len(), 3);
    /// assert_eq!(rack.count(b'e'), 2);
    ///
    /// assert_eq!(Rack::new("123 ?"), Err(RackError::Empty));
    /// ```
    pub fn new(input: &str) -> Result<Self, RackError> {
        let letters = sanitize(input);

        if letters.is_empty() {
            return Err(RackError::Empty);
        }
        if letters.len() > MAX_RACK_LEN {
            return Err(RackError::TooLong(letters.len()));
        }

        let mut counts = [0; ALPHABET_LEN];
        for byte in letters.bytes() {
            counts[usize::from(byte - b'a')] += 1;
        }

        Ok(Self {
            counts,
            len: letters.len(),
        })
    }

    /// Total number of letters, counting repeats
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

    /// How many copies of `letter` the rack holds
    ///
    /// Uppercase letters are folded; anything outside `a..=z` counts as zero.
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u8 {
        letter_index(char::from(letter)).map_or(0, |idx| self.counts[idx])
    }

    /// Per-letter counts for traversal
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> LetterCounts {
        self.counts
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, &count) in (b'a'..=b'z').zip(self.counts.iter()) {
            for _ in 0..count {
                write!(f, "{}", char::from(letter))?;
            }
        }
        Ok(())
    }
}

/// Strip everything but ASCII letters and lowercase the remainder
#[must_use]
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Index of a rack letter in [`LetterCounts`]
#[inline]
#[must_use]
pub fn letter_index(c: char) -> Option<usize> {
    let c = c.to_ascii_lowercase();
    c.is_ascii_lowercase().then(|| (c as u8 - b'a') as usize)
}
