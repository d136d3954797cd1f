//! Word lists for rack solving
//!
//! Bundled dictionaries are embedded at build time as JSON text and parsed at
//! start-up, so one malformed list cannot take the others down with it.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARIES, DICTIONARY_COUNT};
pub use loader::LoadError;

/// JSON text of a bundled dictionary
#[must_use]
pub fn builtin(name: &str) -> Option<&'static str> {
    DICTIONARIES
        .iter()
        .find(|(dict_name, _)| *dict_name == name)
        .map(|&(_, json)| json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::parse_word_list;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARIES.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn expected_dictionaries() {
        let names: Vec<&str> = DICTIONARIES.iter().map(|&(name, _)| name).collect();
        assert_eq!(names, ["colors", "mammals", "metals", "words"]);
    }

    #[test]
    fn bundled_lists_parse() {
        for &(name, json) in DICTIONARIES {
            let words = parse_word_list(name, json).unwrap();
            assert!(!words.is_empty(), "dictionary '{name}' is empty");
        }
    }

    #[test]
    fn bundled_words_are_lowercase() {
        for &(name, json) in DICTIONARIES {
            for word in parse_word_list(name, json).unwrap() {
                assert!(
                    word.chars().all(|c| c.is_ascii_lowercase()),
                    "'{word}' in '{name}' contains non-lowercase chars"
                );
            }
        }
    }

    #[test]
    fn builtin_lookup() {
        assert!(builtin("metals").is_some_and(|json| json.contains("\"gold\"")));
        assert!(builtin("planets").is_none());
    }
}
