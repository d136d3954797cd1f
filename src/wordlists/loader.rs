//! Word list loading utilities
//!
//! Dictionaries arrive as JSON arrays of strings, either from the embedded
//! table or from files named on the command line.

use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Error raised while loading one dictionary
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dictionary '{name}': malformed word list: {source}")]
    Malformed {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("dictionary '{name}': cannot read {}: {source}", .path.display())]
    Io {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Name of the dictionary that failed
    #[must_use]
    pub fn dictionary(&self) -> &str {
        match self {
            Self::Malformed { name, .. } | Self::Io { name, .. } => name,
        }
    }
}

/// Parse a JSON word list
///
/// Entries are trimmed; blank strings and non-string entries are skipped.
///
/// # Errors
///
/// Returns `LoadError::Malformed` if the text is not a JSON array.
///
/// # Examples
/// ```
/// use bookworm_solver::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("metals", r#"["iron", " tin ", "", 7]"#).unwrap();
/// assert_eq!(words, ["iron", "tin"]);
///
/// assert!(parse_word_list("metals", "{\"iron\": 1}").is_err());
/// ```
pub fn parse_word_list(name: &str, json: &str) -> Result<Vec<String>, LoadError> {
    let entries: Vec<Value> = serde_json::from_str(json).map_err(|source| LoadError::Malformed {
        name: name.to_string(),
        source,
    })?;

    let total = entries.len();
    let words: Vec<String> = entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(word) => {
                let trimmed = word.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            _ => None,
        })
        .collect();

    if words.len() < total {
        debug!(
            dictionary = name,
            skipped = total - words.len(),
            "skipped blank or non-string entries"
        );
    }

    Ok(words)
}

/// Load a word list from a JSON file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or
/// `LoadError::Malformed` if it is not a JSON array.
pub fn load_from_file<P: AsRef<Path>>(name: &str, path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        name: name.to_string(),
        path: path.to_path_buf(),
        source,
    })?;

    parse_word_list(name, &content)
}

/// Parse a `NAME=PATH` dictionary argument
///
/// Without `=`, the name is taken from the file stem.
///
/// # Errors
///
/// Returns an error message if the name or path is empty.
///
/// # Examples
/// ```
/// use bookworm_solver::wordlists::loader::parse_source_arg;
/// use std::path::PathBuf;
///
/// let (name, path) = parse_source_arg("fruit=lists/fruit.json").unwrap();
/// assert_eq!(name, "fruit");
/// assert_eq!(path, PathBuf::from("lists/fruit.json"));
///
/// let (name, _) = parse_source_arg("lists/birds.json").unwrap();
/// assert_eq!(name, "birds");
/// ```
pub fn parse_source_arg(arg: &str) -> Result<(String, PathBuf), String> {
    let (name, path) = match arg.split_once('=') {
        Some((name, path)) => (name.trim().to_string(), PathBuf::from(path.trim())),
        None => {
            let path = PathBuf::from(arg.trim());
            let name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default()
                .to_string();
            (name, path)
        }
    };

    if name.is_empty() {
        return Err(format!("missing dictionary name in '{arg}'"));
    }
    if path.as_os_str().is_empty() {
        return Err(format!("missing dictionary path in '{arg}'"));
    }

    Ok((name, path))
}
