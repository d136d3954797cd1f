//! Build script to embed the bundled dictionaries
//!
//! Scans `data/*.json` and generates a `(name, json)` table so each word list
//! is compiled into the binary. Parsing happens at runtime so a malformed list
//! only fails its own dictionary.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let data_dir = Path::new(&manifest_dir).join("data");

    generate_dictionary_table(&data_dir, &Path::new(&out_dir).join("dictionaries.rs"));

    // Rebuild if a word list is added, removed or edited
    println!("cargo:rerun-if-changed=data");
}

fn generate_dictionary_table(data_dir: &Path, output_path: &Path) {
    let mut sources: Vec<PathBuf> = fs::read_dir(data_dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", data_dir.display()))
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    sources.sort();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dictionary table").unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "/// Bundled dictionaries as `(name, json word list)` pairs, sorted by name"
    )
    .unwrap();
    writeln!(output, "pub const DICTIONARIES: &[(&str, &str)] = &[").unwrap();

    for path in &sources {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_else(|| panic!("Non UTF-8 file name: {}", path.display()));
        println!("cargo:rerun-if-changed={}", path.display());
        writeln!(output, "    ({name:?}, include_str!({:?})),", path.display().to_string()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of bundled dictionaries").unwrap();
    writeln!(output, "pub const DICTIONARY_COUNT: usize = {};", sources.len()).unwrap();
}
