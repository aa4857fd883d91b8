//! Build script to generate the embedded word lists
//!
//! Reads `data/fallback.txt` into a const array and embeds `data/words.json`
//! as the default dictionary.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/fallback.txt",
        &Path::new(&out_dir).join("fallback.rs"),
        "FALLBACK",
        "Built-in words used when the external dictionary cannot be loaded",
    );

    generate_bundled_dictionary(
        "data/words.json",
        &Path::new(&out_dir).join("bundled.rs"),
        "BUNDLED_DICTIONARY",
    );

    println!("cargo:rerun-if-changed=data/fallback.txt");
    println!("cargo:rerun-if-changed=data/words.json");
}

fn generate_bundled_dictionary(input_path: &str, output_path: &Path, const_name: &str) {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let source = Path::new(&manifest_dir).join(input_path);
    assert!(source.exists(), "Missing {}", source.display());

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dictionary").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Dictionary JSON shipped with the game, used when none is configured").unwrap();
    writeln!(
        output,
        "pub const {const_name}: &str = include_str!({:?});",
        source.display().to_string()
    )
    .unwrap();
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|line| !line.is_empty())
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
}
