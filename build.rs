//! Build script to generate embedded sample data
//!
//! Reads the sample dictionary and game files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Generate sample dictionary
    generate_line_list(
        "data/words5.txt",
        &Path::new(&out_dir).join("words.rs"),
        "SAMPLE_WORDS",
        "Sample dictionary of 2-5 letter words, in rank order",
        // Ranks are line numbers, so blank lines stay and fail the parse
        true,
    );

    // Generate sample games
    generate_line_list(
        "data/games.txt",
        &Path::new(&out_dir).join("games.rs"),
        "SAMPLE_GAMES",
        "Sample 5x5 games, one 25-letter grid per entry",
        false,
    );

    // Rebuild if sample data changes
    println!("cargo:rerun-if-changed=data/words5.txt");
    println!("cargo:rerun-if-changed=data/games.txt");
}

fn generate_line_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
    keep_blank: bool,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| keep_blank || !line.is_empty())
        .collect();
    let count = lines.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated sample data").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for line in lines {
        writeln!(output, "    \"{line}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
