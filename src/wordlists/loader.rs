//! Input file loading
//!
//! Reads the dictionary and game files and hands their lines to the core parsers.
//! Any malformed line aborts the load before scoring starts.

use crate::core::Grid;
use crate::dictionary::Dictionary;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Load a dictionary file, one word per line
///
/// # Errors
///
/// Returns an error if the file cannot be read or any line is not a 2-5 letter
/// uppercase word. The message names the file, line and offending text.
///
/// # Examples
/// ```no_run
/// use grid_words::wordlists::loader::load_dictionary;
///
/// let dict = load_dictionary("words5.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary {}", path.display()))?;

    let dictionary = Dictionary::parse(content.lines())
        .with_context(|| format!("Malformed dictionary {}", path.display()))?;

    debug!(
        "Loaded {} words ({} distinct) from {}",
        dictionary.len(),
        dictionary.unique_len(),
        path.display()
    );
    Ok(dictionary)
}

/// Load a games file, one 25-letter grid per line
///
/// Blank lines are skipped and do not consume a game number.
///
/// # Errors
///
/// Returns an error if the file cannot be read or any non-blank line is not
/// exactly 25 uppercase letters.
pub fn load_games<P: AsRef<Path>>(path: P) -> Result<Vec<Grid>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read games {}", path.display()))?;

    let grids = Grid::parse_all(content.lines())
        .with_context(|| format!("Malformed games file {}", path.display()))?;

    debug!("Loaded {} games from {}", grids.len(), path.display());
    Ok(grids)
}

/// Parse the embedded sample dictionary
///
/// # Errors
///
/// Only fails if the embedded data is malformed.
pub fn sample_dictionary() -> Result<Dictionary> {
    Dictionary::parse(super::SAMPLE_WORDS).context("Malformed embedded sample dictionary")
}

/// Parse the embedded sample games
///
/// # Errors
///
/// Only fails if the embedded data is malformed.
pub fn sample_games() -> Result<Vec<Grid>> {
    Grid::parse_all(super::SAMPLE_GAMES).context("Malformed embedded sample games")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FormatError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_dictionary_with_crlf() {
        let file = write_temp("CAT\r\nCATS\r\nQUIZ\r\n");
        let dict = load_dictionary(file.path()).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.rank_of("QUIZ"), Some(3));
    }

    #[test]
    fn malformed_dictionary_surfaces_line() {
        let file = write_temp("CAT\nC4T\n");
        let err = load_dictionary(file.path()).unwrap_err();

        let format = err.downcast_ref::<FormatError>().unwrap();
        assert_eq!(format.line(), 2);
        assert_eq!(format.text(), "C4T");
        assert!(format!("{err:#}").contains("C4T"));
    }

    #[test]
    fn loads_games_skipping_blank_lines() {
        let file = write_temp(&format!("{}\n\n{}\n", "A".repeat(25), "B".repeat(25)));
        let grids = load_games(file.path()).unwrap();
        assert_eq!(grids.len(), 2);
        assert_eq!(grids[1].game(), 2);
        assert_eq!(grids[1].letter(0), b'B');
    }

    #[test]
    fn malformed_game_fails_whole_load() {
        let file = write_temp(&format!("{}\nSHORT\n", "A".repeat(25)));
        let err = load_games(file.path()).unwrap_err();
        assert!(err.downcast_ref::<FormatError>().is_some());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_dictionary("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("Failed to read dictionary"));
    }

    #[test]
    fn embedded_samples_parse() {
        assert_eq!(sample_dictionary().unwrap().len(), super::super::SAMPLE_WORDS_COUNT);
        assert_eq!(sample_games().unwrap().len(), super::super::SAMPLE_GAMES_COUNT);
    }
}
