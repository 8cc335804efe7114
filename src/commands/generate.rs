//! Generate command
//!
//! Produces random 25-letter boards for stress testing and benchmarking.

use crate::core::{FormatError, GRID_CELLS, Grid};
use rand::Rng;

/// Approximate English letter frequencies (per mille), A-Z
const LETTER_WEIGHTS: [u32; 26] = [
    82, 15, 28, 43, 127, 22, 20, 61, 70, 2, 8, 40, 24, 67, 75, 19, 1, 60, 63, 91, 28, 10, 24,
    2, 20, 1,
];

/// Draw one letter using `LETTER_WEIGHTS`
fn random_letter<R: Rng>(rng: &mut R) -> u8 {
    let total: u32 = LETTER_WEIGHTS.iter().sum();
    let mut pick = rng.random_range(0..total);
    for (offset, &weight) in LETTER_WEIGHTS.iter().enumerate() {
        if pick < weight {
            return b'A' + offset as u8;
        }
        pick -= weight;
    }
    b'Z'
}

/// Generate `count` random game lines
///
/// # Examples
/// ```
/// use grid_words::commands::generate_games;
///
/// let games = generate_games(3, &mut rand::rng());
/// assert_eq!(games.len(), 3);
/// assert!(games.iter().all(|g| g.len() == 25));
/// ```
pub fn generate_games<R: Rng>(count: usize, rng: &mut R) -> Vec<String> {
    (0..count)
        .map(|_| {
            (0..GRID_CELLS)
                .map(|_| random_letter(rng) as char)
                .collect()
        })
        .collect()
}

/// Generate `count` random boards, numbered from 1
///
/// # Errors
/// Returns `FormatError` if a generated line is not a valid board. Lines come
/// from `LETTER_WEIGHTS`, so this only fails if that table is broken.
pub fn generate_grids<R: Rng>(count: usize, rng: &mut R) -> Result<Vec<Grid>, FormatError> {
    Grid::parse_all(generate_games(count, rng))
}
