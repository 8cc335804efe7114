//! Parallel scoring across boards
//!
//! Boards share nothing but read-only references to the index and path template,
//! so each one is an independent rayon task. Indexed collection restores input order.

use super::matcher::{Match, match_board};
use crate::core::{Grid, PathTemplate};
use crate::dictionary::WordIndex;
use rayon::prelude::*;

/// Result of scoring one board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardResult {
    pub game: usize,
    pub matches: Vec<Match>,
    pub total: u32,
}

impl BoardResult {
    fn new(game: usize, matches: Vec<Match>) -> Self {
        let total = matches.iter().map(|m| m.score).sum();
        Self {
            game,
            matches,
            total,
        }
    }
}

/// Results for every board, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSummary {
    pub boards: Vec<BoardResult>,
    pub total: u64,
}

impl ScoreSummary {
    fn from_boards(boards: Vec<BoardResult>) -> Self {
        let total = boards.iter().map(|b| u64::from(b.total)).sum();
        Self { boards, total }
    }

    /// Number of matches across all boards
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.boards.iter().map(|b| b.matches.len()).sum()
    }
}

/// Score a single board
pub fn score_board<I: WordIndex>(grid: &Grid, template: &PathTemplate, index: &I) -> BoardResult {
    BoardResult::new(grid.game(), match_board(grid, template, index))
}

/// Score all boards on the current rayon pool
///
/// # Examples
/// ```
/// use grid_words::core::{Grid, PathTemplate};
/// use grid_words::dictionary::{Dictionary, TrieIndex};
/// use grid_words::scoring::score_boards;
///
/// let dict = Dictionary::parse(["AA"]).unwrap();
/// let index = TrieIndex::from_dictionary(&dict);
/// let grids = vec![Grid::new(1, &"A".repeat(25)).unwrap()];
///
/// let summary = score_boards(&grids, &PathTemplate::standard(), &index);
/// assert_eq!(summary.total, 288);
/// ```
pub fn score_boards<I: WordIndex>(grids: &[Grid], template: &PathTemplate, index: &I) -> ScoreSummary {
    let boards: Vec<BoardResult> = grids
        .par_iter()
        .map(|grid| score_board(grid, template, index))
        .collect();

    ScoreSummary::from_boards(boards)
}
