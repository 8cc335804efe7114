//! Main scoring interface

use super::aggregate::{BoardResult, ScoreSummary, score_board, score_boards};
use crate::core::{Grid, PathTemplate};
use crate::dictionary::WordIndex;
use rayon::ThreadPool;

/// Board scorer
///
/// Borrows a finished index and path template; neither is mutable once scoring starts.
pub struct Scorer<'a, I: WordIndex> {
    index: &'a I,
    template: &'a PathTemplate,
}

impl<'a, I: WordIndex> Scorer<'a, I> {
    /// Create a new scorer over a built index and template
    pub const fn new(index: &'a I, template: &'a PathTemplate) -> Self {
        Self { index, template }
    }

    pub const fn index(&self) -> &'a I {
        self.index
    }

    pub const fn template(&self) -> &'a PathTemplate {
        self.template
    }

    /// Score one board
    pub fn score(&self, grid: &Grid) -> BoardResult {
        score_board(grid, self.template, self.index)
    }

    /// Score all boards on the global rayon pool
    pub fn score_all(&self, grids: &[Grid]) -> ScoreSummary {
        score_boards(grids, self.template, self.index)
    }

    /// Score all boards on a dedicated pool
    pub fn score_all_in(&self, pool: &ThreadPool, grids: &[Grid]) -> ScoreSummary {
        pool.install(|| self.score_all(grids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Dictionary, DictionaryIndex, IndexKind};
    use crate::wordlists::{SAMPLE_GAMES, SAMPLE_WORDS};
    use rayon::ThreadPoolBuilder;

    fn setup() -> (DictionaryIndex, PathTemplate, Vec<Grid>) {
        let dict = Dictionary::parse(SAMPLE_WORDS).unwrap();
        (
            DictionaryIndex::build(IndexKind::Trie, &dict),
            PathTemplate::standard(),
            Grid::parse_all(SAMPLE_GAMES).unwrap(),
        )
    }

    #[test]
    fn dedicated_pool_matches_global_pool() {
        let (index, template, grids) = setup();
        let scorer = Scorer::new(&index, &template);
        let pool = ThreadPoolBuilder::new().num_threads(2).build().unwrap();

        assert_eq!(scorer.score_all(&grids), scorer.score_all_in(&pool, &grids));
    }

    #[test]
    fn single_board_matches_batch_entry() {
        let (index, template, grids) = setup();
        let scorer = Scorer::new(&index, &template);
        let summary = scorer.score_all(&grids);

        assert_eq!(scorer.score(&grids[0]), summary.boards[0]);
    }

    #[test]
    fn sample_first_game_finds_expected_words() {
        let (index, template, grids) = setup();
        let scorer = Scorer::new(&index, &template);
        let board = scorer.score(&grids[0]);

        let words: Vec<&str> = board.matches.iter().map(|m| m.word.as_str()).collect();
        for expected in ["CAT", "CATS", "HEART", "QUIZ", "NEST", "DOG"] {
            assert!(words.contains(&expected), "{expected} not in {words:?}");
        }

        let quiz = board.matches.iter().find(|m| m.word == "QUIZ").unwrap();
        assert_eq!(quiz.score, 5);
        assert_eq!(quiz.cells, 3);
        assert_eq!((quiz.x, quiz.y), (0, 1));
    }
}
