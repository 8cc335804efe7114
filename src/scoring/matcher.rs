//! Per-board word matching
//!
//! Walks each template path over one grid, feeding letters into the prefix index.
//! A `Q` cell may also be read as the digraph "QU": the synthetic `U` costs no
//! extra cell but adds one point to any word completed through it.

use crate::core::{Direction, Grid, MAX_PATH_LEN, MIN_WORD_LEN, Path, PathTemplate};
use crate::dictionary::{Rank, WordIndex};

/// Longest text a reading can hold: every cell plus one synthetic `U`
const MAX_TEXT_LEN: usize = MAX_PATH_LEN + 1;

/// A dictionary word found along a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub word: String,
    pub rank: Rank,
    pub score: u32,
    pub x: u8,
    pub y: u8,
    pub direction: Direction,
    /// Physical cells consumed
    pub cells: u8,
}

impl Match {
    /// True if the word was completed through a synthetic "QU"
    #[must_use]
    pub fn used_synthetic_u(&self) -> bool {
        self.score as usize > self.word.len()
    }
}

/// How a reading has treated `Q` cells so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reading {
    /// Letters taken exactly as they appear on the board
    Plain,
    /// One `Q` cell was read as "QU"
    QuExpanded,
}

/// One interpretation of the letters read so far
#[derive(Debug, Clone, Copy)]
struct Prefix<C> {
    cursor: C,
    reading: Reading,
    text: [u8; MAX_TEXT_LEN],
    len: u8,
}

impl<C: Copy> Prefix<C> {
    const fn new(cursor: C) -> Self {
        Self {
            cursor,
            reading: Reading::Plain,
            text: [0; MAX_TEXT_LEN],
            len: 0,
        }
    }

    /// Append one letter, or `None` if no dictionary word continues this way
    fn push<I: WordIndex<Cursor = C>>(mut self, index: &I, letter: u8) -> Option<Self> {
        if self.len as usize == MAX_TEXT_LEN {
            return None;
        }
        self.cursor = index.step(self.cursor, letter)?;
        self.text[self.len as usize] = letter;
        self.len += 1;
        Some(self)
    }

    /// Read a `Q` cell as "QU"
    fn push_digraph<I: WordIndex<Cursor = C>>(self, index: &I) -> Option<Self> {
        let mut next = self.push(index, b'Q')?.push(index, b'U')?;
        next.reading = Reading::QuExpanded;
        Some(next)
    }

    fn score(&self) -> u32 {
        match self.reading {
            Reading::Plain => u32::from(self.len),
            Reading::QuExpanded => u32::from(self.len) + 1,
        }
    }

    fn word(&self) -> String {
        self.text[..self.len as usize]
            .iter()
            .map(|&b| b as char)
            .collect()
    }
}

/// Find every word along one path
///
/// At most one match is produced per physical length. When several readings
/// complete a word at the same length the highest-scoring one wins, so a
/// synthetic "QU" word is preferred over a plain one of the same length.
pub fn match_path<I: WordIndex>(path: &Path, grid: &Grid, index: &I) -> Vec<Match> {
    let mut matches = Vec::new();
    let mut readings = vec![Prefix::new(index.root())];

    for (step, &cell) in path.cells().iter().enumerate() {
        let letter = grid.letter(cell as usize);
        let mut next = Vec::with_capacity(readings.len() + 1);

        for prefix in &readings {
            if let Some(extended) = prefix.push(index, letter) {
                next.push(extended);
            }
            if letter == b'Q'
                && prefix.reading == Reading::Plain
                && let Some(expanded) = prefix.push_digraph(index)
            {
                next.push(expanded);
            }
        }

        readings = next;
        if readings.is_empty() {
            break;
        }

        let cells = step + 1;
        if cells < MIN_WORD_LEN {
            continue;
        }

        let mut best: Option<(&Prefix<I::Cursor>, Rank)> = None;
        for prefix in &readings {
            if let Some(rank) = index.rank(prefix.cursor)
                && best.is_none_or(|(current, _)| prefix.score() > current.score())
            {
                best = Some((prefix, rank));
            }
        }

        if let Some((prefix, rank)) = best {
            matches.push(Match {
                word: prefix.word(),
                rank,
                score: prefix.score(),
                x: path.x(),
                y: path.y(),
                direction: path.direction(),
                cells: cells as u8,
            });
        }
    }

    matches
}

/// All matches on a board, in path-generation order
pub fn match_board<I: WordIndex>(grid: &Grid, template: &PathTemplate, index: &I) -> Vec<Match> {
    template
        .iter()
        .flat_map(|path| match_path(path, grid, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::STANDARD_PATH_COUNT;
    use crate::dictionary::{Dictionary, DictionaryIndex, IndexKind, TableIndex, TrieIndex};

    fn trie(words: &[&str]) -> TrieIndex {
        TrieIndex::from_dictionary(&Dictionary::parse(words).unwrap())
    }

    /// Grid with `row` across the top and filler elsewhere
    fn top_row(row: &str) -> Grid {
        let filler = "X".repeat(25 - row.len());
        Grid::new(1, &format!("{row}{filler}")).unwrap()
    }

    fn east_from_origin() -> Path {
        Path::walk(0, 0, Direction::East)
    }

    #[test]
    fn nested_words_both_match() {
        let index = trie(&["CAT", "CATS"]);
        let grid = top_row("CATSX");
        let matches = match_path(&east_from_origin(), &grid, &index);

        let words: Vec<(&str, u32, u8)> = matches
            .iter()
            .map(|m| (m.word.as_str(), m.score, m.cells))
            .collect();
        assert_eq!(words, vec![("CAT", 3, 3), ("CATS", 4, 4)]);
        assert_eq!(matches[0].rank, 1);
        assert_eq!(matches[1].rank, 2);
    }

    #[test]
    fn synthetic_qu_scores_extra_point() {
        let mut words = vec!["AA"; 6];
        words.push("QUIZ");
        let index = trie(&words);
        let grid = top_row("QIZXX");
        let matches = match_path(&east_from_origin(), &grid, &index);

        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.word, "QUIZ");
        assert_eq!(m.rank, 7);
        assert_eq!(m.score, 5);
        assert_eq!(m.cells, 3);
        assert!(m.used_synthetic_u());
    }

    #[test]
    fn real_u_cell_scores_plain_length() {
        let index = trie(&["QUIZ"]);
        let grid = top_row("QUIZX");
        let matches = match_path(&east_from_origin(), &grid, &index);

        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.word, "QUIZ");
        assert_eq!(m.score, 4);
        assert_eq!(m.cells, 4);
        assert!(!m.used_synthetic_u());
    }

    #[test]
    fn plain_q_word_still_matches() {
        let index = trie(&["QAT"]);
        let grid = top_row("QATXX");
        let matches = match_path(&east_from_origin(), &grid, &index);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].word, "QAT");
        assert_eq!(matches[0].score, 3);
    }

    #[test]
    fn expanded_reading_preferred_at_same_length() {
        // Cells Q,I,T read plain as "QIT" or expanded as "QUIT"
        let index = trie(&["QIT", "QUIT"]);
        let grid = top_row("QITXX");
        let matches = match_path(&east_from_origin(), &grid, &index);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].word, "QUIT");
        assert_eq!(matches[0].rank, 2);
        assert_eq!(matches[0].score, 5);
    }

    #[test]
    fn real_u_cell_after_q_reads_plain() {
        let index = trie(&["QUA", "QUAT"]);
        let grid = top_row("QUATX");
        let matches = match_path(&east_from_origin(), &grid, &index);

        let found: Vec<(&str, u32, u8)> = matches
            .iter()
            .map(|m| (m.word.as_str(), m.score, m.cells))
            .collect();
        // The expanded reading dies at "QUU"
        assert_eq!(found, vec![("QUA", 3, 3), ("QUAT", 4, 4)]);
    }

    #[test]
    fn single_q_cell_never_scores_alone() {
        let index = trie(&["QU"]);
        let grid = top_row("QXXXX");
        assert!(match_path(&east_from_origin(), &grid, &index).is_empty());
    }

    #[test]
    fn no_match_is_empty() {
        let index = trie(&["DOG"]);
        let grid = top_row("CATSX");
        assert!(match_path(&east_from_origin(), &grid, &index).is_empty());
    }

    #[test]
    fn all_a_board_matches_every_path_once() {
        let index = trie(&["AA"]);
        let grid = Grid::new(1, &"A".repeat(25)).unwrap();
        let template = PathTemplate::standard();
        let matches = match_board(&grid, &template, &index);

        assert_eq!(matches.len(), STANDARD_PATH_COUNT);
        assert!(matches.iter().all(|m| m.word == "AA" && m.score == 2));
        let total: u32 = matches.iter().map(|m| m.score).sum();
        assert_eq!(total, 288);
    }

    #[test]
    fn matches_follow_path_order() {
        let index = trie(&["AA"]);
        let grid = Grid::new(1, &"A".repeat(25)).unwrap();
        let template = PathTemplate::standard();
        let matches = match_board(&grid, &template, &index);

        for (m, path) in matches.iter().zip(template.iter()) {
            assert_eq!((m.x, m.y, m.direction), (path.x(), path.y(), path.direction()));
        }
    }

    #[test]
    fn no_match_exceeds_physical_limits() {
        let dict = Dictionary::parse(crate::wordlists::SAMPLE_WORDS).unwrap();
        let index = TrieIndex::from_dictionary(&dict);
        let template = PathTemplate::standard();

        for grid in Grid::parse_all(crate::wordlists::SAMPLE_GAMES).unwrap() {
            for m in match_board(&grid, &template, &index) {
                assert!((2..=5).contains(&m.cells), "{m:?}");
                assert!(m.word.len() <= 6, "{m:?}");
                assert_eq!(dict.rank_of(&m.word), Some(m.rank));
            }
        }
    }

    #[test]
    fn scoring_is_idempotent() {
        let dict = Dictionary::parse(crate::wordlists::SAMPLE_WORDS).unwrap();
        let index = TrieIndex::from_dictionary(&dict);
        let template = PathTemplate::standard();
        let grid = Grid::new(1, crate::wordlists::SAMPLE_GAMES[0]).unwrap();

        assert_eq!(
            match_board(&grid, &template, &index),
            match_board(&grid, &template, &index)
        );
    }

    #[test]
    fn trie_and_table_agree_on_sample_games() {
        let dict = Dictionary::parse(crate::wordlists::SAMPLE_WORDS).unwrap();
        let trie = TrieIndex::from_dictionary(&dict);
        let table = TableIndex::from_dictionary(&dict);
        let wrapped = DictionaryIndex::build(IndexKind::Table, &dict);
        let template = PathTemplate::standard();

        for grid in Grid::parse_all(crate::wordlists::SAMPLE_GAMES).unwrap() {
            let expected = match_board(&grid, &template, &trie);
            assert_eq!(expected, match_board(&grid, &template, &table));
            assert_eq!(expected, match_board(&grid, &template, &wrapped));
        }
    }

    #[test]
    fn matches_every_spelled_word() {
        // Brute force: every prefix of every path whose plain letters form a word
        // must be reported at that length with at least the plain score.
        let dict = Dictionary::parse(crate::wordlists::SAMPLE_WORDS).unwrap();
        let index = TrieIndex::from_dictionary(&dict);
        let template = PathTemplate::standard();

        for grid in Grid::parse_all(crate::wordlists::SAMPLE_GAMES).unwrap() {
            for path in &template {
                let matches = match_path(path, &grid, &index);
                for len in MIN_WORD_LEN..=path.len() {
                    let spelled: String = path.cells()[..len]
                        .iter()
                        .map(|&c| grid.letter(c as usize) as char)
                        .collect();
                    if dict.rank_of(&spelled).is_some() {
                        let found = matches
                            .iter()
                            .find(|m| m.cells as usize == len)
                            .unwrap_or_else(|| panic!("{spelled} missing on {path}"));
                        assert!(found.score as usize >= len);
                    }
                }
            }
        }
    }
}
