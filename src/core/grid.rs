//! 5x5 letter grid
//!
//! A Grid stores one game's 25 letters in row-major order along with its game number.

use super::error::{FormatError, is_uppercase_word};
use std::fmt;

/// Side length of the board
pub const GRID_SIDE: usize = 5;

/// Number of cells on the board
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// One game board: 25 uppercase letters, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    game: usize,
    text: String,
    letters: [u8; GRID_CELLS],
}

impl Grid {
    /// Create a grid from a 25-letter line
    ///
    /// `game` is the 1-based game number used for reporting. It is also reported
    /// as the line number if the text is rejected.
    ///
    /// # Errors
    /// Returns `FormatError` if the text is not exactly 25 uppercase ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use grid_words::core::Grid;
    ///
    /// let grid = Grid::new(1, "CATSXQIZTOHEARTNESTONEDOG").unwrap();
    /// assert_eq!(grid.letter(0), b'C');
    /// assert_eq!(grid.letter_at(4, 4), b'G');
    ///
    /// assert!(Grid::new(2, "TOO SHORT").is_err());
    /// ```
    pub fn new(game: usize, text: &str) -> Result<Self, FormatError> {
        Self::parse_line(game, game, text)
    }

    fn parse_line(game: usize, line: usize, text: &str) -> Result<Self, FormatError> {
        if !is_uppercase_word(text) {
            return Err(FormatError::GridCharacters {
                line,
                text: text.to_string(),
            });
        }

        if text.len() != GRID_CELLS {
            return Err(FormatError::GridLength {
                line,
                text: text.to_string(),
            });
        }

        let mut letters = [0u8; GRID_CELLS];
        letters.copy_from_slice(text.as_bytes());

        Ok(Self {
            game,
            text: text.to_string(),
            letters,
        })
    }

    /// Parse a sequence of game lines
    ///
    /// Blank lines are skipped and do not consume a game number. Surrounding
    /// whitespace (including a trailing `\r`) is trimmed.
    ///
    /// # Errors
    /// Fails on the first malformed line; no partial list is returned.
    pub fn parse_all<I, S>(lines: I) -> Result<Vec<Self>, FormatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grids = Vec::new();

        for (idx, line) in lines.into_iter().enumerate() {
            let trimmed = line.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            grids.push(Self::parse_line(grids.len() + 1, idx + 1, trimmed)?);
        }

        Ok(grids)
    }

    /// 1-based game number
    #[inline]
    #[must_use]
    pub const fn game(&self) -> usize {
        self.game
    }

    /// The grid as a 25-letter string
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letter at a linear cell index (`x + y * 5`)
    ///
    /// # Panics
    /// Panics if `index >= 25`
    #[inline]
    #[must_use]
    pub const fn letter(&self, index: usize) -> u8 {
        self.letters[index]
    }

    /// Letter at column `x`, row `y`
    ///
    /// # Panics
    /// Panics if either coordinate is outside `0..5`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, x: usize, y: usize) -> u8 {
        self.letters[x + y * GRID_SIDE]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.text.as_bytes().chunks(GRID_SIDE) {
            for (i, &ch) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", ch as char)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
