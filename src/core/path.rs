//! Straight-line paths over the 5x5 board
//!
//! Paths depend only on the board topology, never on its letters, so the full
//! template is generated once and shared by every board.

use super::grid::GRID_SIDE;
use std::fmt;

/// Longest path (and longest dictionary word) in cells
pub const MAX_PATH_LEN: usize = 5;

/// Shortest path that can score
pub const MIN_WORD_LEN: usize = 2;

/// Number of maximal paths reaching at least `MIN_WORD_LEN` cells on a 5x5 board
pub const STANDARD_PATH_COUNT: usize = 144;

/// One of the eight compass directions
///
/// Numbered 1-8 clockwise from north for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions in reporting order
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Column/row step for one move
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::East => (1, 0),
            Self::SouthEast => (1, 1),
            Self::South => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
        }
    }

    /// Reporting id (1-8)
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::North => 1,
            Self::NorthEast => 2,
            Self::East => 3,
            Self::SouthEast => 4,
            Self::South => 5,
            Self::SouthWest => 6,
            Self::West => 7,
            Self::NorthWest => 8,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        };
        f.write_str(name)
    }
}

/// A straight run of cells from an origin in one direction
///
/// Holds the maximal run for its origin and direction; shorter paths are its prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    x: u8,
    y: u8,
    direction: Direction,
    cells: [u8; MAX_PATH_LEN],
    len: u8,
}

impl Path {
    /// Walk from `(x, y)` in `direction` until the board edge or `MAX_PATH_LEN` cells
    ///
    /// The origin is always included, so the result has at least one cell.
    ///
    /// # Panics
    /// Panics if the origin is off the board.
    ///
    /// # Examples
    /// ```
    /// use grid_words::core::{Direction, Path};
    ///
    /// let path = Path::walk(0, 0, Direction::SouthEast);
    /// assert_eq!(path.cells(), &[0, 6, 12, 18, 24]);
    ///
    /// let stuck = Path::walk(0, 0, Direction::North);
    /// assert_eq!(stuck.len(), 1);
    /// ```
    #[must_use]
    pub fn walk(x: usize, y: usize, direction: Direction) -> Self {
        assert!(x < GRID_SIDE && y < GRID_SIDE, "origin ({x}, {y}) is off the board");

        let (dx, dy) = direction.offset();
        let mut cells = [0u8; MAX_PATH_LEN];
        let mut len = 0;
        let (mut cx, mut cy) = (x as isize, y as isize);

        while len < MAX_PATH_LEN {
            cells[len] = (cx + cy * GRID_SIDE as isize) as u8;
            len += 1;

            cx += dx;
            cy += dy;
            if !in_range(cx, cy) {
                break;
            }
        }

        Self {
            x: x as u8,
            y: y as u8,
            direction,
            cells,
            len: len as u8,
        }
    }

    /// Origin column
    #[inline]
    #[must_use]
    pub const fn x(&self) -> u8 {
        self.x
    }

    /// Origin row
    #[inline]
    #[must_use]
    pub const fn y(&self) -> u8 {
        self.y
    }

    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Linear cell indexes along the path, origin first
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells[..self.len as usize]
    }

    /// Number of physical cells
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false; every path holds its origin
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if the path is long enough to spell a word
    #[inline]
    #[must_use]
    pub const fn can_score(&self) -> bool {
        self.len as usize >= MIN_WORD_LEN
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={:2} y={:2} dir={:2} len={:2}",
            self.x,
            self.y,
            self.direction.id(),
            self.len
        )
    }
}

#[inline]
const fn in_range(x: isize, y: isize) -> bool {
    x >= 0 && x < GRID_SIDE as isize && y >= 0 && y < GRID_SIDE as isize
}

/// The fixed, board-independent set of scoring-eligible paths
///
/// Ordered by origin (row-major) then direction id.
#[derive(Debug, Clone)]
pub struct PathTemplate {
    paths: Vec<Path>,
}

impl PathTemplate {
    /// Generate the template for the 5x5 board
    ///
    /// Origins whose walk in a direction stops at a single cell are dropped,
    /// leaving `STANDARD_PATH_COUNT` paths.
    #[must_use]
    pub fn standard() -> Self {
        let mut paths = Vec::with_capacity(STANDARD_PATH_COUNT);

        for y in 0..GRID_SIDE {
            for x in 0..GRID_SIDE {
                for direction in Direction::ALL {
                    let path = Path::walk(x, y, direction);
                    if path.can_score() {
                        paths.push(path);
                    }
                }
            }
        }

        Self { paths }
    }

    #[inline]
    #[must_use]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }
}

impl Default for PathTemplate {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a PathTemplate {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
