//! Core domain types for grid word scoring
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! Grids, paths and input errors are plain values shared read-only across threads.

mod error;
mod grid;
mod path;

pub use error::FormatError;
pub(crate) use error::is_uppercase_word;
pub use grid::{GRID_CELLS, GRID_SIDE, Grid};
pub use path::{Direction, MAX_PATH_LEN, MIN_WORD_LEN, Path, PathTemplate, STANDARD_PATH_COUNT};
