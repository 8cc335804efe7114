//! Grid Words
//!
//! Scores 5x5 word-search boards against a dictionary of 2-5 letter words. Every
//! straight line of up to five cells in the eight compass directions is read,
//! and a `Q` cell may stand for "QU" for one bonus point.
//!
//! # Quick Start
//!
//! ```rust
//! use grid_words::core::{Grid, PathTemplate};
//! use grid_words::dictionary::{Dictionary, TrieIndex};
//! use grid_words::scoring::Scorer;
//!
//! let dict = Dictionary::parse(["CAT", "CATS", "QUIZ"]).unwrap();
//! let index = TrieIndex::from_dictionary(&dict);
//! let template = PathTemplate::standard();
//! let scorer = Scorer::new(&index, &template);
//!
//! let grid = Grid::new(1, "CATSXQIZXXXXXXXXXXXXXXXXX").unwrap();
//! let board = scorer.score(&grid);
//! println!("Game {} scored {}", board.game, board.total);
//! ```

// Core domain types
pub mod core;

// Prefix indexes over the word list
pub mod dictionary;

// Path matching and aggregation
pub mod scoring;

// Input files and embedded samples
pub mod wordlists;

// Command implementations
pub mod commands;

// Report and terminal output
pub mod output;
