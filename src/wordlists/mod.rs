//! Dictionary and game inputs
//!
//! Provides a small embedded sample set plus loaders for line-oriented text files.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE_GAMES, SAMPLE_GAMES_COUNT, SAMPLE_WORDS, SAMPLE_WORDS_COUNT};
