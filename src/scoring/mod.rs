//! Board scoring
//!
//! Matching of dictionary words along straight paths and aggregation across boards.

mod aggregate;
mod engine;
pub mod matcher;

pub use aggregate::{BoardResult, ScoreSummary, score_board, score_boards};
pub use engine::Scorer;
pub use matcher::{Match, match_board, match_path};
