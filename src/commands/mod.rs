//! Command implementations

pub mod benchmark;
pub mod generate;
pub mod score;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, DEFAULT_REPETITIONS, run_benchmark};
pub use generate::{generate_games, generate_grids};
pub use score::{ScoreConfig, ScoreRun, build_pool, run_score};
