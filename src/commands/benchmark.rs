//! Benchmark command
//!
//! Times the full pipeline (parse dictionary, build index, parse games, score)
//! over repeated runs. Every run builds a fresh index.

use super::score::{build_pool, score_with};
use crate::core::Grid;
use crate::dictionary::{Dictionary, IndexKind};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::time::{Duration, Instant};

/// Repetitions used by the reference timing harness
pub const DEFAULT_REPETITIONS: usize = 800;

/// Configuration for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub index: IndexKind,
    pub threads: Option<usize>,
    pub repetitions: usize,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(index: IndexKind) -> Self {
        Self {
            index,
            threads: None,
            repetitions: DEFAULT_REPETITIONS,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub index: IndexKind,
    pub repetitions: usize,
    pub boards: usize,
    pub total_score: u64,
    pub average: Duration,
    pub min: Duration,
    pub max: Duration,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Run the pipeline `repetitions` times over raw input lines
///
/// # Errors
///
/// Returns an error if the input lines are malformed, the thread pool cannot
/// be built, or two runs disagree on the total score.
pub fn run_benchmark(
    config: BenchmarkConfig,
    word_lines: &[String],
    game_lines: &[String],
) -> Result<BenchmarkResult> {
    let pool = build_pool(config.threads)?;

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.repetitions as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut timings = Vec::with_capacity(config.repetitions);
    let mut total_score = None;
    let mut boards = 0;
    let start = Instant::now();

    for rep in 0..config.repetitions {
        let run_start = Instant::now();

        let dictionary = Dictionary::parse(word_lines)?;
        let grids = Grid::parse_all(game_lines)?;
        let run = score_with(config.index, pool.as_ref(), &dictionary, &grids);

        timings.push(run_start.elapsed());
        boards = grids.len();

        match total_score {
            None => total_score = Some(run.summary.total),
            Some(expected) => anyhow::ensure!(
                expected == run.summary.total,
                "Run {rep} scored {} but earlier runs scored {expected}",
                run.summary.total
            ),
        }

        if rep % 50 == 0 {
            let avg = timings.iter().sum::<Duration>() / timings.len() as u32;
            pb.set_message(format!("Avg: {:.3}ms", avg.as_secs_f64() * 1000.0));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();
    debug!("Benchmark finished {} runs in {duration:?}", config.repetitions);

    let average = if timings.is_empty() {
        Duration::ZERO
    } else {
        timings.iter().sum::<Duration>() / timings.len() as u32
    };

    Ok(BenchmarkResult {
        index: config.index,
        repetitions: config.repetitions,
        boards,
        total_score: total_score.unwrap_or(0),
        average,
        min: timings.iter().min().copied().unwrap_or_default(),
        max: timings.iter().max().copied().unwrap_or_default(),
        duration,
        boards_per_second: if duration.is_zero() {
            0.0
        } else {
            (boards * config.repetitions) as f64 / duration.as_secs_f64()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{SAMPLE_GAMES, SAMPLE_WORDS};

    fn lines(slice: &[&str]) -> Vec<String> {
        slice.iter().map(|s| (*s).to_string()).collect()
    }

    fn quiet(repetitions: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            repetitions,
            show_progress: false,
            ..BenchmarkConfig::new(IndexKind::Trie)
        }
    }

    #[test]
    fn benchmark_runs() {
        let result =
            run_benchmark(quiet(3), &lines(SAMPLE_WORDS), &lines(SAMPLE_GAMES)).unwrap();

        assert_eq!(result.repetitions, 3);
        assert_eq!(result.boards, SAMPLE_GAMES.len());
        assert_eq!(result.total_score, 579);
        assert!(result.min <= result.average);
        assert!(result.average <= result.max);
    }

    #[test]
    fn benchmark_with_table_index() {
        let config = BenchmarkConfig {
            index: IndexKind::Table,
            ..quiet(2)
        };
        let result = run_benchmark(config, &lines(SAMPLE_WORDS), &lines(SAMPLE_GAMES)).unwrap();
        assert_eq!(result.total_score, 579);
    }

    #[test]
    fn benchmark_zero_repetitions() {
        let result =
            run_benchmark(quiet(0), &lines(SAMPLE_WORDS), &lines(SAMPLE_GAMES)).unwrap();
        assert_eq!(result.repetitions, 0);
        assert_eq!(result.total_score, 0);
        assert_eq!(result.average, Duration::ZERO);
    }

    #[test]
    fn benchmark_rejects_malformed_input() {
        let words = vec!["CAT".to_string(), "c@t".to_string()];
        assert!(run_benchmark(quiet(1), &words, &lines(SAMPLE_GAMES)).is_err());
    }

    #[test]
    fn benchmark_empty_games() {
        let result = run_benchmark(quiet(2), &lines(SAMPLE_WORDS), &[]).unwrap();
        assert_eq!(result.boards, 0);
        assert_eq!(result.total_score, 0);
    }
}
