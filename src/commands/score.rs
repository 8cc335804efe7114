//! Score command
//!
//! Builds the index once, scores every board and returns the summary with timings.

use crate::core::{Grid, PathTemplate};
use crate::dictionary::{Dictionary, DictionaryIndex, IndexKind};
use crate::scoring::{ScoreSummary, Scorer};
use anyhow::{Context, Result};
use log::{debug, info};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::time::{Duration, Instant};

/// Configuration for a scoring run
#[derive(Debug, Clone, Copy)]
pub struct ScoreConfig {
    pub index: IndexKind,
    /// Worker threads; `None` uses the global rayon pool
    pub threads: Option<usize>,
}

impl ScoreConfig {
    #[must_use]
    pub const fn new(index: IndexKind) -> Self {
        Self {
            index,
            threads: None,
        }
    }

    #[must_use]
    pub const fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self::new(IndexKind::default())
    }
}

/// Result of a scoring run
pub struct ScoreRun {
    pub summary: ScoreSummary,
    pub index: IndexKind,
    pub dictionary_words: usize,
    pub build_time: Duration,
    pub score_time: Duration,
}

/// Build a dedicated rayon pool if a thread count was requested
///
/// # Errors
///
/// Returns an error if the pool cannot be created (e.g. zero threads).
pub fn build_pool(threads: Option<usize>) -> Result<Option<ThreadPool>> {
    threads
        .map(|n| {
            anyhow::ensure!(n > 0, "Thread count must be at least 1");
            ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .with_context(|| format!("Failed to build a pool of {n} threads"))
        })
        .transpose()
}

/// Score boards against a dictionary
///
/// # Errors
///
/// Returns an error if the requested thread pool cannot be built.
pub fn run_score(config: ScoreConfig, dictionary: &Dictionary, grids: &[Grid]) -> Result<ScoreRun> {
    let pool = build_pool(config.threads)?;
    Ok(score_with(config.index, pool.as_ref(), dictionary, grids))
}

/// Score boards on an optional pre-built pool
pub(crate) fn score_with(
    kind: IndexKind,
    pool: Option<&ThreadPool>,
    dictionary: &Dictionary,
    grids: &[Grid],
) -> ScoreRun {
    let build_start = Instant::now();
    let index = DictionaryIndex::build(kind, dictionary);
    let template = PathTemplate::standard();
    let build_time = build_start.elapsed();
    debug!(
        "Built {} index over {} words in {:.3}ms",
        kind.name(),
        dictionary.unique_len(),
        build_time.as_secs_f64() * 1000.0
    );

    let scorer = Scorer::new(&index, &template);
    let score_start = Instant::now();
    let summary = match pool {
        Some(pool) => scorer.score_all_in(pool, grids),
        None => scorer.score_all(grids),
    };
    let score_time = score_start.elapsed();

    info!(
        "Scored {} boards: {} matches, {} points in {:.3}ms",
        summary.boards.len(),
        summary.match_count(),
        summary.total,
        score_time.as_secs_f64() * 1000.0
    );

    ScoreRun {
        summary,
        index: kind,
        dictionary_words: dictionary.len(),
        build_time,
        score_time,
    }
}
