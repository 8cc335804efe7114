//! Display functions for command results

use super::formatters::{create_progress_bar, direction_arrow, format_duration};
use crate::commands::{BenchmarkResult, ScoreRun};
use crate::core::MAX_PATH_LEN;
use crate::scoring::ScoreSummary;
use colored::Colorize;

/// Count of matches per word length; index is the word length
#[must_use]
pub fn length_distribution(summary: &ScoreSummary) -> [usize; MAX_PATH_LEN + 2] {
    let mut counts = [0; MAX_PATH_LEN + 2];
    for m in summary.boards.iter().flat_map(|b| &b.matches) {
        counts[m.word.len().min(MAX_PATH_LEN + 1)] += 1;
    }
    counts
}

/// Print the summary of a scoring run
pub fn print_score_result(run: &ScoreRun, top: usize) {
    let summary = &run.summary;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GRID SCORES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Run:".bright_cyan().bold());
    println!("   Index:            {}", run.index.name());
    println!("   Dictionary words: {}", run.dictionary_words);
    println!("   Boards:           {}", summary.boards.len());
    println!("   Matches:          {}", summary.match_count());
    println!(
        "   Total points:     {}",
        summary.total.to_string().bright_yellow().bold()
    );
    println!("   Index build:      {}", format_duration(run.build_time));
    println!("   Scoring:          {}", format_duration(run.score_time));

    if summary.boards.is_empty() {
        return;
    }

    let mut ranked: Vec<_> = summary.boards.iter().collect();
    ranked.sort_by_key(|b| (std::cmp::Reverse(b.total), b.game));

    println!("\n🏆 {}", "Top boards:".bright_cyan().bold());
    for board in ranked.iter().take(top) {
        let best = board.matches.iter().max_by_key(|m| m.score);
        let best_word = best.map_or_else(String::new, |m| {
            format!(
                "best {} ({},{}) {}",
                m.word.green(),
                m.x,
                m.y,
                direction_arrow(m.direction)
            )
        });
        println!(
            "   Game {:4}: {:4} points  {}",
            board.game,
            board.total.to_string().yellow(),
            best_word
        );
    }

    let counts = length_distribution(summary);
    let max = counts.iter().copied().max().unwrap_or(0) as f64;
    let all = summary.match_count().max(1) as f64;

    println!("\n📈 {}", "Word lengths:".bright_cyan().bold());
    for (len, &count) in counts.iter().enumerate().skip(2) {
        if count == 0 {
            continue;
        }
        let pct = count as f64 / all * 100.0;
        let bar = create_progress_bar(count as f64, max, 40);
        println!("   {len}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Index:            {}", result.index.name());
    println!("   Repetitions:      {}", result.repetitions);
    println!("   Boards per run:   {}", result.boards);
    println!("   Points per run:   {}", result.total_score);
    println!(
        "   Average run:      {}",
        format_duration(result.average).bright_yellow().bold()
    );
    println!(
        "   Fastest run:      {}",
        format_duration(result.min).green()
    );
    println!(
        "   Slowest run:      {}",
        format_duration(result.max).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);
}
