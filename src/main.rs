//! Grid Words - CLI
//!
//! Scores 5x5 word-search boards against a word list, benchmarks the pipeline,
//! and generates random boards.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use grid_words::{
    commands::{
        BenchmarkConfig, DEFAULT_REPETITIONS, ScoreConfig, generate_games, run_benchmark,
        run_score,
    },
    core::Grid,
    dictionary::{Dictionary, IndexKind},
    output::{
        format_average_time, format_report, print_benchmark_result, print_score_result,
        write_report,
    },
    wordlists::{
        SAMPLE_GAMES, SAMPLE_WORDS,
        loader::{load_dictionary, load_games, sample_dictionary, sample_games},
    },
};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "grid_words",
    about = "Score 5x5 word-search grids against a dictionary of straight-line words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Index: trie (default) or table
    #[arg(short, long, global = true, default_value = "trie")]
    index: String,

    /// Worker threads (default: one per core)
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every game and write the report (default: embedded samples to stdout)
    Score {
        /// Dictionary file, one word per line (default: embedded sample)
        #[arg(short = 'w', long)]
        words: Option<PathBuf>,

        /// Games file, one 25-letter grid per line (default: embedded sample)
        #[arg(short = 'g', long)]
        games: Option<PathBuf>,

        /// Report file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of top boards in the summary
        #[arg(long, default_value = "5")]
        top: usize,

        /// Only write the report, no summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Time the full pipeline over repeated runs
    Bench {
        /// Dictionary file (default: embedded sample)
        #[arg(short = 'w', long)]
        words: Option<PathBuf>,

        /// Games file (default: embedded sample)
        #[arg(short = 'g', long)]
        games: Option<PathBuf>,

        /// Number of repetitions
        #[arg(short = 'n', long, default_value_t = DEFAULT_REPETITIONS)]
        repetitions: usize,

        /// Write the last run's report plus average time to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate random games
    Generate {
        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible boards
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let index = IndexKind::from_name(&cli.index);
    debug!("Index: {}, threads: {:?}", index.name(), cli.threads);

    // Default to scoring the embedded samples if no command given
    let command = cli.command.unwrap_or(Commands::Score {
        words: None,
        games: None,
        output: None,
        top: 5,
        quiet: false,
    });

    match command {
        Commands::Score {
            words,
            games,
            output,
            top,
            quiet,
        } => {
            let config = ScoreConfig::new(index).with_threads(cli.threads);
            run_score_command(
                config,
                words.as_deref(),
                games.as_deref(),
                output.as_deref(),
                top,
                quiet,
            )
        }
        Commands::Bench {
            words,
            games,
            repetitions,
            output,
        } => {
            let config = BenchmarkConfig {
                threads: cli.threads,
                repetitions,
                ..BenchmarkConfig::new(index)
            };
            run_bench_command(config, words.as_deref(), games.as_deref(), output.as_deref())
        }
        Commands::Generate {
            count,
            seed,
            output,
        } => run_generate_command(count, seed, output.as_deref()),
    }
}

fn read_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    path.map_or_else(sample_dictionary, load_dictionary)
}

fn read_games(path: Option<&Path>) -> Result<Vec<Grid>> {
    path.map_or_else(sample_games, load_games)
}

/// Raw lines for the benchmark, which re-parses them on every run
fn read_lines(path: Option<&Path>, sample: &[&str]) -> Result<Vec<String>> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(content.lines().map(str::to_string).collect())
        }
        None => Ok(sample.iter().map(|s| (*s).to_string()).collect()),
    }
}

fn run_score_command(
    config: ScoreConfig,
    words: Option<&Path>,
    games: Option<&Path>,
    output: Option<&Path>,
    top: usize,
    quiet: bool,
) -> Result<()> {
    // Load everything before scoring so malformed input aborts early
    let dictionary = read_dictionary(words)?;
    let grids = read_games(games)?;

    let run = run_score(config, &dictionary, &grids)?;

    match output {
        Some(path) => {
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_report(&mut file, &run.summary)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote report to {}", path.display());
        }
        None => write_report(&mut io::stdout().lock(), &run.summary)?,
    }

    if !quiet {
        print_score_result(&run, top);
    }
    Ok(())
}

fn run_bench_command(
    config: BenchmarkConfig,
    words: Option<&Path>,
    games: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let word_lines = read_lines(words, SAMPLE_WORDS)?;
    let game_lines = read_lines(games, SAMPLE_GAMES)?;

    println!(
        "Running {} repetitions with the {} index...",
        config.repetitions,
        config.index.name()
    );
    let result = run_benchmark(config, &word_lines, &game_lines)?;
    print_benchmark_result(&result);

    if let Some(path) = output {
        // One more run for the report itself
        let dictionary = Dictionary::parse(&word_lines)?;
        let grids = Grid::parse_all(&game_lines)?;
        let run = run_score(
            ScoreConfig::new(config.index).with_threads(config.threads),
            &dictionary,
            &grids,
        )?;

        let mut report = format_report(&run.summary)?;
        report.push_str(&format_average_time(result.average));
        fs::write(path, report).with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote benchmark report to {}", path.display());
    }
    Ok(())
}

fn run_generate_command(count: usize, seed: Option<u64>, output: Option<&Path>) -> Result<()> {
    let games = match seed {
        Some(seed) => generate_games(count, &mut StdRng::seed_from_u64(seed)),
        None => generate_games(count, &mut rand::rng()),
    };

    let mut text = games.join("\n");
    text.push('\n');

    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {count} games to {}", path.display());
        }
        None => io::stdout().lock().write_all(text.as_bytes())?,
    }
    Ok(())
}
