//! wordgrid
//!
//! Builds a random letter grid and lists every dictionary word hidden in it.
//!
//! ```text
//! wordgrid --size 5 --seed 42
//! wordgrid --dict words.txt --save-snapshot words.bin
//! wordgrid --snapshot words.bin --parallel --unique
//! wordgrid --seed 7 --boards 3 --json
//! ```
//!
//! Each board reports its seed; `--seed <that seed>` rebuilds it alone.
//!
//! Logs go to stderr; the grid and results go to stdout.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use word_grid::core::{GridConfig, DEFAULT_SIZE, FULL_ALPHABET};
use word_grid::dictionary::{self, snapshot, DEFAULT_WORDS_PATH};
use word_grid::search::{unique_words, SearchConfig, SearchEngine, SearchStats, WordMatch};
use word_grid::Grid;

/// Find dictionary words in a random letter grid
#[derive(Parser)]
#[command(name = "wordgrid")]
#[command(version)]
#[command(about = "Find dictionary words in a random letter grid")]
struct Cli {
    /// Grid is size x size
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Override the grid width
    #[arg(long)]
    width: Option<usize>,

    /// Override the grid height
    #[arg(long)]
    height: Option<usize>,

    /// RNG seed (random if omitted; the chosen seed is logged)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of boards to build; boards after the first use forked seeds
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    boards: u32,

    /// Letters to draw cells from
    #[arg(long, default_value = FULL_ALPHABET)]
    alphabet: String,

    /// Word list, one word per line
    #[arg(long, default_value = DEFAULT_WORDS_PATH)]
    dict: PathBuf,

    /// Load a prebuilt trie snapshot instead of a word list
    #[arg(long, conflicts_with = "dict")]
    snapshot: Option<PathBuf>,

    /// Write the loaded trie to a snapshot file
    #[arg(long)]
    save_snapshot: Option<PathBuf>,

    /// Search starting cells in parallel
    #[arg(long)]
    parallel: bool,

    /// Print each distinct word once instead of every path
    #[arg(long)]
    unique: bool,

    /// Print a JSON array with each board's seed, grid, stats and matches
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Report {
    seed: u64,
    grid: Grid,
    stats: SearchStats,
    matches: Vec<WordMatch>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "wordgrid failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GridConfig::default()
        .with_dimensions(cli.width.unwrap_or(cli.size), cli.height.unwrap_or(cli.size))
        .with_alphabet(cli.alphabet.as_str());
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;

    let trie = match &cli.snapshot {
        Some(path) => snapshot::load_path(path)?,
        None => dictionary::load_path_or_empty(&cli.dict),
    };
    if let Some(path) = &cli.save_snapshot {
        snapshot::save_path(&trie, path)?;
    }

    let mut base = config.rng();
    info!(
        seed = base.seed(),
        width = config.width,
        height = config.height,
        boards = cli.boards,
        "building grids"
    );

    let mut engine = SearchEngine::new(SearchConfig::default().with_parallel(cli.parallel));
    let mut reports = Vec::new();
    for board in 0..cli.boards {
        let mut rng = if board == 0 { base.clone() } else { base.fork() };
        let seed = rng.seed();
        let grid = config.build_grid(&mut rng)?;

        let start = Instant::now();
        let (matches, stats) = engine.find_words_with_stats(&grid, &trie);
        let elapsed = start.elapsed();
        info!(
            board,
            seed,
            walks = stats.walks,
            matches = matches.len(),
            walks_per_second = stats.walks_per_second() as u64,
            "board searched"
        );

        let report = Report {
            seed,
            grid,
            stats,
            matches,
        };
        if cli.json {
            reports.push(report);
        } else {
            print_report(cli, &report, elapsed);
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

fn print_report(cli: &Cli, report: &Report, elapsed: Duration) {
    if cli.boards > 1 {
        println!("seed {}", report.seed);
    }
    println!("{}", report.grid);
    println!(
        "{} walks found {} words in {:?}",
        report.stats.walks,
        report.matches.len(),
        elapsed
    );
    if cli.unique {
        for word in unique_words(&report.matches) {
            println!("{word}");
        }
    } else {
        for found in &report.matches {
            println!("{found}");
        }
    }
}
