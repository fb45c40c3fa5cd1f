use anyhow::{Context, Result};
use clap::Parser;
use eight_puzzle::engine::Board;
use eight_puzzle::harness::{run_timed, summarize, CSV_HEADER, DEFAULT_RUNS};
use eight_puzzle::solver::{Algorithm, DEFAULT_MAX_STEPS};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare every search algorithm over random boards (CSV on stdout)", long_about = None)]
struct Args {
    /// Number of random boards to solve
    #[clap(short, long, default_value_t = DEFAULT_RUNS)]
    runs: usize,

    /// Maximum number of boards each search may close
    #[clap(short, long, default_value_t = DEFAULT_MAX_STEPS)]
    max: usize,

    /// Seed for the board generator, for reproducible runs
    #[clap(short, long)]
    seed: Option<u64>,

    /// Only deal boards that can reach the goal
    #[clap(long)]
    solvable_only: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", CSV_HEADER).context("failed to write to stdout")?;

    let mut records = Vec::with_capacity(args.runs * Algorithm::benchmark_suite().len());

    for run in 1..=args.runs {
        let board = if args.solvable_only {
            Board::generate_solvable_with_rng(&mut rng)
        } else {
            Board::generate_with_rng(&mut rng)
        };

        eprintln!("Run number {}", run);
        eprintln!("Solving board\n{}", board);

        for algorithm in Algorithm::benchmark_suite() {
            eprintln!("Solving with {} search", algorithm);
            let record = run_timed(algorithm, &board, args.max);
            writeln!(out, "{}", record).context("failed to write to stdout")?;
            records.push(record);
        }
    }
    out.flush().context("failed to flush stdout")?;

    eprintln!("\n--- Benchmark Complete ---");
    eprintln!("Boards: {}, budget: {} steps", args.runs, args.max);
    for summary in summarize(&records) {
        let mean_steps = summary
            .mean_steps
            .map_or_else(|| "-".to_string(), |m| format!("{:.1}", m));
        eprintln!(
            "{:<8} found {:>3}/{:<3} mean steps {:>8} mean time {:>8.2} ms",
            summary.algorithm.name(),
            summary.found,
            summary.runs,
            mean_steps,
            summary.mean_elapsed_ms
        );
    }
    Ok(())
}
