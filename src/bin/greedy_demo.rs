use anyhow::{Context, Result};
use clap::Parser;
use eight_puzzle::engine::Board;
use eight_puzzle::heuristics::Heuristic;
use eight_puzzle::solver::{greedy, DEFAULT_MAX_STEPS};
use eight_puzzle::utils::board_from_str_array;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve one 8-puzzle board with greedy best-first search", long_about = None)]
struct Args {
    /// Maximum number of boards the search may close
    #[clap(short, long, default_value_t = DEFAULT_MAX_STEPS)]
    max: usize,

    /// Heuristic ordering the frontier
    #[clap(long, value_enum, default_value_t = Heuristic::Misplaced)]
    heuristic: Heuristic,

    /// Seed for a reproducible random board
    #[clap(short, long, conflicts_with = "board")]
    seed: Option<u64>,

    /// Board to solve as three rows, '.' for the blank (e.g. `--board 142 3.5 678`)
    #[clap(short, long, num_args = 3)]
    board: Option<Vec<String>>,

    /// Print every board on the path to the goal
    #[clap(short, long)]
    path: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let board = match &args.board {
        Some(rows) => {
            let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
            board_from_str_array(&rows).context("invalid --board")?
        }
        None => args
            .seed
            .map_or_else(Board::generate, Board::generate_with_seed),
    };

    println!("Solving board:\n{}\n", board);
    if !board.is_solvable() {
        eprintln!("Note: this board cannot reach the goal; the search will run out of budget.");
    }

    let report = greedy(&board, args.max, args.heuristic.as_fn());

    match &report.solution {
        Some(solution) => {
            println!("{}: {}", args.heuristic, solution.steps);
            if args.path {
                println!("\nPath ({} moves):", solution.move_count());
                for (i, step_board) in solution.path.iter().enumerate() {
                    println!("Move {}:\n{}", i, step_board);
                }
            }
        }
        None => println!(
            "{}: no solution found within {} steps",
            args.heuristic, args.max
        ),
    }

    eprintln!(
        "Closed {} boards; the search tree grew to {} nodes.",
        report.closed.len(),
        report.tree_size
    );
    Ok(())
}
