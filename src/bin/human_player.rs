use anyhow::{Context, Result};
use clap::Parser;
use eight_puzzle::engine::Board;
use eight_puzzle::utils::parse_tile_label;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Play the 8-puzzle in the terminal", long_about = None)]
struct Args {
    /// Seed for a reproducible starting board
    #[clap(short, long)]
    seed: Option<u64>,

    /// Only deal boards that can reach the goal
    #[clap(long)]
    solvable_only: bool,
}

fn starting_board(args: &Args) -> Board {
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    if args.solvable_only {
        Board::generate_solvable_with_rng(&mut rng)
    } else {
        Board::generate_with_rng(&mut rng)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut board = starting_board(&args);
    let mut moves = 0;

    println!("Welcome to the game! Here's your board");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !board.is_goal() {
        println!("{}", board);
        print!("\nEnter the tile number to move (1-8), or 'q' to quit: ");
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            println!("\nInput closed. Goodbye!");
            return Ok(());
        };
        let line = line.context("failed to read from stdin")?;

        if line.trim() == "q" {
            println!("Thanks for playing!");
            return Ok(());
        }

        // Unparsable labels and illegal moves get the same answer.
        match parse_tile_label(&line).and_then(|tile| board.move_tile(tile)) {
            Ok(()) => moves += 1,
            Err(_) => println!("**** Invalid input! ****"),
        }
    }

    println!("{}", board);
    println!("Congratulations - you won!!!! ({} moves)", moves);
    Ok(())
}
