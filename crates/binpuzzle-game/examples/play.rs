//! Plays the binary number puzzle in the terminal.
//!
//! This example shows how to:
//! - Create a `Puzzle` from a range, optionally with a fixed seed
//! - Toggle columns and check answers
//! - Report the seed so a session can be replayed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example play
//! ```
//!
//! Choose the target range:
//!
//! ```sh
//! cargo run --example play -- --min 16 --max 255
//! ```
//!
//! Replay a session:
//!
//! ```sh
//! cargo run --example play -- --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```
//!
//! Set `RUST_LOG=debug` to see the targets being rolled.

use std::{
    io::{self, BufRead as _, Write as _},
    process,
};

use binpuzzle_core::TargetRange;
use binpuzzle_game::{Puzzle, PuzzleSeed};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Smallest target value.
    #[arg(long, value_name = "VALUE", default_value_t = 0)]
    min: u64,

    /// Largest target value.
    #[arg(long, value_name = "VALUE", default_value_t = 15)]
    max: u64,

    /// Seed for the target sequence (64 hex digits).
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,
}

fn main() -> io::Result<()> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let range = match TargetRange::new(args.min, args.max) {
        Ok(range) => range,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);
    let mut puzzle = Puzzle::with_seed(range, seed);

    println!("Seed:");
    println!("  {seed}");
    println!();
    println!("Enter a column number (0 = leftmost) to flip it, `c` to check, `q` to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_board(&puzzle);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        match line.trim() {
            "" => {}
            "q" | "quit" => break,
            "c" | "check" => {
                if puzzle.check_answer() {
                    println!("Correct! Solved: {}", puzzle.solved_count());
                } else {
                    println!("Not yet: {} is {}", puzzle.columns(), puzzle.guess_value());
                }
            }
            input => match input.parse::<usize>() {
                Ok(index) => {
                    if let Err(err) = puzzle.toggle_column(index) {
                        println!("{err}");
                    }
                }
                Err(_) => println!("Unknown command: {input}"),
            },
        }
    }

    println!("Solved {} target(s).", puzzle.solved_count());
    Ok(())
}

fn print_board(puzzle: &Puzzle) {
    println!();
    println!("Target: {}", puzzle.target());
    let width = puzzle.column_count();
    let header = (0..width)
        .map(|i| format!("{:>3}", 1u128 << (width - 1 - i)))
        .collect::<String>();
    let digits = puzzle
        .columns()
        .iter()
        .map(|bit| format!("{bit:>3}"))
        .collect::<String>();
    println!("  {header}");
    println!("  {digits}");
}
