#![doc = include_str!("../README.md")]

mod walk;

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use bricks::board::Board;
use bricks::solver::{BrickSolver, SearchOutcome, Strategy};
use bricks::stats::Limited;
use clap::Parser;
use cpu_time::ProcessTime;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Solves sliding bricks levels and measures the time of search strategies.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// File with the level: the line `width,height,` followed by comma-terminated rows of cells
    level: PathBuf,

    /// Strategies to run (bfs, dfs, ids), all by default
    #[arg(short, long = "strategy", value_name = "STRATEGY", value_delimiter = ',')]
    strategies: Vec<Strategy>,

    /// Maximum number of nodes visited by each run
    #[arg(short, long)]
    limit: Option<u64>,

    /// Instead of solving, make (at most) N random moves and print the boards
    #[arg(short, long, value_name = "N")]
    walk: Option<usize>,

    /// Seed of the random walk
    #[arg(long, default_value_t = 123)]
    seed: u64,
}

fn load(path: &Path) -> Result<Board> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read level file {}", path.display()))?;
    text.parse().with_context(|| format!("invalid level file {}", path.display()))
}

/// Runs `strategy` on a fresh solver and prints the moves, the solved board and the summary line:
/// the number of visited states, the search time in seconds and the solution length.
fn run(board: &Board, strategy: Strategy, stats: &mut Limited) -> Result<()> {
    println!("---=== run {} ===---", strategy);
    let solver = BrickSolver::new(board.clone());
    stats.reset_visits();
    let start_moment = ProcessTime::try_now().context("getting process time failed")?;
    let outcome = solver.solve_stats(strategy, stats);
    let seconds = start_moment.try_elapsed().context("getting process time failed")?.as_secs_f64();
    debug!("{}: {:?}", strategy, stats.stats);
    match outcome {
        SearchOutcome::Solved(solution) => {
            for m in solution.moves() { println!("{}", m); }
            print!("{}", solution.board());
            println!("{} {:.6} {}\n", solution.visited(), seconds, solution.len());
        }
        SearchOutcome::Exhausted { visited } =>
            println!("{}: no solution, {} states visited in {:.6} seconds\n", strategy, visited, seconds),
        SearchOutcome::Cancelled { visited } =>
            println!("{}: stopped after {} visits ({} states recorded) in {:.6} seconds\n",
                     strategy, stats.visits(), visited, seconds),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let board = load(&cli.level)?;
    info!("loaded {}x{} level from {}", board.width(), board.height(), cli.level.display());
    if let Some(max_moves) = cli.walk {
        walk::random_walk(&board, max_moves, &mut ChaCha8Rng::seed_from_u64(cli.seed));
        return Ok(());
    }
    let strategies = if cli.strategies.is_empty() { Strategy::ALL.to_vec() } else { cli.strategies };
    let mut stats = Limited::with_limit(cli.limit.unwrap_or(u64::MAX));
    for strategy in strategies {
        run(&board, strategy, &mut stats)?;
    }
    Ok(())
}
