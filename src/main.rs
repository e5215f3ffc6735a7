mod board;
mod builder;
mod key;
mod puzzle;
mod solver;
mod tree;
mod zobrist;

use anyhow::{Context, Result, bail};
use board::Board;
use builder::BuildConfig;
use clap::Parser;
use puzzle::Puzzle;
use solver::{Goal, SolveResult, Solver, Step};
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn print_solution(board: &Board, solution: &[Step]) {
    println!("\nStarting position:\n{}", board);
    let mut board = board.clone();
    let total = solution.len();
    for (count, step) in solution.iter().enumerate() {
        board.apply_move(step.mv.wriggler, step.mv.end, step.mv.direction);
        println!("{} ({}/{}):\n{}", step.mv, count + 1, total, board);
    }
}

#[derive(Parser)]
#[command(name = "wriggle")]
#[command(about = "A wriggler puzzle solver", long_about = None)]
struct Args {
    /// Path to the puzzle file
    #[arg(value_name = "FILE")]
    puzzle_file: PathBuf,

    /// Wriggler that has to reach the goal cell
    #[arg(short, long, default_value = "0")]
    wriggler: u8,

    /// Goal cell (defaults to the bottom-right corner)
    #[arg(short, long, num_args = 2, value_names = ["X", "Y"])]
    goal: Option<Vec<u8>>,

    /// Maximum number of tree nodes to build before giving up (0 for no limit)
    #[arg(short = 'n', long, default_value = "5000000")]
    max_nodes: usize,

    /// Print the board after every move of the solution
    #[arg(short, long)]
    print_solution: bool,

    /// Log build and search progress
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logging(args: &Args) {
    let level = if args.quiet {
        LevelFilter::ERROR
    } else if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    // RUST_LOG overrides the flags
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let board = Puzzle::load(&args.puzzle_file)
        .with_context(|| format!("Error loading {}", args.puzzle_file.display()))?;

    if (args.wriggler as usize) >= board.wriggler_count() {
        bail!(
            "wriggler {} not found (puzzle has {} wrigglers)",
            args.wriggler,
            board.wriggler_count()
        );
    }

    let goal = match args.goal.as_deref() {
        Some(&[x, y]) => Goal::new(args.wriggler, (x, y)),
        _ => Goal::bottom_right(args.wriggler, &board),
    };
    if goal.cell.0 as usize >= board.width() || goal.cell.1 as usize >= board.height() {
        bail!(
            "goal ({}, {}) is outside the {}x{} board",
            goal.cell.0,
            goal.cell.1,
            board.width(),
            board.height()
        );
    }

    let config = BuildConfig {
        max_nodes: (args.max_nodes > 0).then_some(args.max_nodes),
    };

    let start = Instant::now();
    let mut solver = Solver::new(board.clone(), goal, config);
    let build_ms = start.elapsed().as_millis();

    let start = Instant::now();
    let result = solver.solve();
    let search_ms = start.elapsed().as_millis();

    let (solved_char, moves) = match &result {
        SolveResult::Solved(steps) => {
            for step in steps {
                println!("{}", step);
            }
            debug!("solved position:\n{}", solver.board());
            ('Y', steps.len())
        }
        SolveResult::NoSolution => {
            println!("no solution");
            ('X', 0)
        }
        SolveResult::Cutoff => {
            println!("no solution within {} nodes", args.max_nodes);
            ('N', 0)
        }
    };

    let stats = solver.build_stats();
    println!(
        "solved: {}  moves: {:<5}  nodes: {:<12}  depth: {:<5}  build: {} ms  search: {} ms",
        solved_char, moves, stats.nodes, stats.max_depth, build_ms, search_ms
    );

    if args.print_solution {
        if let SolveResult::Solved(steps) = &result {
            print_solution(&board, steps);
        }
    }

    Ok(())
}
