use clap::{Parser, ValueEnum};
use npuzzle_solver::engine::{generate_goal_positions, is_solvable, linearize, Grid};
use npuzzle_solver::solver::{
    a_star_search, best_first_search, depth_first_search, uniform_cost_search, SearchNode,
};
use npuzzle_solver::utils::{grid_from_str_rows, side_by_side};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// The classic 3x3 ring goal: tiles ordered clockwise around the blank.
const DEFAULT_GOAL_ROWS: [&str; 3] = ["1 2 3", "8 0 4", "7 6 5"];

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    /// Depth-limited depth-first search
    Dfs,
    /// Uniform-cost search
    Ucs,
    /// Greedy best-first search
    BestFirst,
    /// A* search
    AStar,
}

impl Strategy {
    fn name(self) -> &'static str {
        match self {
            Strategy::Dfs => "DFS",
            Strategy::Ucs => "UCS",
            Strategy::BestFirst => "Best-First",
            Strategy::AStar => "A*",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Search strategy to run
    #[clap(short, long, value_enum, default_value = "a-star")]
    strategy: Strategy,

    /// Depth limit for depth-first and best-first search
    #[clap(short, long, default_value_t = 31)]
    depth_limit: u32,

    /// Path to a goal board file; defaults to the classic 3x3 ring goal
    #[clap(long)]
    goal_file: Option<PathBuf>,

    /// Path to the initial board file (rows of whitespace-separated values)
    board_file: PathBuf,
}

fn read_board_file(path: &PathBuf) -> Result<Grid, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    grid_from_str_rows(&lines)
}

fn load_boards(args: &Args) -> Result<(Grid, Grid), String> {
    let initial = read_board_file(&args.board_file)
        .map_err(|e| format!("Invalid board {}: {}", args.board_file.display(), e))?;
    let goal = match &args.goal_file {
        Some(path) => read_board_file(path)
            .map_err(|e| format!("Invalid goal board {}: {}", path.display(), e))?,
        None => grid_from_str_rows(&DEFAULT_GOAL_ROWS)?,
    };
    if initial.height() != goal.height() || initial.width() != goal.width() {
        return Err(format!(
            "Board is {}x{} but goal is {}x{}",
            initial.height(),
            initial.width(),
            goal.height(),
            goal.width()
        ));
    }
    Ok((initial, goal))
}

fn main() {
    let args = Args::parse();

    let (initial, goal) = load_boards(&args).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    let goal_positions = generate_goal_positions(&goal);

    println!("Loaded board from {}\n", args.board_file.display());
    println!("{}", side_by_side(&initial, &goal));

    if !is_solvable(&linearize(&initial, &goal_positions)) {
        println!("Board cannot reach the goal: odd inversion count.");
        return;
    }

    let blank = initial.blank_position();
    let root = SearchNode::root(initial, blank);

    println!(
        "Searching with {} (depth limit {})...\n",
        args.strategy.name(),
        args.depth_limit
    );

    let start = Instant::now();
    let outcome = match args.strategy {
        Strategy::Dfs => depth_first_search(root, &goal, args.depth_limit),
        Strategy::Ucs => uniform_cost_search(root, &goal),
        Strategy::BestFirst => {
            best_first_search(root, &goal, &goal_positions, args.depth_limit)
        }
        Strategy::AStar => a_star_search(root, &goal, &goal_positions),
    };
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    println!("{} Solved: {}", args.strategy.name(), outcome.solved);
    println!("Nodes visited: {}", outcome.nodes_visited);
    println!("Time: {:.2} ms", elapsed_ms);
}
