use clap::Parser;
use npuzzle_solver::engine::{
    generate_goal_positions, generate_random_solvable_puzzle, GoalPositions, Grid,
};
use npuzzle_solver::solver::{
    a_star_search, best_first_search, depth_first_search, uniform_cost_search, SearchNode,
    SearchOutcome,
};
use npuzzle_solver::utils::{grid_from_str_rows, side_by_side};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

/// The classic 3x3 ring goal: tiles ordered clockwise around the blank.
const DEFAULT_GOAL_ROWS: [&str; 3] = ["1 2 3", "8 0 4", "7 6 5"];

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of random solvable puzzles to run every strategy on
    #[clap(short, long, default_value_t = 20)]
    puzzles: usize,

    /// Depth limit for depth-first and best-first search
    #[clap(short, long, default_value_t = 31)]
    depth_limit: u32,

    /// Seed for the puzzle generator; the fixed default keeps runs reproducible
    #[clap(short, long, default_value_t = 514514)]
    seed: u64,

    /// Path to a goal board file (rows of whitespace-separated values);
    /// defaults to the classic 3x3 ring goal
    #[clap(long)]
    goal_file: Option<PathBuf>,
}

/// Everything a strategy run needs besides its root node.
struct SearchContext {
    goal: Grid,
    goal_positions: GoalPositions,
    depth_limit: u32,
}

type StrategyFn = fn(Rc<SearchNode>, &SearchContext) -> SearchOutcome;

fn run_dfs(root: Rc<SearchNode>, ctx: &SearchContext) -> SearchOutcome {
    depth_first_search(root, &ctx.goal, ctx.depth_limit)
}

fn run_ucs(root: Rc<SearchNode>, ctx: &SearchContext) -> SearchOutcome {
    uniform_cost_search(root, &ctx.goal)
}

fn run_best_first(root: Rc<SearchNode>, ctx: &SearchContext) -> SearchOutcome {
    best_first_search(root, &ctx.goal, &ctx.goal_positions, ctx.depth_limit)
}

fn run_a_star(root: Rc<SearchNode>, ctx: &SearchContext) -> SearchOutcome {
    a_star_search(root, &ctx.goal, &ctx.goal_positions)
}

fn read_board_file(path: &PathBuf) -> Result<Grid, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    grid_from_str_rows(&lines)
}

fn load_goal(args: &Args) -> Result<Grid, String> {
    match &args.goal_file {
        Some(path) => read_board_file(path),
        None => grid_from_str_rows(&DEFAULT_GOAL_ROWS),
    }
}

fn main() {
    let args = Args::parse();

    let goal = load_goal(&args).unwrap_or_else(|e| {
        eprintln!("Failed to load goal board: {}", e);
        std::process::exit(1);
    });
    let goal_positions = generate_goal_positions(&goal);
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let ctx = SearchContext {
        goal,
        goal_positions,
        depth_limit: args.depth_limit,
    };

    let strategies: Vec<(&str, StrategyFn)> = vec![
        ("DFS", run_dfs),
        ("UCS", run_ucs),
        ("Best-First", run_best_first),
        ("A*", run_a_star),
    ];

    let mut all_runs: HashMap<String, Vec<(f64, u64)>> = HashMap::new();
    for (name, _) in &strategies {
        all_runs.insert(name.to_string(), Vec::new());
    }

    println!(
        "Comparing {} strategies over {} puzzles (seed {}, depth limit {})...",
        strategies.len(),
        args.puzzles,
        args.seed,
        args.depth_limit
    );

    for puzzle_idx in 0..args.puzzles {
        let (initial, blank) =
            generate_random_solvable_puzzle(&ctx.goal, &ctx.goal_positions, &mut rng);

        println!("\nPuzzle {}", puzzle_idx);
        println!("{}", side_by_side(&initial, &ctx.goal));

        for (strategy_name, strategy_fn) in &strategies {
            // Each strategy starts from its own fresh root node.
            let root = SearchNode::root(initial.clone(), blank);
            let start = Instant::now();
            let outcome = strategy_fn(root, &ctx);
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

            println!(
                "  Strategy: {:<10}, Solved: {:<5}, Nodes: {:<8}, Time: {:.2} ms",
                strategy_name, outcome.solved, outcome.nodes_visited, elapsed_ms
            );
            all_runs
                .get_mut(*strategy_name)
                .unwrap()
                .push((elapsed_ms, outcome.nodes_visited));
        }
    }

    println!("\n--- Comparison Complete ---");
    println!("Number of puzzles evaluated: {}", args.puzzles);
    println!(
        "Strategies evaluated: {}",
        strategies
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<&str>>()
            .join(", ")
    );
    println!("\n--- Averages ---");

    for (strategy_name, _) in &strategies {
        let runs = &all_runs[*strategy_name];
        if runs.is_empty() {
            println!("Strategy {}: No runs recorded.", strategy_name);
            continue;
        }
        let time_avg = runs.iter().map(|r| r.0).sum::<f64>() / runs.len() as f64;
        let node_avg = runs.iter().map(|r| r.1 as f64).sum::<f64>() / runs.len() as f64;
        println!(
            "Strategy {:<10}: Runtime Average = {:.2} ms, Node Visit Average = {:.2}",
            strategy_name, time_avg, node_avg
        );
    }
}
