//! # N-Puzzle Solver Library
//!
//! This library provides the core search engine for randomly generated
//! N x M sliding-tile puzzles and four interchangeable search strategies
//! -- depth-limited depth-first search, uniform-cost search, greedy
//! best-first search, and A* -- whose node-visitation and runtime cost can
//! be compared against each other.
//!
//! It is used by two binaries:
//! - `compare_strategies`: Generates a batch of random solvable puzzles,
//!   runs every strategy on each, and prints per-strategy averages of
//!   elapsed time and nodes visited.
//! - `solve_board`: Takes a board configuration file and a strategy
//!   selection, then reports whether the strategy solved it and at what
//!   cost.
//!
//! ## Modules
//! - `engine`: Contains the board representation (`Grid`), slide directions
//!   and move generation, the goal-position table, the inversion-parity
//!   solvability test, and random puzzle generation.
//! - `heuristics`: Defines the Manhattan-distance-plus-reversals estimate
//!   used by the informed strategies.
//! - `solver`: Provides the four search strategy functions and the
//!   `SearchNode`/`SearchOutcome` types they share.
//! - `utils`: Provides parsing of text boards and console rendering of
//!   puzzle pairs.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;

// Items from sub-modules, if public, are accessed via their full path,
// e.g. `npuzzle_solver::solver::a_star_search`. This keeps the top-level
// library namespace cleaner.
