//! Backward-induction solver module.
//!
//! This module provides a generic expectimax solver for single-player games
//! with chance, such as push-your-luck dice games.
//!
//! # Overview
//!
//! The solver walks the position graph depth-first and memoizes every result:
//! 1. Terminal positions are worth their face-value score
//! 2. A move is worth the weight-normalized average of its successors
//! 3. A position is worth the maximum over its legal moves, and every move
//!    reaching that maximum is recorded as a best move
//!
//! The position graph is a DAG with heavy subproblem sharing, so the memo
//! table, keyed by each state's canonical `Eq`/`Hash`, turns exponential tree
//! work into work proportional to the number of distinct positions.
//!
//! # Usage
//!
//! 1. Implement the `Game` trait for your game
//! 2. Create a `Solver` with your game and configuration
//! 3. Call `solve()` on a start position
//! 4. Query `expected_score()` and `best_moves()` for any reached position
//!
//! # Example
//!
//! ```ignore
//! use martian_dice_solver::solver::{Game, Solver, SolverConfig};
//!
//! let game = MyGame::new();
//! let mut solver = Solver::new(game, SolverConfig::default());
//!
//! let value = solver.solve_root();
//! println!("Expected score {:.2} over {} positions", value, solver.num_positions());
//! ```
//!
//! # Theory
//!
//! ```text
//! V(p)       = score(p)                          if p is terminal
//! V(p)       = max over m of Q(p, m)             otherwise
//! Q(p, m)    = sum(w(s) * V(s)) / sum(w(s))      over successors s of m
//! ```

pub mod backward;
pub mod config;
pub mod game;
pub mod memo;

// Re-export main types for convenient access
pub use backward::{PlayoutResult, Solver};
pub use config::{ConfigError, SolverConfig, SolverStats};
pub use game::{Game, GameState, Move, Outcome};
pub use memo::{ExportedPosition, MemoEntry, MemoExport, MemoTable, Solution, SolveStatus};
