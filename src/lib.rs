//! # Martian Dice Solver
//!
//! Computes optimal play for Martian Dice by memoized backward induction:
//! for every reachable position, the expected final score under optimal play
//! and every move that achieves it.
//!
//! ## Features
//!
//! - **Generic Solver**: Works with any game implementing the `Game` trait
//! - **Exact Chance Weights**: Roll outcomes weighted by integer face counts
//! - **Canonical Memoization**: Positions compared by a packed canonical key
//! - **Tie Preservation**: All equally good moves are reported
//! - **Playout Checks**: Monte Carlo games validate the solved expectation
//!
//! ## Quick Start
//!
//! ```
//! use martian_dice_solver::games::martian::{MartianDice, Position};
//! use martian_dice_solver::solver::{Solver, SolverConfig};
//!
//! let mut solver = Solver::new(MartianDice::new(3), SolverConfig::default());
//! solver.solve_root();
//!
//! let root = Position::new(3);
//! println!("{:.3} via {:?}", solver.expected_score(&root), solver.best_moves(&root));
//! ```
//!
//! ## Modules
//!
//! - [`solver`]: Generic backward-induction engine
//! - [`games`]: Game implementations (Martian Dice)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Backward-Induction Solver (Generic)             │
//! │  - Memo table (canonical key)   - Weighted chance averaging     │
//! │  - Best-move sets               - Monte Carlo playouts          │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ implements Game trait
//!                               ▼
//!                        ┌─────────────┐
//!                        │   Martian   │
//!                        │    Dice     │
//!                        └─────────────┘
//! ```

#![warn(missing_docs)]

/// Backward-induction solver module.
///
/// This is the core module containing the generic expectimax algorithm.
pub mod solver;

/// Game implementations module.
pub mod games;

// Re-export commonly used types at crate root for convenience
pub use solver::{Game, GameState, Move, Outcome, Solver, SolverConfig, SolverStats};
