//! Martian Dice.
//!
//! A push-your-luck dice game: roll up to 13 dice, lock in one category per
//! roll, and stop before the tanks outnumber your lasers.
//!
//! ## Components
//!
//! - [`combinatorics`]: factorials and roll-outcome weights
//! - [`position`]: the position value type and its transition rules
//! - [`moves`]: player decisions
//! - [`game`]: the `Game` implementation used by the solver
//! - [`notation`]: `SAVED:ROLLED:DICE` parsing
//! - [`output`]: game trees and statistics reports
//!
//! ## Known Values
//!
//! Expected score of a fresh game under optimal play:
//!
//! ```text
//! dice   1      2      3      5      8      13
//! score  0.50   0.75   1.02   1.42   2.01   3.11
//! ```

pub mod combinatorics;
pub mod config;
pub mod error;
pub mod game;
pub mod moves;
pub mod notation;
pub mod output;
pub mod position;

pub use combinatorics::{factorial, roll_outcomes, roll_permutations, RollOutcome};
pub use config::MartianConfig;
pub use error::MartianError;
pub use game::MartianDice;
pub use moves::DiceMove;
pub use output::{position_line, render_tree, DiceStats, StatsReport};
pub use position::{Position, Tally, MAX_DICE};
