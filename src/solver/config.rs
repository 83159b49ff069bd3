//! Configuration options for the backward-induction solver.
//!
//! This module provides the solver configuration and the per-session
//! statistics the solver collects while expanding the position graph.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the solver.
///
/// # Example
/// ```
/// use martian_dice_solver::solver::SolverConfig;
///
/// let config = SolverConfig::default().with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Expected number of distinct positions, used to pre-size the memo table.
    ///
    /// Set to `None` to let the table grow on demand.
    pub capacity: Option<usize>,

    /// Random seed for Monte Carlo playouts.
    ///
    /// If set, playouts are reproducible. If `None`, a random seed is used.
    pub seed: Option<u64>,

    /// Number of games played by `Solver::play_out_default`.
    pub playouts: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            capacity: None,
            seed: None,
            playouts: 10_000,
        }
    }
}

impl SolverConfig {
    /// Builder method: pre-size the memo table.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set the number of playout games.
    pub fn with_playouts(mut self, playouts: u64) -> Self {
        self.playouts = playouts;
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.playouts == 0 {
            return Err(ConfigError::NoPlayouts);
        }
        if self.capacity == Some(0) {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

/// Errors that can occur when validating solver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Playout count must be positive.
    #[error("playout count must be at least 1")]
    NoPlayouts,
    /// An explicit capacity of zero is meaningless.
    #[error("memo capacity must be positive when set")]
    ZeroCapacity,
}

/// Statistics tracked during one solving session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverStats {
    /// Non-terminal positions that were expanded (one recursive step each).
    pub recursive_steps: u64,

    /// Terminal positions scored at face value.
    pub terminal_positions: u64,

    /// Lookups answered from the memo table.
    pub memo_hits: u64,

    /// Distinct positions stored in the memo table.
    pub positions: usize,

    /// Total time spent solving (in seconds).
    pub elapsed_seconds: f64,
}

impl SolverStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions solved per second over the whole session.
    pub fn positions_per_second(&self) -> f64 {
        if self.elapsed_seconds > 0.0 {
            self.positions as f64 / self.elapsed_seconds
        } else {
            0.0
        }
    }
}
