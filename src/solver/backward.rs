//! Memoized backward-induction solver.
//!
//! The solver computes, for every position reachable from a start position,
//! the expected final score under optimal play and the set of moves that
//! achieve it. Choice nodes take the maximum over legal moves; chance nodes
//! (moves with several weighted successors) take the weight-normalized
//! average of their successors.
//!
//! The solver is generic over any game that implements the `Game` trait.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::solver::config::{SolverConfig, SolverStats};
use crate::solver::game::Game;
use crate::solver::memo::{ExportedPosition, MemoExport, MemoTable, Solution, SolveStatus};

/// The backward-induction solver.
///
/// Each solver owns its memo table, so independent sessions (for example one
/// per dice budget) never share results.
///
/// # Example
/// ```
/// use martian_dice_solver::games::martian::MartianDice;
/// use martian_dice_solver::solver::{Solver, SolverConfig};
///
/// let mut solver = Solver::new(MartianDice::new(2), SolverConfig::default());
/// let expected = solver.solve_root();
/// assert!(expected > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Solver<G: Game> {
    /// The game being solved.
    game: G,

    /// Configuration for the solver.
    config: SolverConfig,

    /// Solved positions keyed by canonical equality.
    memo: MemoTable<G::State, G::Move>,

    /// Statistics tracking.
    stats: SolverStats,
}

impl<G: Game> Solver<G> {
    /// Create a new solver for the given game.
    pub fn new(game: G, config: SolverConfig) -> Self {
        let memo = match config.capacity {
            Some(capacity) => MemoTable::with_capacity(capacity),
            None => MemoTable::new(),
        };

        Self {
            game,
            config,
            memo,
            stats: SolverStats::new(),
        }
    }

    /// Create a solver with pre-allocated memo capacity.
    pub fn with_capacity(game: G, config: SolverConfig, capacity: usize) -> Self {
        Self::new(game, config.with_capacity(capacity))
    }

    /// Solve `state` and every position reachable from it.
    ///
    /// Idempotent: solving an already solved position is a single memo hit.
    ///
    /// # Returns
    /// The expected score of `state` under optimal play.
    pub fn solve(&mut self, state: &G::State) -> f64 {
        let start_time = Instant::now();

        let value = self.solve_position(state);

        self.stats.positions = self.memo.len();
        self.stats.elapsed_seconds += start_time.elapsed().as_secs_f64();

        value
    }

    /// Solve the game from its initial state.
    pub fn solve_root(&mut self) -> f64 {
        let root = self.game.initial_state();
        self.solve(&root)
    }

    fn solve_position(&mut self, state: &G::State) -> f64 {
        if let Some(solution) = self.memo.get(state) {
            self.stats.memo_hits += 1;
            return solution.expected_score;
        }

        if self.game.is_terminal(state) {
            let score = self.game.score(state);
            self.stats.terminal_positions += 1;
            self.memo.finish(state, Solution::terminal(score));
            return score;
        }

        self.memo.begin(state);
        self.stats.recursive_steps += 1;

        let mut best_score = f64::NEG_INFINITY;
        let mut best_moves = Vec::new();

        for mv in self.game.legal_moves(state) {
            let value = self.expand_move(state, &mv);

            if value > best_score {
                best_score = value;
                best_moves.clear();
                best_moves.push(mv);
            } else if value == best_score {
                best_moves.push(mv);
            }
        }

        self.memo.finish(
            state,
            Solution {
                expected_score: best_score,
                best_moves,
            },
        );

        best_score
    }

    /// Solve every successor of `mv` and return the move's expected value.
    fn expand_move(&mut self, state: &G::State, mv: &G::Move) -> f64 {
        let outcomes = self.game.successors(state, mv);

        let mut weighted_sum = 0.0;
        let mut total_weight: u64 = 0;
        for outcome in &outcomes {
            let value = self.solve_position(&outcome.state);
            weighted_sum += value * outcome.weight as f64;
            total_weight += outcome.weight;
        }

        assert!(
            total_weight > 0,
            "move {:?} at {:?} expanded to zero total weight",
            mv,
            state
        );

        weighted_sum / total_weight as f64
    }

    /// Get the solution of a state, if solved.
    pub fn solution(&self, state: &G::State) -> Option<&Solution<G::Move>> {
        self.memo.get(state)
    }

    /// Check whether a state has been solved.
    pub fn is_solved(&self, state: &G::State) -> bool {
        self.memo.status(state) == SolveStatus::Solved
    }

    /// Get the expected score of a solved state.
    ///
    /// # Panics
    /// Panics if `state` has not been solved.
    pub fn expected_score(&self, state: &G::State) -> f64 {
        match self.memo.get(state) {
            Some(solution) => solution.expected_score,
            None => panic!("expected score requested for unsolved position {:?}", state),
        }
    }

    /// Get the best moves of a solved state.
    ///
    /// # Panics
    /// Panics if `state` has not been solved.
    pub fn best_moves(&self, state: &G::State) -> &[G::Move] {
        match self.memo.get(state) {
            Some(solution) => &solution.best_moves,
            None => panic!("best moves requested for unsolved position {:?}", state),
        }
    }

    /// Value of every legal move at a solved state, in legal-move order.
    ///
    /// # Returns
    /// `None` if any successor of `state` has not been solved.
    pub fn move_values(&self, state: &G::State) -> Option<Vec<(G::Move, f64)>> {
        self.game
            .legal_moves(state)
            .into_iter()
            .map(|mv| {
                let mut weighted_sum = 0.0;
                let mut total_weight: u64 = 0;
                for outcome in self.game.successors(state, &mv) {
                    let solution = self.memo.get(&outcome.state)?;
                    weighted_sum += solution.expected_score * outcome.weight as f64;
                    total_weight += outcome.weight;
                }
                Some((mv, weighted_sum / total_weight as f64))
            })
            .collect()
    }

    /// Play `games` games from the initial state following the first best
    /// move at every choice and sampling chance outcomes by weight.
    ///
    /// The mean should agree with the root's expected score within a few
    /// standard errors.
    ///
    /// # Panics
    /// Panics if the initial state has not been solved.
    pub fn play_out<R: Rng>(&self, games: u64, rng: &mut R) -> PlayoutResult {
        let root = self.game.initial_state();

        let mut sum = 0.0;
        let mut sum_squares = 0.0;
        for _ in 0..games {
            let score = self.play_one(&root, rng);
            sum += score;
            sum_squares += score * score;
        }

        let n = games.max(1) as f64;
        let mean = sum / n;
        let variance = (sum_squares / n - mean * mean).max(0.0);

        PlayoutResult {
            games,
            mean_score: mean,
            std_error: (variance / n).sqrt(),
            expected_score: self.expected_score(&root),
        }
    }

    /// Run `config.playouts` games with the configured seed.
    pub fn play_out_default(&self) -> PlayoutResult {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.play_out(self.config.playouts, &mut rng)
    }

    fn play_one<R: Rng>(&self, root: &G::State, rng: &mut R) -> f64 {
        let mut state = root.clone();
        while !self.game.is_terminal(&state) {
            let mv = self.best_moves(&state)[0];
            state = self.game.sample_successor(&state, &mv, rng);
        }
        self.game.score(&state)
    }

    /// Get the number of positions stored in the memo table.
    pub fn num_positions(&self) -> usize {
        self.memo.len()
    }

    /// Get current statistics.
    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    /// Get reference to the memo table for analysis.
    pub fn memo(&self) -> &MemoTable<G::State, G::Move> {
        &self.memo
    }

    /// Export every solved position, sorted by description.
    pub fn export(&self) -> MemoExport {
        let mut positions: Vec<ExportedPosition> = self
            .memo
            .solved()
            .map(|(state, solution)| ExportedPosition {
                position: self.game.state_description(state),
                expected_score: solution.expected_score,
                best_moves: solution
                    .best_moves
                    .iter()
                    .map(|mv| self.game.move_name(mv))
                    .collect(),
            })
            .collect();
        positions.sort_by(|a, b| a.position.cmp(&b.position));

        MemoExport { positions }
    }

    /// Reset the solver to its initial state.
    pub fn reset(&mut self) {
        self.memo.clear();
        self.stats = SolverStats::new();
    }
}

/// Result of a Monte Carlo playout run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayoutResult {
    /// Number of games played.
    pub games: u64,
    /// Mean final score.
    pub mean_score: f64,
    /// Standard error of the mean.
    pub std_error: f64,
    /// Expected score of the root according to the solver.
    pub expected_score: f64,
}

impl PlayoutResult {
    /// Check whether the sampled mean lies within `sigmas` standard errors
    /// of the solved expectation.
    pub fn agrees_within(&self, sigmas: f64) -> bool {
        (self.mean_score - self.expected_score).abs() <= sigmas * self.std_error + 1e-9
    }
}
