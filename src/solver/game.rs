//! Game trait definition for the backward-induction solver.
//!
//! Any single-player stochastic game whose positions form a finite DAG can be
//! solved by implementing the `Game` trait. This keeps the expectimax
//! recursion independent from the rules of a specific game.

use std::fmt::Debug;
use std::hash::Hash;

use rand::Rng;

/// Trait for moves a player can choose at a position.
///
/// Moves must be cloneable, comparable, and hashable so best-move sets can be
/// stored and compared.
pub trait Move: Copy + Eq + Hash + Debug + Send + Sync {
    /// Short notation for display and export.
    fn notation(&self) -> String;
}

/// Trait for game states.
///
/// Equality and hashing of a state define which positions share a memo entry,
/// so both must be derived from the same strategic fields.
pub trait GameState: Clone + Eq + Hash + Debug + Send + Sync {}

/// A successor state together with its unnormalized probability weight.
///
/// Deterministic transitions have a single outcome of weight 1. Chance
/// transitions carry weights proportional to the outcome probability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<S> {
    /// The resulting state.
    pub state: S,
    /// Relative weight of this outcome among its siblings.
    pub weight: u64,
}

impl<S> Outcome<S> {
    /// An outcome that happens with certainty.
    pub fn certain(state: S) -> Self {
        Self { state, weight: 1 }
    }

    /// An outcome with an explicit weight.
    pub fn weighted(state: S, weight: u64) -> Self {
        Self { state, weight }
    }
}

/// The main Game trait that defines the interface for any solvable game.
///
/// # Type Parameters
/// - `State`: The game state type (the memo key)
/// - `Move`: The move type
///
/// # Example
/// ```ignore
/// struct MyGame;
///
/// impl Game for MyGame {
///     type State = MyState;
///     type Move = MyMove;
///
///     // ... implement required methods
/// }
/// ```
pub trait Game: Clone + Send + Sync {
    /// The type representing a complete game state.
    type State: GameState;

    /// The type representing a decision the player can take.
    type Move: Move;

    /// Create the root state of the game tree.
    fn initial_state(&self) -> Self::State;

    /// Get the moves available at a state.
    ///
    /// Returns an empty vector for terminal states.
    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move>;

    /// Check if the given state is terminal.
    ///
    /// A state is terminal exactly when it admits no legal moves.
    fn is_terminal(&self, state: &Self::State) -> bool {
        self.legal_moves(state).is_empty()
    }

    /// Get the final score of a state, taken at face value.
    fn score(&self, state: &Self::State) -> f64;

    /// Generate every successor of `state` under `mv`, in a stable order.
    ///
    /// # Panics
    /// Implementations panic when `mv` is not legal at `state`.
    fn successors(&self, state: &Self::State, mv: &Self::Move) -> Vec<Outcome<Self::State>>;

    /// Draw one successor of `state` under `mv` proportionally to weight.
    ///
    /// Used for Monte Carlo playouts. Override this when a game can sample
    /// more cheaply than enumerating every outcome.
    fn sample_successor<R: Rng>(
        &self,
        state: &Self::State,
        mv: &Self::Move,
        rng: &mut R,
    ) -> Self::State {
        let mut outcomes = self.successors(state, mv);
        let total: u64 = outcomes.iter().map(|o| o.weight).sum();
        assert!(total > 0, "move {:?} produced no weighted successors", mv);

        let mut pick = rng.gen_range(0..total);
        let index = outcomes
            .iter()
            .position(|o| {
                if pick < o.weight {
                    true
                } else {
                    pick -= o.weight;
                    false
                }
            })
            .unwrap_or(outcomes.len() - 1);

        outcomes.swap_remove(index).state
    }

    /// Get a human-readable name for a move.
    fn move_name(&self, mv: &Self::Move) -> String {
        mv.notation()
    }

    /// Get a human-readable description of a state.
    fn state_description(&self, state: &Self::State) -> String {
        format!("{:?}", state)
    }
}
